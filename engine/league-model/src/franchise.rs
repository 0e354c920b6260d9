//! Franchise entities

use crate::amount::Amount;
use crate::player::PlayerId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FranchiseId(pub u32);

impl std::fmt::Display for FranchiseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "F{}", self.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Franchise {
    pub id: FranchiseId,
    pub name: String,
    /// Current purse; debited on every sale, credited on release
    pub budget: Amount,
    /// Presentation only
    pub color: String,
    /// Presentation only
    pub icon: String,
    pub captain: Option<PlayerId>,
    pub vice_captain: Option<PlayerId>,
}

impl Franchise {
    pub fn new(id: FranchiseId, name: impl Into<String>, budget: Amount) -> Self {
        Self {
            id,
            name: name.into(),
            budget,
            color: String::new(),
            icon: "shield".to_string(),
            captain: None,
            vice_captain: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_franchise_defaults() {
        let f = Franchise::new(FranchiseId(3), "Sagar", Amount::from_lakhs(50));
        assert_eq!(f.id.to_string(), "F3");
        assert_eq!(f.budget, Amount::from_lakhs(50));
        assert!(f.captain.is_none());
    }
}
