//! Player entities and their sale state

use crate::amount::Amount;
use crate::category::Category;
use crate::franchise::FranchiseId;
use serde::{Deserialize, Serialize};

/// Stable player identifier, assigned once at season initialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub u32);

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "P{}", self.0)
    }
}

/// Playing role tag, presentation and filtering only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerRole {
    Batter,
    Bowler,
    AllRounder,
    WicketKeeper,
}

impl PlayerRole {
    pub fn label(self) -> &'static str {
        match self {
            PlayerRole::Batter => "Batter",
            PlayerRole::Bowler => "Bowler",
            PlayerRole::AllRounder => "All-Rounder",
            PlayerRole::WicketKeeper => "WK-Batter",
        }
    }
}

/// A committed sale: owning franchise and the price paid.
///
/// Sold flag, owner, and price move together; modeling them as one
/// optional struct makes the "sold iff owned iff priced" invariant
/// unrepresentable to break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sale {
    pub franchise: FranchiseId,
    pub price: Amount,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub category: Category,
    pub role: PlayerRole,
    /// Category-determined floor, denormalized for display
    pub base_price: Amount,
    pub sale: Option<Sale>,
}

impl Player {
    pub fn is_sold(&self) -> bool {
        self.sale.is_some()
    }

    pub fn owner(&self) -> Option<FranchiseId> {
        self.sale.map(|s| s.franchise)
    }

    /// Current valuation: sold price when sold, otherwise the base price
    pub fn valuation(&self) -> Amount {
        self.sale.map_or(self.base_price, |s| s.price)
    }
}
