//! Derived franchise views for the UI layer

use crate::ledger::LeagueLedger;
use league_model::{Amount, Category, FranchiseId, ALL_CATEGORIES};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct CategorySlot {
    pub category: Category,
    pub owned: u8,
    pub quota: u8,
}

/// Franchise plus derived roster stats: per-category occupancy,
/// qualification flag, and how many signings are still needed.
#[derive(Debug, Clone, Serialize)]
pub struct FranchiseSummary {
    pub id: FranchiseId,
    pub name: String,
    pub budget: Amount,
    pub slots: Vec<CategorySlot>,
    /// Every category occupancy has reached its quota
    pub qualified: bool,
    pub needs_count: u32,
}

pub fn franchise_summaries(ledger: &LeagueLedger) -> Vec<FranchiseSummary> {
    ledger
        .franchises()
        .iter()
        .map(|f| {
            let slots: Vec<CategorySlot> = ALL_CATEGORIES
                .iter()
                .map(|&category| CategorySlot {
                    category,
                    owned: ledger.occupancy(f.id, category),
                    quota: ledger.rules().quota(category),
                })
                .collect();
            let qualified = slots.iter().all(|s| s.owned >= s.quota);
            let owned_total: u32 = slots.iter().map(|s| s.owned as u32).sum();
            FranchiseSummary {
                id: f.id,
                name: f.name.clone(),
                budget: f.budget,
                slots,
                qualified,
                needs_count: ledger.rules().total_quota().saturating_sub(owned_total),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::init::{initialize_season, FranchiseSeed, PlayerSeed};
    use league_model::{LeagueRules, PlayerRole};

    #[test]
    fn summary_tracks_occupancy_and_qualification() {
        let mut ledger = initialize_season(
            LeagueRules::default(),
            &[FranchiseSeed {
                name: "Lions".to_string(),
                color: String::new(),
                icon: String::new(),
            }],
            &[PlayerSeed {
                name: "Yash".to_string(),
                category: Category::APlus,
                role: PlayerRole::Batter,
            }],
        )
        .unwrap();

        let lions = ledger.franchises()[0].id;
        let yash = ledger.players()[0].id;
        ledger.sell(yash, lions, Amount::from_lakhs(5)).unwrap();

        let summary = &franchise_summaries(&ledger)[0];
        assert!(!summary.qualified);
        assert_eq!(summary.needs_count, 10);
        let aplus = summary.slots.iter().find(|s| s.category == Category::APlus).unwrap();
        assert_eq!((aplus.owned, aplus.quota), (1, 2));
    }
}
