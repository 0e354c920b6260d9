//! Season initialization and reset
//!
//! Builds the initial ledger from the seed lists, then runs the
//! one-time auto-retention pass: any franchise whose name matches a
//! player's name case-insensitively pre-buys that player at 2.5x the
//! category base price before bidding opens.

use crate::error::Result;
use crate::ledger::LeagueLedger;
use league_model::{
    Amount, Category, Franchise, FranchiseId, LeagueRules, Player, PlayerId, PlayerRole, RulesError,
};
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerSeed {
    pub name: String,
    pub category: Category,
    pub role: PlayerRole,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FranchiseSeed {
    pub name: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub icon: String,
}

#[derive(Debug, thiserror::Error)]
pub enum InitError {
    #[error("invalid league rules: {0}")]
    Rules(#[from] RulesError),
    #[error(transparent)]
    Roster(#[from] crate::error::RosterError),
}

/// Owner players are retained at 2.5x the category base price.
fn owner_retention_price(rules: &LeagueRules, category: Category) -> Amount {
    (rules.base_price(category) * 25) / 10
}

/// Build a fresh season ledger: players and franchises created once,
/// ids assigned in seed order, auto-retention applied.
pub fn initialize_season(
    rules: LeagueRules,
    franchise_seeds: &[FranchiseSeed],
    player_seeds: &[PlayerSeed],
) -> std::result::Result<LeagueLedger, InitError> {
    rules.validate()?;

    let players: Vec<Player> = player_seeds
        .iter()
        .enumerate()
        .map(|(i, seed)| Player {
            id: PlayerId(i as u32 + 1),
            name: seed.name.clone(),
            category: seed.category,
            role: seed.role,
            base_price: rules.base_price(seed.category),
            sale: None,
        })
        .collect();

    let franchises: Vec<Franchise> = franchise_seeds
        .iter()
        .enumerate()
        .map(|(i, seed)| {
            let mut franchise =
                Franchise::new(FranchiseId(i as u32 + 1), seed.name.clone(), rules.starting_budget);
            franchise.color = seed.color.clone();
            if !seed.icon.is_empty() {
                franchise.icon = seed.icon.clone();
            }
            franchise
        })
        .collect();

    let mut ledger = LeagueLedger::new(rules, players, franchises);
    auto_retain_owners(&mut ledger)?;
    Ok(ledger)
}

fn auto_retain_owners(ledger: &mut LeagueLedger) -> Result<()> {
    let pairs: Vec<(PlayerId, FranchiseId)> = ledger
        .franchises()
        .iter()
        .filter_map(|f| {
            ledger
                .players()
                .iter()
                .find(|p| p.name.eq_ignore_ascii_case(&f.name))
                .map(|p| (p.id, f.id))
        })
        .collect();

    for (player_id, franchise_id) in pairs {
        let category = ledger.player(player_id)?.category;
        let price = owner_retention_price(ledger.rules(), category);
        ledger.sell(player_id, franchise_id, price)?;
        info!(player = %player_id, franchise = %franchise_id, %price, "owner auto-retained");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn franchise(name: &str) -> FranchiseSeed {
        FranchiseSeed { name: name.to_string(), color: String::new(), icon: String::new() }
    }

    fn player(name: &str, category: Category) -> PlayerSeed {
        PlayerSeed { name: name.to_string(), category, role: PlayerRole::Batter }
    }

    #[test]
    fn owners_are_pre_sold_at_two_and_a_half_times_base() {
        let ledger = initialize_season(
            LeagueRules::default(),
            &[franchise("Sagar"), franchise("Raju Bhai")],
            &[
                player("Sagar", Category::APlus),
                player("raju bhai", Category::C),
                player("Yash", Category::APlus),
            ],
        )
        .unwrap();

        let owner = ledger.players().iter().find(|p| p.name == "Sagar").unwrap();
        assert!(owner.is_sold());
        assert_eq!(owner.valuation(), Amount::from_cents(1250));

        // Name matching is case-insensitive.
        let raju = ledger.players().iter().find(|p| p.name == "raju bhai").unwrap();
        assert_eq!(raju.valuation(), Amount::from_cents(250));

        let sagar_franchise =
            ledger.franchises().iter().find(|f| f.name == "Sagar").unwrap();
        assert_eq!(
            sagar_franchise.budget,
            Amount::from_lakhs(50) - Amount::from_cents(1250)
        );

        // Non-owner pool players stay unsold.
        assert!(!ledger.players().iter().find(|p| p.name == "Yash").unwrap().is_sold());
    }

    #[test]
    fn invalid_rules_are_rejected_before_any_state_exists() {
        let rules = LeagueRules {
            starting_budget: Amount::from_lakhs(1),
            ..LeagueRules::default()
        };
        assert!(initialize_season(rules, &[], &[]).is_err());
    }
}
