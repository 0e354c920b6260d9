//! Retention draw resolver
//!
//! Assigns a player to a franchise outside open bidding, at the
//! category's fixed retention price. Eligibility is stricter than the
//! open-bidding quota check: a franchise with even one player already
//! in the tier is out of that tier's draw entirely.
//!
//! The engine's contract is a single uniform sample over the interested
//! set. Any animated reveal belongs to the UI.

use league_model::{Category, Franchise, FranchiseId, PlayerId};
use rand::seq::SliceRandom;
use rand::Rng;
use roster_service::{LeagueLedger, RosterError};
use thiserror::Error;
use tracing::info;

pub type Result<T> = std::result::Result<T, DrawError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DrawError {
    #[error("{franchise} is not eligible for a Category {category} draw")]
    Ineligible { franchise: String, category: Category },

    #[error("A draw needs at least one interested franchise")]
    NoInterest,

    #[error("Player {0} has already been assigned")]
    AlreadyAssigned(PlayerId),

    #[error(transparent)]
    Roster(#[from] RosterError),
}

/// Franchises eligible for a draw over a player of `category`: under
/// quota AND currently owning zero players in that category.
pub fn eligible_franchises(ledger: &LeagueLedger, category: Category) -> Vec<&Franchise> {
    ledger
        .franchises()
        .iter()
        .filter(|f| {
            let owned = ledger.occupancy(f.id, category);
            owned < ledger.rules().quota(category) && owned == 0
        })
        .collect()
}

/// Uniformly sample the winner from the interested subset. Interest is
/// declared by the operator; franchises that are eligible but not
/// interested never enter the draw.
pub fn run_draw<R: Rng + ?Sized>(
    ledger: &LeagueLedger,
    category: Category,
    interested: &[FranchiseId],
    rng: &mut R,
) -> Result<FranchiseId> {
    if interested.is_empty() {
        return Err(DrawError::NoInterest);
    }
    let eligible = eligible_franchises(ledger, category);
    for &id in interested {
        let franchise = ledger.franchise(id)?;
        if !eligible.iter().any(|f| f.id == id) {
            return Err(DrawError::Ineligible { franchise: franchise.name.clone(), category });
        }
    }
    let winner = *interested.choose(rng).expect("interested set is non-empty");
    info!(%winner, %category, pool = interested.len(), "draw resolved");
    Ok(winner)
}

/// Commit a draw result (or a single-franchise deterministic retention)
/// at the category's fixed retention price. Budgets may have moved
/// since interest was declared, so affordability is re-validated here;
/// on failure nothing mutates.
pub fn commit_retention(
    ledger: &mut LeagueLedger,
    player_id: PlayerId,
    franchise_id: FranchiseId,
) -> Result<()> {
    let player = ledger.player(player_id)?;
    if player.is_sold() {
        return Err(DrawError::AlreadyAssigned(player_id));
    }
    let category = player.category;
    let franchise = ledger.franchise(franchise_id)?;

    // Quota is validated to be at least one, so zero owned implies room.
    if ledger.occupancy(franchise_id, category) > 0 {
        return Err(DrawError::Ineligible { franchise: franchise.name.clone(), category });
    }

    let price = ledger.rules().retention_price(category);
    if franchise.budget < price {
        return Err(RosterError::InsufficientBudget {
            required: price,
            available: franchise.budget,
        }
        .into());
    }

    ledger.sell(player_id, franchise_id, price)?;
    info!(player = %player_id, franchise = %franchise_id, %price, "retention committed");
    Ok(())
}
