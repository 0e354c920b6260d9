//! Error types for roster mutations
//!
//! Every variant is a recoverable, user-facing validation failure: the
//! attempted operation is rejected and no state mutates.

use league_model::{Amount, Category, FranchiseId, PlayerId};
use thiserror::Error;

/// Result type for roster operations
pub type Result<T> = std::result::Result<T, RosterError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    #[error("Insufficient budget: required {required}, available {available}")]
    InsufficientBudget { required: Amount, available: Amount },

    #[error("{franchise} has already reached the limit for Category {category}")]
    QuotaExceeded { franchise: String, category: Category },

    #[error("Price {price} is below the Category base price of {base}")]
    BelowBasePrice { price: Amount, base: Amount },

    #[error("Player {0} is not owned by any franchise")]
    NotOwned(PlayerId),

    #[error("Owners like {player} cannot be moved from their home franchise")]
    ImmovableOwner { player: String },

    #[error("Player not found: {0}")]
    PlayerNotFound(PlayerId),

    #[error("Franchise not found: {0}")]
    FranchiseNotFound(FranchiseId),
}
