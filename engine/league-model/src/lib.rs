//! Shared domain types for the franchise auction engine

mod amount;
mod category;
mod franchise;
mod player;

pub use amount::Amount;
pub use category::{Category, CategoryRules, LeagueRules, RulesError, ALL_CATEGORIES};
pub use franchise::{Franchise, FranchiseId};
pub use player::{Player, PlayerId, PlayerRole, Sale};
