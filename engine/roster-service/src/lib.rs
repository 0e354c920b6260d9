//! Roster ledger, budget reservation, and season lifecycle
//!
//! Single-writer model: all mutation goes through `&mut LeagueLedger`,
//! so the borrow checker is the serialization point. Reads take `&self`
//! and always observe a fully committed state.

mod error;
mod export;
mod init;
mod ledger;
mod query;
mod reservation;
mod summary;

pub use error::{Result, RosterError};
pub use export::portfolio_csv;
pub use init::{initialize_season, FranchiseSeed, InitError, PlayerSeed};
pub use ledger::LeagueLedger;
pub use query::{
    category_pool_stats, unsold_players_sorted, CategoryPoolStats, PlayerSortKey, SortOrder,
};
pub use reservation::{max_spendable, reserve_floor};
pub use summary::{franchise_summaries, CategorySlot, FranchiseSummary};
