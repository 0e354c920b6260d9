//! Match scoring and standings.
//!
//! Scorecards are appended to a [`MatchLog`] and never rewritten; every
//! read re-resolves attribution and captaincy against the current
//! rosters. See [`standings`] for the leaderboard and per-row views.

pub mod error;
pub mod record;
pub mod resolve;
pub mod standings;

pub use error::{Result, ScoringError};
pub use record::{FranchiseSnapshot, MatchLog, MatchRecord, PlayerPerformance};
pub use resolve::{Attribution, NameIndex};
pub use standings::{
    free_agent_total, leaderboard, scored_rows, FranchiseStanding, RowFilter, ScoredRow,
};
