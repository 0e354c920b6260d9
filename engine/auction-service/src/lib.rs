//! # Auction Service
//!
//! Operator-facing facade over the auction engine. One [`AuctionService`]
//! owns the season: the roster ledger, the live gavel, retention draws,
//! and the match log, with every committed mutation persisted to the
//! data directory before the call returns.

pub mod error;
pub mod logging;
pub mod seed;
pub mod service;

pub use error::{Result, ServiceError};
pub use logging::initialize_logging;
pub use seed::{default_seed, load_seed, SeedError, SeedFile};
pub use service::AuctionService;
