//! # Persistence Layer
//!
//! File-backed storage for the auction engine. League state is saved as
//! plain JSON documents in a data directory and reloaded at startup, so
//! an auction can stop and resume mid-season. Writes go through a temp
//! file and an atomic rename; there is no partial-write window.

pub mod error;
pub mod store;

pub use error::{PersistenceError, Result};
pub use store::SnapshotStore;
