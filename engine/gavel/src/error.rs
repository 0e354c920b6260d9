//! Error types for the bidding state machine

use league_model::{Amount, Category, PlayerId};
use roster_service::RosterError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AuctionError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuctionError {
    #[error("No auction is currently open")]
    NoOpenLot,

    #[error("An auction is already open for player {0}")]
    LotAlreadyOpen(PlayerId),

    #[error("Player {0} has already been sold")]
    AlreadySold(PlayerId),

    #[error("{0} is already the leading bidder")]
    AlreadyLeading(String),

    #[error("Cannot finalize a sale without a leading bidder")]
    NoLeadingBidder,

    #[error("Final price for Category {category} must follow the {increment} bidding increment")]
    InvalidIncrement { category: Category, increment: Amount },

    #[error(transparent)]
    Roster(#[from] RosterError),
}
