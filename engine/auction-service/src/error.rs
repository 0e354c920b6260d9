//! Service-level error type

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServiceError>;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("no saved season in data directory")]
    NoSeason,

    #[error("a season already exists; pass force to overwrite")]
    SeasonExists,

    #[error("captaincy requires the player to be on the franchise roster")]
    CaptainNotOnRoster,

    #[error("player {0} is already sold")]
    AlreadySold(league_model::PlayerId),

    #[error(transparent)]
    Roster(#[from] roster_service::RosterError),

    #[error(transparent)]
    Auction(#[from] gavel::AuctionError),

    #[error(transparent)]
    Draw(#[from] retention_draw::DrawError),

    #[error(transparent)]
    Scoring(#[from] scoring_engine::ScoringError),

    #[error(transparent)]
    Persistence(#[from] persistence::PersistenceError),

    #[error(transparent)]
    Init(#[from] roster_service::InitError),

    #[error(transparent)]
    Seed(#[from] crate::seed::SeedError),
}
