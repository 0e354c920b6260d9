use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScoringError>;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ScoringError {
    #[error("match {0} already recorded")]
    DuplicateMatch(u32),

    #[error("match {0} not found")]
    MatchNotFound(u32),

    #[error("match has no performance rows")]
    EmptyMatch,
}
