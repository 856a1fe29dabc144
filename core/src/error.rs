use thiserror::Error;

/// Why a requested matrix size was refused.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum InvalidSize {
    #[error("Please enter size to start game")]
    Missing,
    #[error("Size must be a whole number")]
    NotANumber,
    #[error("Game can't start with size <= 0")]
    NotPositive,
    #[error("Size can be at most {}", crate::Coord::MAX)]
    TooLarge,
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error(transparent)]
    InvalidSize(#[from] InvalidSize),
    #[error("Invalid row or column index")]
    InvalidIndex,
    #[error("Source and destination shapes do not match")]
    InvalidShape,
    #[error("Puzzle is already solved")]
    AlreadySolved,
    #[error("Status does not match the matrices and move counts")]
    InconsistentStatus,
    #[error("Game has not started")]
    NotStarted,
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
}

pub type Result<T> = core::result::Result<T, GameError>;
