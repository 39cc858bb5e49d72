use alloc::string::String;
use thiserror::Error;

use crate::CategoryId;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Board shape does not match declared size")]
    InvalidBoardShape,
}

pub type Result<T> = core::result::Result<T, GameError>;

/// Anything that went wrong while building a board from the trivia service.
///
/// From the player's point of view these are all the same failure, the game goes back to a state where restarting
/// is the retry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TriviaError {
    #[error("Request failed: {0}")]
    Request(String),
    #[error("Trivia service responded with status {code}")]
    Status { code: u16 },
    #[error("Malformed response: {0}")]
    Decode(String),
    #[error("Only {available} categories available, {wanted} needed")]
    NotEnoughCategories { wanted: usize, available: usize },
    #[error("Category {id} only has {available} clues, {wanted} needed")]
    NotEnoughClues {
        id: CategoryId,
        wanted: usize,
        available: usize,
    },
    #[error(transparent)]
    Board(#[from] GameError),
}

pub type TriviaResult<T> = core::result::Result<T, TriviaError>;
