use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Blocker placed on the cat cell")]
    BlockedCatCell,
    #[error("Board has no cat cell")]
    MissingCat,
    #[error("Board has more than one cat cell")]
    MultipleCats,
}

pub type Result<T> = core::result::Result<T, GameError>;
