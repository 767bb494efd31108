use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Board needs at least one row and one column")]
    InvalidDimension,
    #[error("Mine count must leave at least one safe cell")]
    InvalidMineCount,
    #[error("Coordinates are outside the board")]
    OutOfBounds,
    #[error("Cell hides a mine")]
    MineCell,
    #[error("Mines were already placed on this board")]
    MinesAlreadyPlaced,
    #[error("Unknown difficulty preset")]
    UnknownDifficulty,
}

pub type Result<T> = core::result::Result<T, GameError>;
