use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Invalid board configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
    #[error("Unknown difficulty, expected one of: easy, medium, hard")]
    UnknownDifficulty,
}

/// Reason a board configuration was rejected.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("board must be at least {min}x{min}, got {rows}x{cols}")]
    BoardTooSmall { rows: u8, cols: u8, min: u8 },
    #[error("board sides must not exceed {max}, got {rows}x{cols}")]
    BoardTooLarge { rows: usize, cols: usize, max: u8 },
    #[error("mine density must be a number between 0 and 1")]
    DensityOutOfRange,
}

pub type Result<T> = core::result::Result<T, GameError>;
