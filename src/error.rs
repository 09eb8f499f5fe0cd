use std::path::PathBuf;

use crate::types::PlayerId;

/// Rejections raised while selecting or committing a play.
///
/// None of these are fatal: the game is left exactly as it was and the
/// caller may prompt the player again.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlayError {
    #[error("board index {index} out of range (board has {cells} cells)")]
    InvalidBoardIndex { index: usize, cells: usize },

    #[error("hand index {index} out of range (hand holds {len} cards)")]
    InvalidHandIndex { index: usize, len: usize },

    #[error("cell {0} is already occupied")]
    CellOccupied(usize),

    #[error("it is not {}'s turn", .0.label())]
    NotYourTurn(PlayerId),

    #[error("a hand card and then a board cell must be selected before playing")]
    SelectionIncomplete,

    #[error("the game is already finished")]
    GameFinished,
}

impl PlayError {
    /// True for index range violations, false for ordinary illegal plays.
    pub fn is_invalid_index(&self) -> bool {
        matches!(
            self,
            PlayError::InvalidBoardIndex { .. } | PlayError::InvalidHandIndex { .. }
        )
    }
}

/// Errors raised while building cards or card pools.
#[derive(Debug, thiserror::Error)]
pub enum CardError {
    #[error("card '{name}' has invalid rank {rank} (must be 1..=10)")]
    InvalidRank { name: String, rank: u8 },

    #[error("failed to read cards file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse cards JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no cards in pool")]
    Empty,

    #[error("pool exhausted: needed {needed} cards, {available} available")]
    PoolExhausted { needed: usize, available: usize },
}

/// Errors raised while building or loading a game configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("board dimensions must be positive (got {height}x{width})")]
    InvalidDimensions { height: usize, width: usize },

    #[error("config validation error: {0}")]
    Validation(String),

    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Cards(#[from] CardError),
}
