use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Game setup. Reference rules: 3x3 board, five cards per hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub height: usize,
    pub width: usize,
    pub hand_size: usize,
    /// Fixed seed for first-turn choice and pool generation; random when absent.
    pub seed: Option<u64>,
    /// JSON card list to deal from instead of a generated pool.
    pub cards: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            height: 3,
            width: 3,
            hand_size: 5,
            seed: None,
            cards: None,
        }
    }
}

impl GameConfig {
    /// `None` when the dimensions overflow.
    #[inline]
    pub fn cell_count(&self) -> Option<usize> {
        self.height.checked_mul(self.width)
    }

    /// Load configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config: GameConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.height == 0 || self.width == 0 {
            return Err(ConfigError::InvalidDimensions {
                height: self.height,
                width: self.width,
            });
        }
        if self.hand_size == 0 {
            return Err(ConfigError::Validation("hand_size must be > 0".into()));
        }
        let cells = self.cell_count().ok_or(ConfigError::InvalidDimensions {
            height: self.height,
            width: self.width,
        })?;
        let dealt = self
            .hand_size
            .checked_mul(2)
            .ok_or_else(|| ConfigError::Validation(format!("hand_size {} is too large", self.hand_size)))?;
        check_fillable(dealt, cells, self.height, self.width)
    }
}

/// Both hands together must cover every cell or the game can never finish.
pub(crate) fn check_fillable(
    dealt: usize,
    cells: usize,
    height: usize,
    width: usize,
) -> Result<(), ConfigError> {
    if dealt < cells {
        return Err(ConfigError::Validation(format!(
            "{dealt} cards in hand cannot fill a {height}x{width} board"
        )));
    }
    Ok(())
}
