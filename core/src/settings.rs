use serde::{Deserialize, Serialize};

use crate::*;

/// Board dimensions and per-difficulty densities, as read from a settings file.
///
/// Every field is optional when deserializing, missing ones keep the built-in defaults.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameSettings {
    pub rows: Coord,
    pub cols: Coord,
    pub densities: Densities,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Densities {
    pub easy: f64,
    pub medium: f64,
    pub hard: f64,
}

impl Densities {
    pub const fn get(&self, difficulty: Difficulty) -> f64 {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard => self.hard,
        }
    }
}

impl Default for Densities {
    fn default() -> Self {
        Self {
            easy: Difficulty::Easy.density(),
            medium: Difficulty::Medium.density(),
            hard: Difficulty::Hard.density(),
        }
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        let (rows, cols) = DEFAULT_SIZE;
        Self {
            rows,
            cols,
            densities: Densities::default(),
        }
    }
}

impl GameSettings {
    pub fn board_config(&self, difficulty: Difficulty) -> Result<BoardConfig> {
        BoardConfig::new((self.rows, self.cols), self.densities.get(difficulty))
    }

    /// Checks every difficulty up front so a bad file fails at load rather than mid-session.
    pub fn validate(&self) -> Result<()> {
        for difficulty in Difficulty::ALL {
            self.board_config(difficulty)?;
        }
        Ok(())
    }
}
