use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use settings::*;
pub use types::*;

mod board;
mod cell;
mod engine;
mod error;
mod generator;
mod settings;
mod types;

/// Smallest accepted board side, anything narrower is rejected as degenerate.
pub const MIN_SIDE: Coord = 3;

/// Board size `(rows, cols)` used unless configured otherwise.
pub const DEFAULT_SIZE: Coord2 = (10, 20);

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Fraction of cells that are mines at this difficulty.
    pub const fn density(self) -> f64 {
        match self {
            Self::Easy => 0.2,
            Self::Medium => 0.5,
            Self::Hard => 0.7,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }

    /// Parses a difficulty name, falling back to medium for anything unrecognized.
    pub fn from_name_or_default(name: Option<&str>) -> Self {
        name.and_then(|name| name.parse::<Self>().ok()).unwrap_or_default()
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|difficulty| s.trim().eq_ignore_ascii_case(difficulty.name()))
            .ok_or(GameError::UnknownDifficulty)
    }
}

/// Checks that a `rows x cols` grid fits `Coord` on both axes and is at least `MIN_SIDE` wide.
pub fn check_board_size(rows: usize, cols: usize) -> Result<Coord2> {
    let (Ok(narrow_rows), Ok(narrow_cols)) = (Coord::try_from(rows), Coord::try_from(cols)) else {
        return Err(ConfigError::BoardTooLarge {
            rows,
            cols,
            max: Coord::MAX,
        }
        .into());
    };

    if narrow_rows < MIN_SIDE || narrow_cols < MIN_SIDE {
        return Err(ConfigError::BoardTooSmall {
            rows: narrow_rows,
            cols: narrow_cols,
            min: MIN_SIDE,
        }
        .into());
    }

    Ok((narrow_rows, narrow_cols))
}

/// Validated board shape and mine density.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBoardConfig")]
pub struct BoardConfig {
    size: Coord2,
    density: f64,
}

#[derive(Deserialize)]
struct RawBoardConfig {
    size: Coord2,
    density: f64,
}

impl TryFrom<RawBoardConfig> for BoardConfig {
    type Error = GameError;

    fn try_from(raw: RawBoardConfig) -> Result<Self> {
        Self::new(raw.size, raw.density)
    }
}

impl BoardConfig {
    pub fn new(size: Coord2, density: f64) -> Result<Self> {
        let config = Self { size, density };
        config.validate()?;
        Ok(config)
    }

    /// Default-sized board at the built-in density of `difficulty`.
    pub const fn for_difficulty(difficulty: Difficulty) -> Self {
        Self {
            size: DEFAULT_SIZE,
            density: difficulty.density(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        let (rows, cols) = self.size;
        check_board_size(rows.into(), cols.into())?;

        if !(0.0..=1.0).contains(&self.density) {
            return Err(ConfigError::DensityOutOfRange.into());
        }

        Ok(())
    }

    pub const fn size(&self) -> Coord2 {
        self.size
    }

    pub const fn density(&self) -> f64 {
        self.density
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    /// `density * rows * cols` rounded half away from zero.
    pub fn mine_count(&self) -> CellCount {
        let total = self.total_cells();
        let mines = (self.density * f64::from(total)).round();
        // saturating float cast, then clamped to the board
        (mines as CellCount).min(total)
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::for_difficulty(Difficulty::default())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealOutcome {
    /// Nothing changed, the cell was already discovered.
    NoChange,
    /// Safe reveal, with the number of cells newly discovered.
    Revealed(CellCount),
    HitMine,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_densities() {
        assert_eq!(Difficulty::Easy.density(), 0.2);
        assert_eq!(Difficulty::Medium.density(), 0.5);
        assert_eq!(Difficulty::Hard.density(), 0.7);
        assert_eq!(Difficulty::default(), Difficulty::Medium);
    }

    #[test]
    fn difficulty_parses_case_insensitively() {
        assert_eq!("easy".parse::<Difficulty>(), Ok(Difficulty::Easy));
        assert_eq!("HARD".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert_eq!(
            "nightmare".parse::<Difficulty>(),
            Err(GameError::UnknownDifficulty)
        );
    }

    #[test]
    fn unknown_difficulty_falls_back_to_medium() {
        assert_eq!(Difficulty::from_name_or_default(Some("hard")), Difficulty::Hard);
        assert_eq!(Difficulty::from_name_or_default(Some("???")), Difficulty::Medium);
        assert_eq!(Difficulty::from_name_or_default(None), Difficulty::Medium);
    }

    #[test]
    fn default_mine_counts() {
        let counts = Difficulty::ALL.map(|d| BoardConfig::for_difficulty(d).mine_count());
        assert_eq!(counts, [40, 100, 140]);
    }

    #[test]
    fn fractional_mine_count_rounds_to_nearest() {
        // 0.25 * 9 = 2.25
        assert_eq!(BoardConfig::new((3, 3), 0.25).unwrap().mine_count(), 2);
        // 0.5 * 9 = 4.5
        assert_eq!(BoardConfig::new((3, 3), 0.5).unwrap().mine_count(), 5);
        assert_eq!(BoardConfig::new((3, 3), 1.0).unwrap().mine_count(), 9);
    }

    #[test]
    fn degenerate_configs_are_rejected() {
        assert_eq!(
            BoardConfig::new((1, 1), 0.5),
            Err(GameError::InvalidConfig(ConfigError::BoardTooSmall {
                rows: 1,
                cols: 1,
                min: MIN_SIDE,
            }))
        );
        assert!(BoardConfig::new((0, 20), 0.5).is_err());
        assert_eq!(
            BoardConfig::new((3, 3), 1.5),
            Err(GameError::InvalidConfig(ConfigError::DensityOutOfRange))
        );
        assert!(BoardConfig::new((3, 3), -0.1).is_err());
        assert!(BoardConfig::new((3, 3), f64::NAN).is_err());
    }

    #[test]
    fn board_size_must_fit_coordinates() {
        assert_eq!(check_board_size(10, 20), Ok((10, 20)));
        assert_eq!(check_board_size(255, 3), Ok((255, 3)));
        assert_eq!(
            check_board_size(256, 3),
            Err(GameError::InvalidConfig(ConfigError::BoardTooLarge {
                rows: 256,
                cols: 3,
                max: Coord::MAX,
            }))
        );
        assert!(matches!(
            check_board_size(3, 2),
            Err(GameError::InvalidConfig(ConfigError::BoardTooSmall { .. }))
        ));
    }

    #[test]
    fn deserialized_config_is_validated() {
        let config: BoardConfig =
            serde_json::from_str(r#"{"size":[4,6],"density":0.25}"#).unwrap();
        assert_eq!(config, BoardConfig::new((4, 6), 0.25).unwrap());

        let err = serde_json::from_str::<BoardConfig>(r#"{"size":[1,1],"density":5.0}"#)
            .unwrap_err()
            .to_string();
        assert!(err.contains("board must be at least 3x3"), "{err}");

        let too_dense = r#"{"size":[5,5],"density":1.5}"#;
        assert!(serde_json::from_str::<BoardConfig>(too_dense).is_err());
    }
}
