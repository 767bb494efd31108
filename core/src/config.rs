use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::*;

/// Dimensions and mine count of one game.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub rows: Coord,
    pub columns: Coord,
    pub mines: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(rows: Coord, columns: Coord, mines: CellCount) -> Self {
        Self {
            rows,
            columns,
            mines,
        }
    }

    pub fn new(rows: Coord, columns: Coord, mines: CellCount) -> Result<Self> {
        let config = Self::new_unchecked(rows, columns, mines);
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.columns == 0 {
            return Err(GameError::InvalidDimension);
        }
        if self.mines >= self.total_cells() {
            return Err(GameError::InvalidMineCount);
        }
        Ok(())
    }

    pub const fn size(&self) -> Coord2 {
        (self.rows, self.columns)
    }

    pub const fn total_cells(&self) -> CellCount {
        cell_count(self.rows, self.columns)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells().saturating_sub(self.mines)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Difficulty::default().config()
    }
}

impl From<Difficulty> for GameConfig {
    fn from(difficulty: Difficulty) -> Self {
        difficulty.config()
    }
}

/// Built-in presets.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Self::Easy, Self::Medium, Self::Hard];

    pub const fn config(self) -> GameConfig {
        match self {
            Self::Easy => GameConfig::new_unchecked(9, 9, 5),
            Self::Medium => GameConfig::new_unchecked(16, 16, 40),
            Self::Hard => GameConfig::new_unchecked(16, 30, 99),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
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
            .find(|difficulty| difficulty.name().eq_ignore_ascii_case(s.trim()))
            .ok_or(GameError::UnknownDifficulty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_match_table() {
        assert_eq!(Difficulty::Easy.config(), GameConfig::new_unchecked(9, 9, 5));
        assert_eq!(
            Difficulty::Medium.config(),
            GameConfig::new_unchecked(16, 16, 40)
        );
        assert_eq!(
            Difficulty::Hard.config(),
            GameConfig::new_unchecked(16, 30, 99)
        );
        for difficulty in Difficulty::ALL {
            assert_eq!(difficulty.config().validate(), Ok(()));
        }
    }

    #[test]
    fn new_rejects_bad_input() {
        assert_eq!(GameConfig::new(0, 9, 1), Err(GameError::InvalidDimension));
        assert_eq!(GameConfig::new(9, 0, 1), Err(GameError::InvalidDimension));
        assert_eq!(GameConfig::new(3, 3, 9), Err(GameError::InvalidMineCount));
        assert_eq!(GameConfig::new(1, 1, 0).map(|c| c.safe_cells()), Ok(1));
    }

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("Hard".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert_eq!(" medium ".parse::<Difficulty>(), Ok(Difficulty::Medium));
        assert_eq!(
            "expert".parse::<Difficulty>(),
            Err(GameError::UnknownDifficulty)
        );
    }

    #[test]
    fn default_is_easy() {
        assert_eq!(GameConfig::default(), Difficulty::Easy.config());
    }
}
