use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// A single cell changing its visible state.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellUpdate {
    pub coords: Coord2,
    pub state: CellState,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    GameOver {
        mine_locations: Vec<Coord2>,
        triggered: Coord2,
    },
    GameWon {
        elapsed_seconds: u32,
    },
}

/// Everything the display layer needs after one player action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub status: GameStatus,
    pub updates: Vec<CellUpdate>,
    pub flags_remaining: i32,
    pub event: Option<GameEvent>,
}

impl Turn {
    /// Whether this turn could have caused an update to the display
    pub fn has_update(&self) -> bool {
        !self.updates.is_empty() || self.event.is_some()
    }
}
