use alloc::vec::Vec;
use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Player-visible state of a single cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    #[default]
    Hidden,
    Flagged,
    /// Opened safe cell with its adjacent mine count.
    Revealed(u8),
    /// Mine exposed by losing the game.
    Exploded,
}

impl CellState {
    pub const fn is_unrevealed(self) -> bool {
        matches!(self, Self::Hidden | Self::Flagged)
    }

    pub const fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed(_))
    }

    pub const fn adjacent_mine_count(self) -> Option<u8> {
        match self {
            Self::Revealed(count) => Some(count),
            _ => None,
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    has_mine: bool,
    state: CellState,
}

impl Cell {
    pub const fn has_mine(self) -> bool {
        self.has_mine
    }

    pub const fn state(self) -> CellState {
        self.state
    }

    /// Only meaningful once the cell is revealed.
    pub const fn adjacent_mine_count(self) -> Option<u8> {
        self.state.adjacent_mine_count()
    }
}

/// Grid of cells plus the mine layout, addressed by `(row, column)`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<Cell>,
    mine_count: CellCount,
    mines_placed: bool,
    revealed_count: CellCount,
    flagged_count: CellCount,
}

impl Board {
    /// Allocates an all-hidden board without mines.
    pub fn new(rows: Coord, columns: Coord, mine_count: CellCount) -> Result<Self> {
        Self::from_config(GameConfig::new(rows, columns, mine_count)?)
    }

    pub fn from_config(config: GameConfig) -> Result<Self> {
        config.validate()?;
        if config.mines > config.total_cells() / 2 {
            log::warn!(
                "Dense board requested: {} mines on {} cells",
                config.mines,
                config.total_cells()
            );
        }
        Ok(Self {
            cells: Array2::default(nd_index(config.size())),
            mine_count: config.mines,
            mines_placed: false,
            revealed_count: 0,
            flagged_count: 0,
        })
    }

    pub fn config(&self) -> GameConfig {
        GameConfig::new_unchecked(self.rows(), self.columns(), self.mine_count)
    }

    pub fn size(&self) -> Coord2 {
        let (rows, columns) = self.cells.dim();
        // dimensions come from a Coord2 so they always fit
        (rows as Coord, columns as Coord)
    }

    pub fn rows(&self) -> Coord {
        self.size().0
    }

    pub fn columns(&self) -> Coord {
        self.size().1
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn total_cells(&self) -> CellCount {
        let (rows, columns) = self.size();
        cell_count(rows, columns)
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells().saturating_sub(self.mine_count)
    }

    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    pub fn flagged_count(&self) -> CellCount {
        self.flagged_count
    }

    pub fn mines_placed(&self) -> bool {
        self.mines_placed
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let (rows, columns) = self.size();
        if coords.0 < rows && coords.1 < columns {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds)
        }
    }

    pub fn cell_at(&self, coords: Coord2) -> Result<Cell> {
        let coords = self.validate_coords(coords)?;
        Ok(self[coords])
    }

    /// In-bounds neighbors of `coords`, scanned row by row.
    pub fn neighbors(&self, coords: Coord2) -> NeighborIter {
        NeighborIter::new(coords, self.size())
    }

    pub fn iter(&self) -> impl Iterator<Item = (Coord2, Cell)> + '_ {
        self.cells
            .indexed_iter()
            .map(|((row, col), &cell)| ((row as Coord, col as Coord), cell))
    }

    /// Mine coordinates in row-major order.
    pub fn mine_locations(&self) -> Vec<Coord2> {
        self.iter()
            .filter(|(_, cell)| cell.has_mine())
            .map(|(coords, _)| coords)
            .collect()
    }

    /// Runs `placer` once, then freezes the layout.
    pub fn place_mines<P: MinePlacer + ?Sized>(&mut self, placer: &mut P) -> Result<()> {
        if self.mines_placed {
            return Err(GameError::MinesAlreadyPlaced);
        }

        let mine_count = self.mine_count;
        if let Err(err) = placer.place(self, mine_count) {
            self.clear_mines();
            return Err(err);
        }

        let placed = self.iter().filter(|(_, cell)| cell.has_mine()).count();
        if placed != usize::from(self.mine_count) {
            log::warn!(
                "Mine placement count mismatch, actual: {}, requested: {}",
                placed,
                self.mine_count
            );
            self.clear_mines();
            return Err(GameError::InvalidMineCount);
        }

        self.mines_placed = true;
        log::debug!(
            "Placed {} mines on a {}x{} board",
            self.mine_count,
            self.rows(),
            self.columns()
        );
        Ok(())
    }

    /// Puts a mine at `coords`, returning whether the cell was mine-free before.
    ///
    /// Only allowed while the layout is still being built by a [`MinePlacer`].
    pub fn set_mine(&mut self, coords: Coord2) -> Result<bool> {
        let coords = self.validate_coords(coords)?;
        if self.mines_placed {
            return Err(GameError::MinesAlreadyPlaced);
        }
        let cell = &mut self.cells[nd_index(coords)];
        let added = !cell.has_mine;
        cell.has_mine = true;
        Ok(added)
    }

    fn clear_mines(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.has_mine = false;
        }
    }

    /// Changes the visible state of a cell, keeping the revealed and flagged tallies in step.
    ///
    /// Tallies saturate so a deserialized board with inconsistent counts cannot underflow.
    pub(crate) fn set_state(&mut self, coords: Coord2, state: CellState) {
        let cell = &mut self.cells[nd_index(coords)];
        let previous = cell.state;
        cell.state = state;

        if previous.is_revealed() {
            self.revealed_count = self.revealed_count.saturating_sub(1);
        }
        if state.is_revealed() {
            self.revealed_count = self.revealed_count.saturating_add(1);
        }
        if previous == CellState::Flagged {
            self.flagged_count = self.flagged_count.saturating_sub(1);
        }
        if state == CellState::Flagged {
            self.flagged_count = self.flagged_count.saturating_add(1);
        }
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[nd_index(coords)]
    }
}
