use alloc::vec::Vec;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::*;

/// Strategy for building the mine layout of a fresh [`Board`].
pub trait MinePlacer {
    /// Puts exactly `mine_count` distinct mines on `board` through [`Board::set_mine`].
    fn place(&mut self, board: &mut Board, mine_count: CellCount) -> Result<()>;
}

/// Uniform rejection sampling: draw any cell, retry when it already has a mine.
///
/// The first clicked cell gets no special treatment, so the first move can lose.
#[derive(Clone, Debug)]
pub struct RandomMinePlacer {
    rng: SmallRng,
}

impl RandomMinePlacer {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Seeds a new placer from another generator.
    pub fn from_rng<R: Rng>(rng: &mut R) -> Self {
        Self::new(rng.random())
    }
}

impl MinePlacer for RandomMinePlacer {
    fn place(&mut self, board: &mut Board, mine_count: CellCount) -> Result<()> {
        let (rows, columns) = board.size();
        if mine_count >= board.total_cells() {
            return Err(GameError::InvalidMineCount);
        }

        let mut placed = 0;
        let mut draws: u32 = 0;
        while placed < mine_count {
            let coords = (
                self.rng.random_range(0..rows),
                self.rng.random_range(0..columns),
            );
            draws += 1;
            if board.set_mine(coords)? {
                placed += 1;
            }
        }

        log::trace!("Rejection sampling placed {} mines in {} draws", placed, draws);
        Ok(())
    }
}

/// Places mines at known coordinates, for replays and scripted boards.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedMinePlacer {
    mines: Vec<Coord2>,
}

impl FixedMinePlacer {
    /// Duplicate coordinates count once.
    pub fn new(mines: &[Coord2]) -> Self {
        let mut mines = mines.to_vec();
        mines.sort_unstable();
        mines.dedup();
        Self { mines }
    }

    pub fn mines(&self) -> &[Coord2] {
        &self.mines
    }
}

impl MinePlacer for FixedMinePlacer {
    fn place(&mut self, board: &mut Board, mine_count: CellCount) -> Result<()> {
        for &coords in &self.mines {
            board.validate_coords(coords)?;
        }
        if self.mines.len() != usize::from(mine_count) {
            return Err(GameError::InvalidMineCount);
        }
        for &coords in &self.mines {
            board.set_mine(coords)?;
        }
        Ok(())
    }
}
