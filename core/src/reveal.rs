use alloc::collections::VecDeque;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Result of opening one safe cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealOutcome {
    pub adjacent_mine_count: u8,
}

/// Opens a single safe cell and reports its adjacent mine count.
///
/// Opening an already revealed cell changes nothing and reports the stored count. Mines are
/// never opened here; losing is handled by [`GameSession`], so a mine yields
/// [`GameError::MineCell`]. The caller decides whether to follow up with [`cascade`].
pub fn reveal_single(
    board: &mut Board,
    coords: Coord2,
    updates: &mut Vec<CellUpdate>,
) -> Result<RevealOutcome> {
    let coords = board.validate_coords(coords)?;
    let cell = board[coords];

    if cell.has_mine() {
        return Err(GameError::MineCell);
    }

    let adjacent_mine_count = match cell.state() {
        CellState::Revealed(count) => count,
        _ => open_cell(board, coords, updates),
    };
    Ok(RevealOutcome {
        adjacent_mine_count,
    })
}

/// Flood fill from `origin`: opens it, then keeps opening the neighbors of every zero cell.
///
/// Uses a work-list so large empty regions do not grow the call stack. Cells already revealed
/// are skipped, which makes repeated calls from the same origin a no-op. Flagged cells in the
/// way are opened and lose their flag. Returns how many cells were newly revealed.
pub fn cascade(
    board: &mut Board,
    origin: Coord2,
    updates: &mut Vec<CellUpdate>,
) -> Result<CellCount> {
    let revealed_before = board.revealed_count();
    let RevealOutcome {
        adjacent_mine_count,
    } = reveal_single(board, origin, updates)?;

    if adjacent_mine_count == 0 {
        let mut to_visit: VecDeque<Coord2> = board
            .neighbors(origin)
            .filter(|&pos| !board[pos].state().is_revealed())
            .collect();

        while let Some(visit_coords) = to_visit.pop_front() {
            let cell = board[visit_coords];
            if cell.has_mine() || cell.state().is_revealed() {
                continue;
            }

            if open_cell(board, visit_coords, updates) == 0 {
                to_visit.extend(
                    board
                        .neighbors(visit_coords)
                        .filter(|&pos| !board[pos].state().is_revealed()),
                );
            }
        }
    }

    let newly_revealed = board.revealed_count() - revealed_before;
    log::trace!("Cascade from {:?} revealed {} cells", origin, newly_revealed);
    Ok(newly_revealed)
}

fn open_cell(board: &mut Board, coords: Coord2, updates: &mut Vec<CellUpdate>) -> u8 {
    let count = count_around(board, coords);
    let state = CellState::Revealed(count);
    board.set_state(coords, state);
    updates.push(CellUpdate { coords, state });
    count
}
