use crate::*;

/// Number of mines among the neighbors of `coords`, never counting the cell itself.
///
/// Recomputed on every call.
pub fn count_around(board: &Board, coords: Coord2) -> u8 {
    let count = board
        .neighbors(coords)
        .filter(|&pos| board[pos].has_mine())
        .count();
    // at most 8 neighbors
    count as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(size: Coord2, mines: &[Coord2]) -> Board {
        let mut board = Board::new(size.0, size.1, mines.len() as CellCount).unwrap();
        board.place_mines(&mut FixedMinePlacer::new(mines)).unwrap();
        board
    }

    #[test]
    fn counts_all_eight_neighbors() {
        let ring = [
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 0),
            (1, 2),
            (2, 0),
            (2, 1),
            (2, 2),
        ];
        let board = board((3, 3), &ring);

        assert_eq!(count_around(&board, (1, 1)), 8);
        assert_eq!(count_around(&board, (0, 0)), 2);
    }

    #[test]
    fn does_not_count_itself() {
        let board = board((3, 3), &[(1, 1)]);

        assert_eq!(count_around(&board, (1, 1)), 0);
        for (coords, _) in board.iter().filter(|&(pos, _)| pos != (1, 1)) {
            assert_eq!(count_around(&board, coords), 1);
        }
    }

    #[test]
    fn never_exceeds_eight_on_random_boards() {
        for seed in 0..10 {
            let mut board = Board::new(16, 30, 99).unwrap();
            board.place_mines(&mut RandomMinePlacer::new(seed)).unwrap();

            for (coords, _) in board.iter() {
                let count = count_around(&board, coords);
                let expected = board
                    .neighbors(coords)
                    .filter(|&pos| board[pos].has_mine())
                    .count();
                assert!(count <= 8);
                assert_eq!(usize::from(count), expected);
            }
        }
    }

    #[test]
    fn edges_only_see_in_bounds_cells() {
        let board = board((2, 5), &[(0, 0), (1, 4)]);

        assert_eq!(count_around(&board, (1, 0)), 1);
        assert_eq!(count_around(&board, (0, 3)), 1);
        assert_eq!(count_around(&board, (0, 2)), 0);
    }
}
