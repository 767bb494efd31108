/// Single coordinate axis used for row/column counts and positions.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, column)`.
pub type Coord2 = (Coord, Coord);

/// `ndarray` index of a cell.
pub(crate) fn nd_index((row, col): Coord2) -> [usize; 2] {
    [row.into(), col.into()]
}

/// Number of cells on a `rows` by `columns` board.
pub(crate) const fn cell_count(rows: Coord, columns: Coord) -> CellCount {
    (rows as CellCount).saturating_mul(columns as CellCount)
}

/// Row-major scan of the 3x3 block, center excluded.
const OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

fn shift(value: Coord, by: i8, limit: Coord) -> Option<Coord> {
    value.checked_add_signed(by).filter(|&shifted| shifted < limit)
}

/// In-bounds neighbors of a cell, in row-major order.
#[derive(Clone, Debug)]
pub struct NeighborIter {
    center: Coord2,
    bounds: Coord2,
    offsets: core::slice::Iter<'static, (i8, i8)>,
}

impl NeighborIter {
    pub(crate) fn new(center: Coord2, bounds: Coord2) -> Self {
        Self {
            center,
            bounds,
            offsets: OFFSETS.iter(),
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        let (row, col) = self.center;
        let (rows, columns) = self.bounds;
        self.offsets.by_ref().find_map(|&(d_row, d_col)| {
            Some((shift(row, d_row, rows)?, shift(col, d_col, columns)?))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn interior_cell_has_eight_neighbors_in_row_major_order() {
        let neighbors: Vec<_> = NeighborIter::new((1, 1), (3, 3)).collect();

        assert_eq!(
            neighbors,
            [
                (0, 0),
                (0, 1),
                (0, 2),
                (1, 0),
                (1, 2),
                (2, 0),
                (2, 1),
                (2, 2)
            ]
        );
    }

    #[test]
    fn corner_cell_skips_out_of_bounds() {
        let neighbors: Vec<_> = NeighborIter::new((0, 0), (9, 9)).collect();
        assert_eq!(neighbors, [(0, 1), (1, 0), (1, 1)]);

        let neighbors: Vec<_> = NeighborIter::new((8, 8), (9, 9)).collect();
        assert_eq!(neighbors, [(7, 7), (7, 8), (8, 7)]);
    }

    #[test]
    fn single_cell_board_has_no_neighbors() {
        assert_eq!(NeighborIter::new((0, 0), (1, 1)).count(), 0);
    }

    #[test]
    fn thin_board_neighbors() {
        let neighbors: Vec<_> = NeighborIter::new((0, 2), (1, 5)).collect();
        assert_eq!(neighbors, [(0, 1), (0, 3)]);
    }

    #[test]
    fn cell_count_covers_largest_board() {
        assert_eq!(cell_count(16, 30), 480);
        assert_eq!(cell_count(Coord::MAX, Coord::MAX), 65025);
    }
}
