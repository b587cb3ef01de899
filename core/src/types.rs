use ndarray::Array2;

/// Single coordinate axis, used for the board side length and for row/column positions.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

/// Number of cells on a square board of side `size`.
pub const fn area(size: Coord) -> CellCount {
    let size = size as CellCount;
    size.saturating_mul(size)
}

pub const fn in_bounds((row, col): Coord2, size: Coord) -> bool {
    row < size && col < size
}

pub trait NeighborIterExt {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter;
}

impl<T> NeighborIterExt for Array2<T> {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter {
        // boards are square, so either axis gives the side length
        let side = self.nrows().try_into().unwrap_or(Coord::MAX);
        NeighborIter::new(index, side)
    }
}

const DISPLACEMENTS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Applies `delta` to `coords`, returning a value only when it remains on a board of side `size`.
fn apply_delta(coords: Coord2, delta: (i8, i8), size: Coord) -> Option<Coord2> {
    let (row, col) = coords;
    let (d_row, d_col) = delta;

    let next_row = row.checked_add_signed(d_row)?;
    let next_col = col.checked_add_signed(d_col)?;

    in_bounds((next_row, next_col), size).then_some((next_row, next_col))
}

/// Iterates the in-bounds Chebyshev neighborhood (up to 8 cells) of `center`.
#[derive(Debug)]
pub struct NeighborIter {
    center: Coord2,
    size: Coord,
    index: u8,
}

impl NeighborIter {
    pub fn new(center: Coord2, size: Coord) -> Self {
        Self {
            center,
            size,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if usize::from(self.index) >= DISPLACEMENTS.len() {
                return None;
            }

            let next_item = apply_delta(self.center, DISPLACEMENTS[self.index as usize], self.size);
            self.index += 1;

            if next_item.is_some() {
                return next_item;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn corner_has_three_neighbors() {
        let neighbors: Vec<_> = NeighborIter::new((0, 0), 3).collect();

        assert_eq!(neighbors, [(0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn center_has_eight_neighbors() {
        assert_eq!(NeighborIter::new((1, 1), 3).count(), 8);
    }

    #[test]
    fn edge_of_max_board_stays_in_bounds() {
        let neighbors: Vec<_> = NeighborIter::new((Coord::MAX - 1, 0), Coord::MAX).collect();

        assert_eq!(neighbors.len(), 3);
        assert!(neighbors.iter().all(|&c| in_bounds(c, Coord::MAX)));
    }

    #[test]
    fn single_cell_board_has_no_neighbors() {
        assert_eq!(NeighborIter::new((0, 0), 1).count(), 0);
    }

    #[test]
    fn area_fits_largest_board() {
        assert_eq!(area(Coord::MAX), 65025);
    }
}
