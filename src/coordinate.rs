use std::fmt;

/// A cell position in a two-dimensional grid.
///
/// Coordinates compare and hash by `(row, col)`, and order row-major, so
/// they can key maps and canonicalize undirected edges.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coordinate {
    row: usize,
    col: usize,
}

impl Coordinate {
    /// Creates the coordinate of the cell at `row`, `col`.
    pub const fn new(row: usize, col: usize) -> Self {
        Coordinate { row, col }
    }

    /// The row of the cell.
    pub const fn row(self) -> usize {
        self.row
    }

    /// The column of the cell.
    pub const fn col(self) -> usize {
        self.col
    }

    /// The Manhattan distance between two cells.
    ///
    /// Saturates at `usize::MAX` for cells at opposite ends of the
    /// coordinate space.
    pub fn distance(self, other: Coordinate) -> usize {
        abs_diff(self.row, other.row).saturating_add(abs_diff(self.col, other.col))
    }

    /// Are the two cells orthogonal neighbours?
    ///
    /// A cell is never adjacent to itself, nor to a diagonal cell.
    pub fn is_adjacent(self, other: Coordinate) -> bool {
        match (abs_diff(self.row, other.row), abs_diff(self.col, other.col)) {
            (0, 1) | (1, 0) => true,
            _ => false,
        }
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((row, col): (usize, usize)) -> Self {
        Coordinate::new(row, col)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "({}, {})", self.row, self.col)
    }
}

fn abs_diff(a: usize, b: usize) -> usize {
    if a > b { a - b } else { b - a }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors() {
        let c = Coordinate::new(3, 7);
        assert_eq!(3, c.row());
        assert_eq!(7, c.col());
        assert_eq!(c, Coordinate::from((3, 7)));
    }

    #[test]
    fn orthogonal_neighbours_are_adjacent() {
        let c = Coordinate::new(2, 2);
        assert!(c.is_adjacent(Coordinate::new(1, 2)));
        assert!(c.is_adjacent(Coordinate::new(3, 2)));
        assert!(c.is_adjacent(Coordinate::new(2, 1)));
        assert!(c.is_adjacent(Coordinate::new(2, 3)));
    }

    #[test]
    fn others_are_not_adjacent() {
        let c = Coordinate::new(2, 2);
        assert!(!c.is_adjacent(c));
        assert!(!c.is_adjacent(Coordinate::new(1, 1)));
        assert!(!c.is_adjacent(Coordinate::new(3, 3)));
        assert!(!c.is_adjacent(Coordinate::new(2, 4)));
        assert!(!c.is_adjacent(Coordinate::new(0, 2)));
    }

    #[test]
    fn adjacency_at_origin() {
        let origin = Coordinate::new(0, 0);
        assert!(origin.is_adjacent(Coordinate::new(0, 1)));
        assert!(Coordinate::new(1, 0).is_adjacent(origin));
    }

    #[test]
    fn far_apart_cells_are_not_adjacent() {
        let corner = Coordinate::new(usize::MAX, 0);
        assert!(!corner.is_adjacent(Coordinate::new(0, 2)));
        assert!(!Coordinate::new(0, 2).is_adjacent(corner));
        assert!(!corner.is_adjacent(Coordinate::new(0, usize::MAX)));
        assert!(corner.is_adjacent(Coordinate::new(usize::MAX, 1)));
        assert!(corner.is_adjacent(Coordinate::new(usize::MAX - 1, 0)));
    }

    #[test]
    fn distance_saturates() {
        let a = Coordinate::new(usize::MAX, 0);
        let b = Coordinate::new(0, 2);
        assert_eq!(usize::MAX, a.distance(b));
        assert_eq!(3, Coordinate::new(1, 1).distance(Coordinate::new(0, 3)));
    }

    #[test]
    fn ordering_is_row_major() {
        assert!(Coordinate::new(0, 5) < Coordinate::new(1, 0));
        assert!(Coordinate::new(1, 0) < Coordinate::new(1, 1));
    }

    #[test]
    fn display() {
        assert_eq!("(4, 9)", Coordinate::new(4, 9).to_string());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trip() {
        extern crate serde_json;

        let c = Coordinate::new(1, 2);
        let json = serde_json::to_string(&c).unwrap();
        let back: Coordinate = serde_json::from_str(&json).unwrap();
        assert_eq!(c, back);
    }
}
