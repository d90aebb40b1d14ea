//! Grid coordinates and the four movement directions.

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use strum_macros::EnumIter;

/// A cell in the maze, addressed by row and column. Row 0 is the top row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn manhattan_distance(&self, other: &Position) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// Two positions are adjacent if they share an edge.
    pub fn is_adjacent(&self, other: &Position) -> bool {
        self.manhattan_distance(other) == 1
    }

    /// The neighbouring position in the given direction, or `None` if that
    /// would leave a `size`×`size` grid.
    pub fn step(&self, direction: Direction, size: usize) -> Option<Position> {
        let (row, col) = match direction {
            Direction::Up => (self.row.checked_sub(1)?, self.col),
            Direction::Down => (self.row + 1, self.col),
            Direction::Left => (self.row, self.col.checked_sub(1)?),
            Direction::Right => (self.row, self.col + 1),
        };
        if row < size && col < size {
            Some(Position::new(row, col))
        } else {
            None
        }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

/// Movement directions. The declaration order is the successor enumeration
/// order, and hence the tie-break among equally ranked frontier entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn directions_enumerate_in_fixed_order() {
        let directions: Vec<Direction> = Direction::iter().collect();
        assert_eq!(
            directions,
            vec![
                Direction::Up,
                Direction::Down,
                Direction::Left,
                Direction::Right
            ]
        );
    }

    #[test]
    fn step_stays_inside_grid() {
        let corner = Position::new(0, 0);
        assert_eq!(corner.step(Direction::Up, 3), None);
        assert_eq!(corner.step(Direction::Left, 3), None);
        assert_eq!(corner.step(Direction::Down, 3), Some(Position::new(1, 0)));
        assert_eq!(corner.step(Direction::Right, 3), Some(Position::new(0, 1)));

        let far_corner = Position::new(2, 2);
        assert_eq!(far_corner.step(Direction::Down, 3), None);
        assert_eq!(far_corner.step(Direction::Right, 3), None);
    }

    #[test]
    fn manhattan_distance_and_adjacency() {
        let a = Position::new(1, 4);
        let b = Position::new(3, 1);
        assert_eq!(a.manhattan_distance(&b), 5);
        assert_eq!(b.manhattan_distance(&a), 5);
        assert!(a.is_adjacent(&Position::new(1, 3)));
        assert!(!a.is_adjacent(&Position::new(2, 3)));
        assert!(!a.is_adjacent(&a));
    }
}
