use crate::maze::Direction;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// What the agent senses from a single cell: the number of free cells between
/// it and the nearest obstacle (or the maze boundary) in each direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Perception {
    pub up: usize,
    pub down: usize,
    pub left: usize,
    pub right: usize,
}

impl Perception {
    pub(crate) fn set(&mut self, direction: Direction, distance: usize) {
        match direction {
            Direction::Up => self.up = distance,
            Direction::Down => self.down = distance,
            Direction::Left => self.left = distance,
            Direction::Right => self.right = distance,
        }
    }

    /// Distances in up, down, left, right order.
    pub fn as_array(&self) -> [usize; 4] {
        [self.up, self.down, self.left, self.right]
    }
}

impl Display for Perception {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "up={} down={} left={} right={}",
            self.up, self.down, self.left, self.right
        )
    }
}
