use crate::maze::{MazeGrid, Position};
use crate::search::validate_path;
use std::collections::VecDeque;

/// A 3x3 maze without obstacles.
pub const OPEN_3X3: &[&str] = &[
    "S..", //
    "...", //
    "..G",
];

/// Single route along the top row and down the right column, with a dead end
/// branching off to the left.
pub const CORRIDOR_4X4: &[&str] = &[
    "S...", //
    "###.", //
    "....", //
    ".##G",
];

/// The goal is boxed in; 21 cells are reachable from the start.
pub const WALLED_GOAL_5X5: &[&str] = &[
    "S....", //
    ".....", //
    ".....", //
    "...##", //
    "...#G",
];

pub fn assert_valid_path(maze: &MazeGrid, path: &[Position]) {
    if let Err(e) = validate_path(path, maze) {
        panic!("invalid path {:?}: {}", path, e);
    }
}

/// Number of steps on a shortest start-to-goal route, by breadth-first search
/// over the whole grid. `None` if the goal is unreachable.
pub fn shortest_distance(maze: &MazeGrid) -> Option<usize> {
    let size = maze.size();
    let mut distances = vec![None; size * size];
    let mut queue = VecDeque::from([(0usize, 0usize)]);
    distances[0] = Some(0);
    while let Some((row, col)) = queue.pop_front() {
        let distance = distances[row * size + col]?;
        if (row, col) == (size - 1, size - 1) {
            return Some(distance);
        }
        let neighbours = [
            (row.wrapping_sub(1), col),
            (row + 1, col),
            (row, col.wrapping_sub(1)),
            (row, col + 1),
        ];
        for (r, c) in neighbours {
            if r < size && c < size && maze.is_free(Position::new(r, c)) {
                let index = r * size + c;
                if distances[index].is_none() {
                    distances[index] = Some(distance + 1);
                    queue.push_back((r, c));
                }
            }
        }
    }
    None
}
