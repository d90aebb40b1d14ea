//! The [`MazeGrid`] holds the obstacle layout of a single square maze. The
//! agent always starts in the top-left corner and must reach the bottom-right
//! corner; generation guarantees a route between the two exists.

use crate::maze::{Direction, MazeError, Perception, Position};
use itertools::Itertools;
use rand::{rngs::StdRng, seq::index, SeedableRng};
use std::{collections::VecDeque, fmt::Display};
use strum::IntoEnumIterator;
use tracing::{debug, trace};

/// How many random layouts [`MazeGrid::generate`] tries before giving up.
pub const DEFAULT_MAX_ATTEMPTS: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeGrid {
    size: usize,
    /// Row-major obstacle flags.
    obstacles: Vec<bool>,
}

impl MazeGrid {
    /// Generate a random solvable maze. See
    /// [`MazeGrid::generate_with_attempts`].
    pub fn generate(size: usize, obstacle_density: f64, seed: u64) -> Result<Self, MazeError> {
        Self::generate_with_attempts(size, obstacle_density, seed, DEFAULT_MAX_ATTEMPTS)
    }

    /// Generate a random maze with `floor(size * size * obstacle_density)`
    /// obstacles, none of them on the start or goal cell. Layouts without a
    /// route from start to goal are rejected and redrawn from the same seeded
    /// generator, at most `max_attempts` times.
    pub fn generate_with_attempts(
        size: usize,
        obstacle_density: f64,
        seed: u64,
        max_attempts: usize,
    ) -> Result<Self, MazeError> {
        let num_cells = Self::cell_count(size)?;
        if !(0.0..1.0).contains(&obstacle_density) {
            return Err(MazeError::InvalidParameters(format!(
                "obstacle density must be in [0, 1), got {}",
                obstacle_density
            )));
        }
        if max_attempts == 0 {
            return Err(MazeError::InvalidParameters(
                "at least one generation attempt is required".to_string(),
            ));
        }

        let num_obstacles =
            ((num_cells as f64 * obstacle_density).floor() as usize).min(num_cells - 2);
        let mut rng = StdRng::seed_from_u64(seed);

        for attempt in 1..=max_attempts {
            let maze = Self::random_layout(size, num_cells, num_obstacles, &mut rng);
            if maze.is_solvable() {
                debug!(size, num_obstacles, seed, attempt, "generated maze");
                return Ok(maze);
            }
            trace!(attempt, "rejected unsolvable layout");
        }

        Err(MazeError::Unsolvable {
            size,
            density: obstacle_density,
            attempts: max_attempts,
        })
    }

    /// Number of cells of a `size` x `size` maze, rejecting sizes below 2
    /// and sizes whose cell count does not fit in a `usize`.
    fn cell_count(size: usize) -> Result<usize, MazeError> {
        if size < 2 {
            return Err(MazeError::InvalidParameters(format!(
                "maze size must be at least 2, got {}",
                size
            )));
        }
        size.checked_mul(size).ok_or_else(|| {
            MazeError::InvalidParameters(format!("maze size {} is too large", size))
        })
    }

    fn random_layout(
        size: usize,
        num_cells: usize,
        num_obstacles: usize,
        rng: &mut StdRng,
    ) -> Self {
        // Candidate cells are 1..num_cells-1, which skips the start (index 0)
        // and the goal (the last index).
        let mut obstacles = vec![false; num_cells];
        for candidate in index::sample(rng, num_cells - 2, num_obstacles) {
            obstacles[candidate + 1] = true;
        }
        Self { size, obstacles }
    }

    /// Build a maze with obstacles at exactly the given positions. The result
    /// need not be solvable.
    pub fn with_obstacles<I>(size: usize, obstacles: I) -> Result<Self, MazeError>
    where
        I: IntoIterator<Item = Position>,
    {
        let num_cells = Self::cell_count(size)?;
        let mut maze = Self {
            size,
            obstacles: vec![false; num_cells],
        };
        for position in obstacles {
            let index = maze.index(position)?;
            maze.obstacles[index] = true;
        }
        if maze.obstacles[0] || maze.obstacles[num_cells - 1] {
            return Err(MazeError::InvalidLayout(
                "start and goal cells must be free".to_string(),
            ));
        }
        Ok(maze)
    }

    /// Build a maze from text rows, `#` marking an obstacle and any of `.`,
    /// `S` or `G` marking a free cell. Leading and trailing whitespace on each
    /// row is ignored, as are blank rows.
    pub fn from_rows(rows: &[&str]) -> Result<Self, MazeError> {
        let rows: Vec<&str> = rows
            .iter()
            .map(|row| row.trim())
            .filter(|row| !row.is_empty())
            .collect();
        let size = rows.len();

        let mut obstacles = vec![];
        for (r, row) in rows.iter().enumerate() {
            let width = row.chars().count();
            if width != size {
                return Err(MazeError::InvalidLayout(format!(
                    "row {} has {} cells but the maze has {} rows",
                    r, width, size
                )));
            }
            for (c, cell) in row.chars().enumerate() {
                match cell {
                    '#' => obstacles.push(Position::new(r, c)),
                    '.' | 'S' | 'G' => {}
                    other => {
                        return Err(MazeError::InvalidLayout(format!(
                            "unexpected character '{}' at {}",
                            other,
                            Position::new(r, c)
                        )))
                    }
                }
            }
        }

        Self::with_obstacles(size, obstacles)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn start(&self) -> Position {
        Position::new(0, 0)
    }

    pub fn goal(&self) -> Position {
        Position::new(self.size - 1, self.size - 1)
    }

    pub fn contains(&self, position: Position) -> bool {
        position.row < self.size && position.col < self.size
    }

    fn index(&self, position: Position) -> Result<usize, MazeError> {
        if self.contains(position) {
            Ok(position.row * self.size + position.col)
        } else {
            Err(MazeError::OutOfBounds {
                position,
                size: self.size,
            })
        }
    }

    pub fn is_obstacle(&self, position: Position) -> Result<bool, MazeError> {
        Ok(self.obstacles[self.index(position)?])
    }

    /// True if the position is inside the grid and not an obstacle.
    pub fn is_free(&self, position: Position) -> bool {
        matches!(self.is_obstacle(position), Ok(false))
    }

    pub fn obstacle_count(&self) -> usize {
        self.obstacles.iter().filter(|&&obstacle| obstacle).count()
    }

    /// The sensor reading at `position`. Each direction counts the free cells
    /// passed before hitting an obstacle or the boundary, so a cell against
    /// the edge reads 0 towards it.
    pub fn sense(&self, position: Position) -> Result<Perception, MazeError> {
        self.index(position)?;

        let mut perception = Perception::default();
        for direction in Direction::iter() {
            let mut distance = 0;
            let mut current = position;
            while let Some(next) = current.step(direction, self.size) {
                if !self.is_free(next) {
                    break;
                }
                distance += 1;
                current = next;
            }
            perception.set(direction, distance);
        }
        Ok(perception)
    }

    /// Full-knowledge flood fill from `from`. Returns row-major reachability
    /// flags. Only used to validate layouts, never by the agent.
    fn flood_fill(&self, from: Position) -> Vec<bool> {
        let mut reached = vec![false; self.size * self.size];
        if !self.is_free(from) {
            return reached;
        }

        let mut queue = VecDeque::from([from]);
        reached[from.row * self.size + from.col] = true;
        while let Some(current) = queue.pop_front() {
            for direction in Direction::iter() {
                if let Some(next) = current.step(direction, self.size) {
                    let index = next.row * self.size + next.col;
                    if !reached[index] && !self.obstacles[index] {
                        reached[index] = true;
                        queue.push_back(next);
                    }
                }
            }
        }
        reached
    }

    /// Number of free cells reachable from `from`, including `from` itself.
    pub fn reachable_from(&self, from: Position) -> usize {
        self.flood_fill(from).into_iter().filter(|&r| r).count()
    }

    pub fn is_solvable(&self) -> bool {
        let goal = self.goal();
        self.flood_fill(self.start())[goal.row * self.size + goal.col]
    }

    fn cell_char(&self, position: Position) -> char {
        if position == self.start() {
            'S'
        } else if position == self.goal() {
            'G'
        } else if self.obstacles[position.row * self.size + position.col] {
            '#'
        } else {
            '.'
        }
    }

    /// Render the maze with `*` on every path cell other than start and goal.
    pub fn render_with_path(&self, path: &[Position]) -> String {
        (0..self.size)
            .map(|row| {
                (0..self.size)
                    .map(|col| {
                        let position = Position::new(row, col);
                        let cell = self.cell_char(position);
                        if cell == '.' && path.contains(&position) {
                            '*'
                        } else {
                            cell
                        }
                    })
                    .join("")
            })
            .join("\n")
    }
}

impl Display for MazeGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render_with_path(&[]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn generated_mazes_are_solvable() {
        for seed in 0..50 {
            let maze = MazeGrid::generate(12, 0.35, seed).unwrap();
            assert!(maze.is_solvable(), "seed {} produced an unsolvable maze", seed);
            assert!(maze.is_free(maze.start()));
            assert!(maze.is_free(maze.goal()));
        }
    }

    #[test]
    fn generation_places_requested_obstacle_count() {
        let maze = MazeGrid::generate(10, 0.25, 7).unwrap();
        assert_eq!(maze.obstacle_count(), 25);

        let empty = MazeGrid::generate(4, 0.0, 7).unwrap();
        assert_eq!(empty.obstacle_count(), 0);
    }

    #[test]
    fn generation_is_deterministic_per_seed() {
        let a = MazeGrid::generate(15, 0.3, 42).unwrap();
        let b = MazeGrid::generate(15, 0.3, 42).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn generation_fails_explicitly_when_no_layout_is_solvable() {
        // A 2x2 maze with two obstacles always walls off the goal.
        let result = MazeGrid::generate_with_attempts(2, 0.5, 3, 10);
        assert_eq!(
            result,
            Err(MazeError::Unsolvable {
                size: 2,
                density: 0.5,
                attempts: 10
            })
        );
    }

    #[test]
    fn generation_rejects_invalid_parameters() {
        assert!(matches!(
            MazeGrid::generate(1, 0.1, 0),
            Err(MazeError::InvalidParameters(_))
        ));
        assert!(matches!(
            MazeGrid::generate(5, 1.0, 0),
            Err(MazeError::InvalidParameters(_))
        ));
        assert!(matches!(
            MazeGrid::generate(5, -0.1, 0),
            Err(MazeError::InvalidParameters(_))
        ));
        assert!(matches!(
            MazeGrid::generate_with_attempts(5, 0.1, 0, 0),
            Err(MazeError::InvalidParameters(_))
        ));
    }

    #[test]
    fn oversized_mazes_are_rejected() {
        let size = 1usize << (usize::BITS / 2);
        assert!(matches!(
            MazeGrid::generate(size, 0.1, 0),
            Err(MazeError::InvalidParameters(_))
        ));
        assert!(matches!(
            MazeGrid::generate(usize::MAX, 0.1, 0),
            Err(MazeError::InvalidParameters(_))
        ));
        assert!(matches!(
            MazeGrid::with_obstacles(usize::MAX, []),
            Err(MazeError::InvalidParameters(_))
        ));
    }

    #[test]
    fn obstacle_queries() {
        let maze = MazeGrid::from_rows(CORRIDOR_4X4).unwrap();
        assert_eq!(maze.is_obstacle(Position::new(1, 0)), Ok(true));
        assert_eq!(maze.is_obstacle(Position::new(0, 3)), Ok(false));
        assert_eq!(
            maze.is_obstacle(Position::new(4, 0)),
            Err(MazeError::OutOfBounds {
                position: Position::new(4, 0),
                size: 4
            })
        );
        assert!(!maze.is_free(Position::new(1, 0)));
        assert!(!maze.is_free(Position::new(0, 4)));
        assert!(maze.is_free(Position::new(0, 1)));
    }

    #[test]
    fn sense_treats_boundary_as_obstacle() {
        let maze = MazeGrid::from_rows(OPEN_3X3).unwrap();
        let corner = maze.sense(Position::new(0, 0)).unwrap();
        assert_eq!(corner.up, 0);
        assert_eq!(corner.left, 0);
        assert_eq!(corner.down, 2);
        assert_eq!(corner.right, 2);

        let far_corner = maze.sense(Position::new(2, 2)).unwrap();
        assert_eq!(far_corner.as_array(), [2, 0, 2, 0]);
    }

    #[test]
    fn sense_stops_at_obstacles() {
        let maze = MazeGrid::from_rows(&[
            "S..#.", //
            ".....", //
            "#....", //
            ".....", //
            "..#.G",
        ])
        .unwrap();
        let reading = maze.sense(Position::new(1, 2)).unwrap();
        assert_eq!(reading.up, 1);
        assert_eq!(reading.down, 2);
        assert_eq!(reading.left, 2);
        assert_eq!(reading.right, 2);

        let reading = maze.sense(Position::new(0, 2)).unwrap();
        assert_eq!(reading.right, 0);
        assert_eq!(reading.left, 2);

        assert!(matches!(
            maze.sense(Position::new(5, 5)),
            Err(MazeError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn from_rows_validates_layout() {
        assert!(matches!(
            MazeGrid::from_rows(&["..", "..."]),
            Err(MazeError::InvalidLayout(_))
        ));
        assert!(matches!(
            MazeGrid::from_rows(&["#.", ".."]),
            Err(MazeError::InvalidLayout(_))
        ));
        assert!(matches!(
            MazeGrid::from_rows(&["S.", ".x"]),
            Err(MazeError::InvalidLayout(_))
        ));
        assert!(matches!(
            MazeGrid::from_rows(&["S"]),
            Err(MazeError::InvalidParameters(_))
        ));
    }

    #[test]
    fn fixture_distances() {
        let distance = |rows| shortest_distance(&MazeGrid::from_rows(rows).unwrap());
        assert_eq!(distance(OPEN_3X3), Some(4));
        assert_eq!(distance(CORRIDOR_4X4), Some(6));
        assert_eq!(distance(WALLED_GOAL_5X5), None);
    }

    #[test]
    fn reachability() {
        let walled = MazeGrid::from_rows(WALLED_GOAL_5X5).unwrap();
        assert!(!walled.is_solvable());
        assert_eq!(walled.reachable_from(walled.start()), 21);

        let open = MazeGrid::from_rows(OPEN_3X3).unwrap();
        assert!(open.is_solvable());
        assert_eq!(open.reachable_from(open.start()), 9);
    }

    #[test]
    fn rendering() {
        let maze = MazeGrid::from_rows(CORRIDOR_4X4).unwrap();
        assert_eq!(maze.to_string(), "S...\n###.\n....\n.##G");
        let path = [
            Position::new(0, 0),
            Position::new(0, 1),
            Position::new(0, 2),
            Position::new(0, 3),
        ];
        assert_eq!(
            maze.render_with_path(&path),
            "S***\n###.\n....\n.##G"
        );
    }
}
