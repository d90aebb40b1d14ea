mod maze_error;
mod maze_grid;
mod perception;
mod position;

pub use maze_error::MazeError;
pub use maze_grid::{MazeGrid, DEFAULT_MAX_ATTEMPTS};
pub use perception::Perception;
pub use position::{Direction, Position};
