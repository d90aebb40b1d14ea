use crate::maze::Position;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MazeError {
    /// A query addressed a cell outside the grid. Successor generation never
    /// produces such positions, so this indicates a bug in the caller.
    #[error("position {position} is outside the {size}x{size} maze")]
    OutOfBounds { position: Position, size: usize },
    #[error(
        "no solvable {size}x{size} maze with obstacle density {density} \
        found after {attempts} attempts"
    )]
    Unsolvable {
        size: usize,
        density: f64,
        attempts: usize,
    },
    #[error("invalid maze parameters: {0}")]
    InvalidParameters(String),
    #[error("invalid maze layout: {0}")]
    InvalidLayout(String),
}
