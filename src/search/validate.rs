use crate::maze::{MazeGrid, Position};

/// Check that `path` is a legal route through `maze` from start to goal,
/// using full knowledge of the maze.
pub fn validate_path(path: &[Position], maze: &MazeGrid) -> Result<(), String> {
    let (Some(first), Some(last)) = (path.first(), path.last()) else {
        return Err("Path is empty".to_string());
    };
    if *first != maze.start() {
        return Err(format!(
            "Path starts at {} instead of the start {}",
            first,
            maze.start()
        ));
    }
    if *last != maze.goal() {
        return Err(format!(
            "Path ends at {} instead of the goal {}",
            last,
            maze.goal()
        ));
    }

    for position in path {
        if !maze.is_free(*position) {
            return Err(format!("Path visits blocked cell {}", position));
        }
    }
    for pair in path.windows(2) {
        if !pair[0].is_adjacent(&pair[1]) {
            return Err(format!(
                "Path jumps from {} to {}, which are not adjacent",
                pair[0], pair[1]
            ));
        }
    }

    Ok(())
}
