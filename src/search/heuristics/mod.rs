mod heuristic;
mod manhattan;
mod obstacle_aware;
mod zero_heuristic;

pub use heuristic::{Heuristic, HeuristicName, HeuristicValue};
pub use manhattan::ManhattanHeuristic;
pub use obstacle_aware::ObstacleAwareHeuristic;
pub use zero_heuristic::ZeroHeuristic;
