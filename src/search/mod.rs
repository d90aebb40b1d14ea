mod frontier;
pub mod heuristics;
mod search_engine;
mod search_error;
mod search_node;
mod search_problem;
mod search_result;
mod search_space;
mod search_statistics;
mod state;
pub mod strategies;
mod termination_condition;
mod validate;

pub use frontier::{Frontier, Priority};
pub use heuristics::{
    Heuristic, HeuristicName, HeuristicValue, ManhattanHeuristic, ObstacleAwareHeuristic,
    ZeroHeuristic,
};
pub use search_engine::{BestFirstEngine, SearchEngine};
pub use search_error::SearchError;
pub use search_node::{NodeId, SearchNode, SearchNodeStatus, NO_NODE};
pub use search_problem::{SearchProblem, STEP_COST};
pub use search_result::{AbortReason, SearchResult};
pub use search_space::SearchSpace;
pub use search_statistics::SearchStatistics;
pub use state::State;
pub use strategies::{
    AStar, BestFirst, DuplicatePolicy, Evaluation, GreedyBestFirst, SearchStrategy, StrategyName,
    UniformCost,
};
pub use termination_condition::{SearchLimits, TerminationCondition};
pub use validate::validate_path;
