mod astar;
mod best_first;
mod greedy;
mod strategy;
mod uniform_cost;

pub use astar::AStar;
pub use best_first::{BestFirst, Evaluation};
pub use greedy::GreedyBestFirst;
pub use strategy::{DuplicatePolicy, SearchStrategy, StrategyName};
pub use uniform_cost::UniformCost;
