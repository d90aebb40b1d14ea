use crate::maze::Position;
use crate::search::{
    heuristics::{ManhattanHeuristic, ObstacleAwareHeuristic, ZeroHeuristic},
    SearchProblem,
};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

pub type HeuristicValue = OrderedFloat<f64>;

pub trait Heuristic: Debug {
    /// Estimate the remaining cost from `position` to the goal of `problem`.
    fn evaluate(&self, position: Position, problem: &SearchProblem) -> HeuristicValue;

    /// Whether the estimate never exceeds the true remaining cost. A* only
    /// guarantees optimal paths with admissible heuristics.
    fn is_admissible(&self) -> bool;
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[clap(rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum HeuristicName {
    #[default]
    #[clap(help = "Manhattan distance to the goal.")]
    Manhattan,
    #[clap(help = "Manhattan distance plus a penalty for cells close to \
        obstacles, computed from the sensor reading. Not admissible.")]
    ObstacleAware,
    #[clap(help = "The zero heuristic.")]
    Zero,
}

impl HeuristicName {
    pub fn create(&self) -> Box<dyn Heuristic> {
        match self {
            HeuristicName::Manhattan => Box::new(ManhattanHeuristic::new()),
            HeuristicName::ObstacleAware => Box::new(ObstacleAwareHeuristic::default()),
            HeuristicName::Zero => Box::new(ZeroHeuristic::new()),
        }
    }
}
