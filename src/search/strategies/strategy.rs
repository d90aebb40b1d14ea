use crate::search::{
    strategies::{AStar, BestFirst, GreedyBestFirst, UniformCost},
    Heuristic, HeuristicName, HeuristicValue, Priority,
};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use strum_macros::{Display, EnumIter};
use tracing::warn;

/// What to do when a successor leads to a position that already has a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// Keep the first node seen for a position and ignore later paths to it.
    KeepFirst,
    /// Replace the node's path whenever a cheaper one is found, reopening it
    /// if it was already expanded.
    KeepCheapest,
}

/// A strategy configures the generic best-first engine: how frontier entries
/// are ranked, which heuristic (if any) feeds the ranking, and how duplicate
/// paths are treated.
pub trait SearchStrategy: Debug {
    fn name(&self) -> &str;

    /// Rank a node from its path cost `g` and heuristic estimate `h`.
    fn priority(&self, g: HeuristicValue, h: HeuristicValue) -> Priority;

    /// The heuristic used to compute `h`. Strategies without one see `h = 0`.
    fn heuristic(&self) -> Option<&dyn Heuristic>;

    fn duplicate_policy(&self) -> DuplicatePolicy {
        DuplicatePolicy::KeepCheapest
    }
}

#[derive(
    clap::ValueEnum,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[clap(rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum StrategyName {
    #[clap(help = "Uniform cost search, ranks by path cost only.")]
    UniformCost,
    #[clap(help = "Greedy best-first search, ranks by heuristic only.")]
    Greedy,
    #[clap(help = "A* search, ranks by path cost plus heuristic.")]
    Astar,
    #[clap(help = "Generic best-first search, A* ranking unless configured otherwise.")]
    BestFirst,
}

impl StrategyName {
    pub fn create(&self, heuristic_name: HeuristicName) -> Box<dyn SearchStrategy> {
        match self {
            StrategyName::UniformCost => Box::new(UniformCost::new()),
            StrategyName::Greedy => Box::new(GreedyBestFirst::new(heuristic_name.create())),
            StrategyName::Astar => {
                let heuristic = heuristic_name.create();
                if !heuristic.is_admissible() {
                    warn!(
                        ?heuristic_name,
                        "A* with an inadmissible heuristic may return suboptimal paths"
                    );
                }
                Box::new(AStar::new(heuristic))
            }
            StrategyName::BestFirst => {
                Box::new(BestFirst::new().with_heuristic(heuristic_name.create()))
            }
        }
    }
}
