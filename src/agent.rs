//! The [`Agent`] drives a single search through a maze and condenses the
//! outcome into an [`AgentReport`].

use crate::maze::{MazeGrid, Position};
use crate::search::{
    AbortReason, BestFirstEngine, HeuristicName, SearchEngine, SearchLimits, SearchProblem,
    SearchResult, SearchStatistics, SearchStrategy, StrategyName,
};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Outcome of one agent run, in a form the runner can print or serialise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentReport {
    pub strategy: String,
    pub success: bool,
    /// Set if a resource cap stopped the search
    pub aborted: Option<AbortReason>,
    /// Start to goal, empty unless the search succeeded
    pub path: Vec<Position>,
    pub cost: f64,
    pub nodes_expanded: usize,
    pub nodes_generated: usize,
    pub nodes_reopened: usize,
    pub max_frontier: usize,
    pub duration_secs: f64,
}

impl AgentReport {
    pub fn new(strategy: &str, result: SearchResult, statistics: &SearchStatistics) -> Self {
        let (success, aborted, path, cost) = match result {
            SearchResult::Success(state) => {
                let cost = state.cost().into_inner();
                (true, None, state.into_path(), cost)
            }
            SearchResult::Failed => (false, None, vec![], 0.),
            SearchResult::Aborted(reason) => (false, Some(reason), vec![], 0.),
        };
        Self {
            strategy: strategy.to_string(),
            success,
            aborted,
            path,
            cost,
            nodes_expanded: statistics.expanded_nodes(),
            nodes_generated: statistics.generated_nodes(),
            nodes_reopened: statistics.reopened_nodes(),
            max_frontier: statistics.max_frontier_size(),
            duration_secs: statistics.search_duration().as_secs_f64(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Agent {
    limits: SearchLimits,
}

impl Agent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(mut self, limits: SearchLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Search for the goal of `problem` with `strategy`. The agent learns
    /// about the maze only through the problem's successor and sensor
    /// queries, one cell at a time.
    pub fn run(&self, strategy: &dyn SearchStrategy, problem: &SearchProblem) -> AgentReport {
        let mut engine = BestFirstEngine::new(strategy).with_limits(self.limits);
        let (result, statistics) = engine.search(problem);
        let report = AgentReport::new(strategy.name(), result, &statistics);
        info!(
            strategy = report.strategy.as_str(),
            success = report.success,
            cost = report.cost,
            nodes_expanded = report.nodes_expanded,
        );
        report
    }
}

/// Run `strategy_name` with the Manhattan heuristic and no resource caps.
pub fn run_search(maze: &MazeGrid, strategy_name: StrategyName) -> AgentReport {
    let strategy = strategy_name.create(HeuristicName::Manhattan);
    Agent::new().run(strategy.as_ref(), &SearchProblem::new(maze))
}
