//! Generalised best-first search. Uniform cost, greedy, A* and generic
//! best-first search all run through [`BestFirstEngine`]; they differ only in
//! the [`SearchStrategy`] handed to it.

use crate::maze::Position;
use crate::search::{
    DuplicatePolicy, Frontier, HeuristicValue, SearchError, SearchLimits, SearchNodeStatus,
    SearchProblem, SearchResult, SearchSpace, SearchStatistics, SearchStrategy,
    TerminationCondition,
};
use tracing::{info, trace};

pub trait SearchEngine {
    fn search(&mut self, problem: &SearchProblem) -> (SearchResult, SearchStatistics);
}

#[derive(Debug)]
pub struct BestFirstEngine<'s> {
    strategy: &'s dyn SearchStrategy,
    limits: SearchLimits,
}

impl<'s> BestFirstEngine<'s> {
    pub fn new(strategy: &'s dyn SearchStrategy) -> Self {
        Self {
            strategy,
            limits: SearchLimits::unlimited(),
        }
    }

    pub fn with_limits(mut self, limits: SearchLimits) -> Self {
        self.limits = limits;
        self
    }

    fn evaluate(
        &self,
        position: Position,
        problem: &SearchProblem,
        statistics: &mut SearchStatistics,
    ) -> HeuristicValue {
        match self.strategy.heuristic() {
            Some(heuristic) => {
                statistics.increment_evaluated_nodes();
                heuristic.evaluate(position, problem)
            }
            None => (0.).into(),
        }
    }
}

impl SearchEngine for BestFirstEngine<'_> {
    fn search(&mut self, problem: &SearchProblem) -> (SearchResult, SearchStatistics) {
        info!(strategy = self.strategy.name(), "starting search");
        let mut statistics = SearchStatistics::new();
        let termination = TerminationCondition::new(self.limits);
        let strategy = self.strategy;
        let duplicate_policy = strategy.duplicate_policy();

        let mut frontier = Frontier::new();
        let mut search_space = SearchSpace::new(problem.start());
        let root_h = self.evaluate(problem.start(), problem, &mut statistics);
        let root_node = search_space.get_root_node_mut();
        root_node.open((0.).into(), root_h);
        frontier.push(problem.start(), strategy.priority(root_node.get_g(), root_h));
        statistics.increment_generated_nodes(1);
        statistics.register_frontier_size(frontier.len());

        let result = loop {
            if let Some(reason) = termination.should_terminate(statistics.expanded_nodes()) {
                info!(%reason, "search aborted");
                break SearchResult::Aborted(reason);
            }

            let position = match frontier.pop_best() {
                Ok((position, _)) => position,
                Err(SearchError::EmptyFrontier) => {
                    info!("frontier exhausted without reaching the goal");
                    break SearchResult::Failed;
                }
            };
            let node_id = search_space
                .lookup(position)
                .expect("every frontier entry has a search node");

            if problem.is_goal_position(position) {
                break SearchResult::Success(search_space.extract_state(node_id));
            }

            let node = search_space.get_node_mut(node_id);
            if node.get_status() == SearchNodeStatus::Closed {
                continue;
            }
            node.close();
            let g_value = node.get_g();
            statistics.increment_expanded_nodes();
            statistics.register_heuristic_value(node.get_h());
            trace!(%position, g = g_value.into_inner(), "expanding");

            for (direction, child_position) in problem.transitions(position) {
                statistics.increment_generated_transitions(1);
                let child_g = g_value + problem.step_cost();
                let child_node =
                    search_space.insert_or_get_node(child_position, direction, node_id);

                match child_node.get_status() {
                    SearchNodeStatus::New => {
                        let h_value = self.evaluate(child_position, problem, &mut statistics);
                        child_node.open(child_g, h_value);
                        statistics.increment_generated_nodes(1);
                        frontier.push(child_position, strategy.priority(child_g, h_value));
                    }
                    status
                        if duplicate_policy == DuplicatePolicy::KeepCheapest
                            && child_g < child_node.get_g() =>
                    {
                        if status == SearchNodeStatus::Closed {
                            statistics.increment_reopened_nodes();
                        }
                        child_node.reopen(child_g, node_id, direction);
                        frontier.push(
                            child_position,
                            strategy.priority(child_g, child_node.get_h()),
                        );
                    }
                    _ => {}
                }
            }
            statistics.register_frontier_size(frontier.len());
        };

        statistics.finalise_search();
        termination.finalise();
        (result, statistics)
    }
}
