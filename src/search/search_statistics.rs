use crate::search::HeuristicValue;
use ordered_float::Float;
use std::time::{Duration, Instant};
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct SearchStatistics {
    /// Number of nodes expanded
    expanded_nodes: usize,
    /// Number of heuristic evaluations
    evaluated_nodes: usize,
    /// Number of unique nodes generated, the root included
    generated_nodes: usize,
    /// Number of closed nodes reopened through a cheaper path
    reopened_nodes: usize,
    /// Number of transitions generated
    generated_transitions: usize,
    /// Largest frontier size seen
    max_frontier_size: usize,
    /// Best heuristic value of an expanded node
    best_heuristic_value: HeuristicValue,
    /// Time when the search started
    search_start_time: Instant,
    /// Time when the last log was printed, used for periodic logging
    last_log_time: Instant,
    /// Set once the search is finalised
    search_duration: Option<Duration>,
}

impl Default for SearchStatistics {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchStatistics {
    pub fn new() -> Self {
        debug!("starting search");
        Self {
            expanded_nodes: 0,
            evaluated_nodes: 0,
            generated_nodes: 0,
            reopened_nodes: 0,
            generated_transitions: 0,
            max_frontier_size: 0,
            best_heuristic_value: HeuristicValue::infinity(),
            search_start_time: Instant::now(),
            last_log_time: Instant::now(),
            search_duration: None,
        }
    }

    pub fn register_heuristic_value(&mut self, heuristic_value: HeuristicValue) {
        if heuristic_value < self.best_heuristic_value {
            self.best_heuristic_value = heuristic_value;
            debug!(best_heuristic_value = self.best_heuristic_value.into_inner());
        }
    }

    pub fn register_frontier_size(&mut self, frontier_size: usize) {
        self.max_frontier_size = self.max_frontier_size.max(frontier_size);
    }

    pub fn increment_expanded_nodes(&mut self) {
        self.expanded_nodes += 1;
        self.log_if_needed();
    }

    pub fn increment_evaluated_nodes(&mut self) {
        self.evaluated_nodes += 1;
    }

    pub fn increment_generated_nodes(&mut self, num_nodes: usize) {
        self.generated_nodes += num_nodes;
    }

    pub fn increment_reopened_nodes(&mut self) {
        self.reopened_nodes += 1;
    }

    pub fn increment_generated_transitions(&mut self, num_transitions: usize) {
        self.generated_transitions += num_transitions;
    }

    pub fn expanded_nodes(&self) -> usize {
        self.expanded_nodes
    }

    pub fn evaluated_nodes(&self) -> usize {
        self.evaluated_nodes
    }

    pub fn generated_nodes(&self) -> usize {
        self.generated_nodes
    }

    pub fn reopened_nodes(&self) -> usize {
        self.reopened_nodes
    }

    pub fn generated_transitions(&self) -> usize {
        self.generated_transitions
    }

    pub fn max_frontier_size(&self) -> usize {
        self.max_frontier_size
    }

    /// Wall-clock time of the search; the time elapsed so far if the search
    /// has not been finalised yet.
    pub fn search_duration(&self) -> Duration {
        self.search_duration
            .unwrap_or_else(|| self.search_start_time.elapsed())
    }

    fn log_if_needed(&mut self) {
        if self.last_log_time.elapsed().as_secs() > 10 {
            self.last_log_time = Instant::now();
            self.log();
        }
    }

    fn log(&self) {
        info!(
            expanded_nodes = self.expanded_nodes,
            evaluated_nodes = self.evaluated_nodes,
            generated_nodes = self.generated_nodes,
            reopened_nodes = self.reopened_nodes,
            generated_transitions = self.generated_transitions,
            max_frontier_size = self.max_frontier_size,
            best_heuristic_value = self.best_heuristic_value.into_inner(),
        );
    }

    pub fn finalise_search(&mut self) {
        let duration = self.search_start_time.elapsed();
        self.search_duration = Some(duration);
        debug!("finalising search");
        self.log();
        info!(search_duration = duration.as_secs_f64());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_accumulate() {
        let mut statistics = SearchStatistics::new();
        statistics.increment_expanded_nodes();
        statistics.increment_expanded_nodes();
        statistics.increment_generated_nodes(3);
        statistics.increment_generated_nodes(2);
        statistics.increment_reopened_nodes();
        statistics.increment_evaluated_nodes();
        statistics.increment_generated_transitions(4);

        assert_eq!(statistics.expanded_nodes(), 2);
        assert_eq!(statistics.generated_nodes(), 5);
        assert_eq!(statistics.reopened_nodes(), 1);
        assert_eq!(statistics.evaluated_nodes(), 1);
        assert_eq!(statistics.generated_transitions(), 4);
    }

    #[test]
    fn max_frontier_size_keeps_maximum() {
        let mut statistics = SearchStatistics::new();
        for size in [1, 4, 2, 3] {
            statistics.register_frontier_size(size);
        }
        assert_eq!(statistics.max_frontier_size(), 4);
    }

    #[test]
    fn duration_is_frozen_after_finalise() {
        let mut statistics = SearchStatistics::new();
        statistics.finalise_search();
        let first = statistics.search_duration();
        std::thread::sleep(Duration::from_millis(5));
        assert_eq!(statistics.search_duration(), first);
    }
}
