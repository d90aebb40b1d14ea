//! The open list shared by every strategy.

use crate::search::{HeuristicValue, SearchError};
use priority_queue::PriorityQueue;
use std::{cmp::Reverse, fmt::Debug, hash::Hash};

/// Ranking key of a frontier entry. Keys compare by `primary` first and
/// `tie_break` second; lower is better.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Priority {
    pub primary: HeuristicValue,
    pub tie_break: HeuristicValue,
}

impl Priority {
    pub fn new(primary: HeuristicValue, tie_break: HeuristicValue) -> Self {
        Self { primary, tie_break }
    }

    /// A key with no secondary component.
    pub fn single(primary: HeuristicValue) -> Self {
        Self::new(primary, 0.0.into())
    }
}

/// A priority queue holding at most one entry per key. Entries with equal
/// [`Priority`] pop in insertion order, which keeps searches deterministic.
#[derive(Debug)]
pub struct Frontier<K: Hash + Eq> {
    queue: PriorityQueue<K, Reverse<(Priority, u64)>>,
    next_sequence: u64,
}

impl<K: Hash + Eq> Default for Frontier<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Hash + Eq> Frontier<K> {
    pub fn new() -> Self {
        Self {
            queue: PriorityQueue::new(),
            next_sequence: 0,
        }
    }

    /// Insert `key` with `priority`. An existing entry for the same key is
    /// replaced if its priority is not better than the new one; otherwise the
    /// push is dropped and `false` is returned.
    pub fn push(&mut self, key: K, priority: Priority) -> bool {
        if self.contains_strictly_better(&key, priority) {
            return false;
        }
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.queue.push(key, Reverse((priority, sequence)));
        true
    }

    /// Remove and return the best entry.
    pub fn pop_best(&mut self) -> Result<(K, Priority), SearchError> {
        self.queue
            .pop()
            .map(|(key, Reverse((priority, _)))| (key, priority))
            .ok_or(SearchError::EmptyFrontier)
    }

    /// True if `key` is queued with a priority at least as good as `priority`.
    pub fn contains_better_or_equal(&self, key: &K, priority: Priority) -> bool {
        matches!(self.queue.get_priority(key), Some(Reverse((existing, _))) if *existing <= priority)
    }

    fn contains_strictly_better(&self, key: &K, priority: Priority) -> bool {
        matches!(self.queue.get_priority(key), Some(Reverse((existing, _))) if *existing < priority)
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ordered_float::OrderedFloat;

    fn p(value: f64) -> Priority {
        Priority::single(OrderedFloat(value))
    }

    #[test]
    fn pops_lowest_priority_first() {
        let mut frontier = Frontier::new();
        frontier.push("c", p(3.));
        frontier.push("a", p(1.));
        frontier.push("b", p(2.));

        assert_eq!(frontier.pop_best(), Ok(("a", p(1.))));
        assert_eq!(frontier.pop_best(), Ok(("b", p(2.))));
        assert_eq!(frontier.pop_best(), Ok(("c", p(3.))));
        assert_eq!(frontier.pop_best(), Err(SearchError::EmptyFrontier));
    }

    #[test]
    fn equal_priorities_pop_in_insertion_order() {
        let mut frontier = Frontier::new();
        for key in ["first", "second", "third", "fourth"] {
            frontier.push(key, p(5.));
        }
        let order: Vec<&str> = std::iter::from_fn(|| frontier.pop_best().ok())
            .map(|(key, _)| key)
            .collect();
        assert_eq!(order, vec!["first", "second", "third", "fourth"]);
    }

    #[test]
    fn tie_break_component_orders_equal_primaries() {
        let mut frontier = Frontier::new();
        frontier.push("far", Priority::new(OrderedFloat(4.), OrderedFloat(3.)));
        frontier.push("near", Priority::new(OrderedFloat(4.), OrderedFloat(1.)));
        assert_eq!(frontier.pop_best().unwrap().0, "near");
    }

    #[test]
    fn better_push_replaces_existing_entry() {
        let mut frontier = Frontier::new();
        assert!(frontier.push((1, 1), p(6.)));
        assert!(frontier.push((1, 1), p(4.)));
        assert_eq!(frontier.len(), 1);
        assert_eq!(frontier.pop_best(), Ok(((1, 1), p(4.))));
    }

    #[test]
    fn worse_push_is_dropped() {
        let mut frontier = Frontier::new();
        assert!(frontier.push((1, 1), p(4.)));
        assert!(!frontier.push((1, 1), p(6.)));
        assert_eq!(frontier.len(), 1);
        assert_eq!(frontier.pop_best(), Ok(((1, 1), p(4.))));
    }

    #[test]
    fn contains_better_or_equal() {
        let mut frontier = Frontier::new();
        frontier.push('x', p(4.));
        assert!(frontier.contains_better_or_equal(&'x', p(4.)));
        assert!(frontier.contains_better_or_equal(&'x', p(5.)));
        assert!(!frontier.contains_better_or_equal(&'x', p(3.)));
        assert!(!frontier.contains_better_or_equal(&'y', p(100.)));
    }
}
