use crate::search::{
    DuplicatePolicy, Heuristic, HeuristicValue, ManhattanHeuristic, Priority, SearchStrategy,
};
use std::fmt::Debug;

/// Ranking function of a [`BestFirst`] search, taking `g` and `h`.
pub type Evaluation = Box<dyn Fn(HeuristicValue, HeuristicValue) -> Priority>;

/// Generic best-first search. The other strategies are fixed configurations
/// of this one; out of the box it ranks like [`AStar`](super::AStar) with the
/// Manhattan heuristic.
pub struct BestFirst {
    name: String,
    evaluation: Evaluation,
    heuristic: Option<Box<dyn Heuristic>>,
    duplicate_policy: DuplicatePolicy,
}

impl Default for BestFirst {
    fn default() -> Self {
        Self::new()
    }
}

impl BestFirst {
    pub fn new() -> Self {
        Self {
            name: "best-first".to_string(),
            evaluation: Box::new(|g, h| Priority::new(g + h, h)),
            heuristic: Some(Box::new(ManhattanHeuristic::new())),
            duplicate_policy: DuplicatePolicy::KeepCheapest,
        }
    }

    /// Weighted A*: ranks by `g + weight * h`.
    pub fn weighted(weight: f64) -> Self {
        Self::new()
            .with_name(format!("best-first-w{}", weight))
            .with_evaluation(Box::new(move |g, h| {
                Priority::new(g + HeuristicValue::from(h.into_inner() * weight), h)
            }))
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_evaluation(mut self, evaluation: Evaluation) -> Self {
        self.evaluation = evaluation;
        self
    }

    pub fn with_heuristic(mut self, heuristic: Box<dyn Heuristic>) -> Self {
        self.heuristic = Some(heuristic);
        self
    }

    pub fn without_heuristic(mut self) -> Self {
        self.heuristic = None;
        self
    }

    pub fn with_duplicate_policy(mut self, duplicate_policy: DuplicatePolicy) -> Self {
        self.duplicate_policy = duplicate_policy;
        self
    }
}

impl Debug for BestFirst {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BestFirst")
            .field("name", &self.name)
            .field("heuristic", &self.heuristic)
            .field("duplicate_policy", &self.duplicate_policy)
            .finish_non_exhaustive()
    }
}

impl SearchStrategy for BestFirst {
    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self, g: HeuristicValue, h: HeuristicValue) -> Priority {
        (self.evaluation)(g, h)
    }

    fn heuristic(&self) -> Option<&dyn Heuristic> {
        self.heuristic.as_deref()
    }

    fn duplicate_policy(&self) -> DuplicatePolicy {
        self.duplicate_policy
    }
}
