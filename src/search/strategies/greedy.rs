use crate::search::{DuplicatePolicy, Heuristic, HeuristicValue, Priority, SearchStrategy};

/// Greedy best-first search. Ranks by the heuristic alone and never revisits
/// a position once it has a node, so it is fast but not optimal.
#[derive(Debug)]
pub struct GreedyBestFirst {
    heuristic: Box<dyn Heuristic>,
}

impl GreedyBestFirst {
    pub fn new(heuristic: Box<dyn Heuristic>) -> Self {
        Self { heuristic }
    }
}

impl SearchStrategy for GreedyBestFirst {
    fn name(&self) -> &str {
        "greedy"
    }

    fn priority(&self, _g: HeuristicValue, h: HeuristicValue) -> Priority {
        Priority::single(h)
    }

    fn heuristic(&self) -> Option<&dyn Heuristic> {
        Some(self.heuristic.as_ref())
    }

    fn duplicate_policy(&self) -> DuplicatePolicy {
        DuplicatePolicy::KeepFirst
    }
}
