use crate::search::{Heuristic, HeuristicValue, Priority, SearchStrategy};

/// Uniform cost search (Dijkstra). Optimal for non-negative step costs.
#[derive(Debug, Default)]
pub struct UniformCost {}

impl UniformCost {
    pub fn new() -> Self {
        Self {}
    }
}

impl SearchStrategy for UniformCost {
    fn name(&self) -> &str {
        "uniform-cost"
    }

    fn priority(&self, g: HeuristicValue, _h: HeuristicValue) -> Priority {
        Priority::single(g)
    }

    fn heuristic(&self) -> Option<&dyn Heuristic> {
        None
    }
}
