use crate::search::{Heuristic, HeuristicValue, Priority, SearchStrategy};

/// A* search. Ranks by `f = g + h`, breaking ties towards the lower `h`, i.e.
/// towards nodes closer to the goal. Returns optimal paths when the heuristic
/// is admissible and consistent.
#[derive(Debug)]
pub struct AStar {
    heuristic: Box<dyn Heuristic>,
}

impl AStar {
    pub fn new(heuristic: Box<dyn Heuristic>) -> Self {
        Self { heuristic }
    }
}

impl SearchStrategy for AStar {
    fn name(&self) -> &str {
        "astar"
    }

    fn priority(&self, g: HeuristicValue, h: HeuristicValue) -> Priority {
        Priority::new(g + h, h)
    }

    fn heuristic(&self) -> Option<&dyn Heuristic> {
        Some(self.heuristic.as_ref())
    }
}
