use crate::maze::Position;
use crate::search::{Heuristic, HeuristicValue, SearchProblem};

/// Manhattan distance to the goal. With unit step costs and four-way movement
/// this is both admissible and consistent.
#[derive(Clone, Debug, Default)]
pub struct ManhattanHeuristic;

impl ManhattanHeuristic {
    pub fn new() -> Self {
        ManhattanHeuristic {}
    }
}

impl Heuristic for ManhattanHeuristic {
    fn evaluate(&self, position: Position, problem: &SearchProblem) -> HeuristicValue {
        let distance = position.manhattan_distance(&problem.goal()) as f64;
        (distance * problem.step_cost().into_inner()).into()
    }

    fn is_admissible(&self) -> bool {
        true
    }
}
