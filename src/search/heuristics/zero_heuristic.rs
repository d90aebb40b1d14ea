use crate::maze::Position;
use crate::search::{Heuristic, HeuristicValue, SearchProblem};

#[derive(Clone, Debug, Default)]
pub struct ZeroHeuristic {}

impl ZeroHeuristic {
    pub fn new() -> Self {
        ZeroHeuristic {}
    }
}

impl Heuristic for ZeroHeuristic {
    fn evaluate(&self, _position: Position, _problem: &SearchProblem) -> HeuristicValue {
        (0.).into()
    }

    fn is_admissible(&self) -> bool {
        true
    }
}
