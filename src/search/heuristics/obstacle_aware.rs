use crate::maze::Position;
use crate::search::{
    heuristics::ManhattanHeuristic, Heuristic, HeuristicValue, SearchProblem,
};

/// Manhattan distance plus a penalty for standing close to obstacles. The
/// penalty is `weight * sum(1 / (d + 1))` over the four sensor distances of
/// the evaluated cell, so it only uses what the agent perceives there. The
/// penalty can overestimate, hence the heuristic is not admissible.
#[derive(Clone, Debug)]
pub struct ObstacleAwareHeuristic {
    weight: f64,
}

impl Default for ObstacleAwareHeuristic {
    fn default() -> Self {
        Self::new(0.5)
    }
}

impl ObstacleAwareHeuristic {
    pub fn new(weight: f64) -> Self {
        Self { weight }
    }
}

impl Heuristic for ObstacleAwareHeuristic {
    fn evaluate(&self, position: Position, problem: &SearchProblem) -> HeuristicValue {
        let manhattan = ManhattanHeuristic::new().evaluate(position, problem);
        let perception = problem
            .sense(position)
            .unwrap_or_else(|e| panic!("cannot evaluate heuristic: {}", e));
        let penalty: f64 = perception
            .as_array()
            .iter()
            .map(|&distance| 1.0 / (distance as f64 + 1.0))
            .sum();
        (manhattan.into_inner() + self.weight * penalty).into()
    }

    fn is_admissible(&self) -> bool {
        self.weight == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::MazeGrid;
    use crate::test_utils::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn penalises_cells_near_obstacles() {
        let maze = MazeGrid::from_rows(OPEN_3X3).unwrap();
        let problem = SearchProblem::new(&maze);
        let heuristic = ObstacleAwareHeuristic::default();

        // Start corner: manhattan 4, distances (0, 2, 0, 2).
        let value = heuristic.evaluate(Position::new(0, 0), &problem);
        assert_approx_eq!(value.into_inner(), 4.0 + 0.5 * (1.0 + 1.0 / 3.0 + 1.0 + 1.0 / 3.0));

        // Centre: manhattan 2, every distance 1.
        let value = heuristic.evaluate(Position::new(1, 1), &problem);
        assert_approx_eq!(value.into_inner(), 2.0 + 0.5 * 4.0 * 0.5);
        assert!(!heuristic.is_admissible());
    }
}
