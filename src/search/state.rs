use crate::maze::Position;
use crate::search::HeuristicValue;

/// An immutable snapshot of the agent's progress: where it is, the route it
/// took, and what that route cost. New states are only ever derived from an
/// existing one via [`State::successor`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    position: Position,
    path: Vec<Position>,
    cost: HeuristicValue,
}

impl State {
    pub(crate) fn root(position: Position) -> Self {
        Self {
            position,
            path: vec![position],
            cost: 0.0.into(),
        }
    }

    pub(crate) fn from_path(path: Vec<Position>, cost: HeuristicValue) -> Self {
        let position = *path.last().expect("a state path is never empty");
        debug_assert!(
            path.windows(2).all(|pair| pair[0].is_adjacent(&pair[1])),
            "consecutive path entries must be adjacent: {:?}",
            path
        );
        Self {
            position,
            path,
            cost,
        }
    }

    /// The state reached by moving to the adjacent `position` at `step_cost`.
    pub(crate) fn successor(&self, position: Position, step_cost: HeuristicValue) -> Self {
        debug_assert!(
            self.position.is_adjacent(&position),
            "{} is not adjacent to {}",
            position,
            self.position
        );
        let mut path = Vec::with_capacity(self.path.len() + 1);
        path.extend_from_slice(&self.path);
        path.push(position);
        Self {
            position,
            path,
            cost: self.cost + step_cost,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Positions from the start to [`State::position`], inclusive.
    pub fn path(&self) -> &[Position] {
        &self.path
    }

    pub fn cost(&self) -> HeuristicValue {
        self.cost
    }

    pub fn into_path(self) -> Vec<Position> {
        self.path
    }
}
