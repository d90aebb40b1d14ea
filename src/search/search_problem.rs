//! The [`SearchProblem`] turns a maze into a state space: where the agent
//! starts, which moves are legal from a cell, what they cost, and when the
//! agent is done.

use crate::maze::{Direction, MazeError, MazeGrid, Perception, Position};
use crate::search::{HeuristicValue, State};
use strum::IntoEnumIterator;

/// Cost of moving between two adjacent free cells.
pub const STEP_COST: f64 = 1.0;

#[derive(Debug, Clone, Copy)]
pub struct SearchProblem<'a> {
    maze: &'a MazeGrid,
    start: Position,
    goal: Position,
}

impl<'a> SearchProblem<'a> {
    pub fn new(maze: &'a MazeGrid) -> Self {
        Self {
            maze,
            start: maze.start(),
            goal: maze.goal(),
        }
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn goal(&self) -> Position {
        self.goal
    }

    pub fn step_cost(&self) -> HeuristicValue {
        STEP_COST.into()
    }

    pub fn initial_state(&self) -> State {
        State::root(self.start)
    }

    pub fn is_goal(&self, state: &State) -> bool {
        self.is_goal_position(state.position())
    }

    pub fn is_goal_position(&self, position: Position) -> bool {
        position == self.goal
    }

    /// The moves available from `position`, in up, down, left, right order.
    /// Only the four cells adjacent to `position` are inspected.
    pub fn transitions(
        &self,
        position: Position,
    ) -> impl Iterator<Item = (Direction, Position)> + 'a {
        let maze = self.maze;
        Direction::iter().filter_map(move |direction| {
            position
                .step(direction, maze.size())
                .filter(|&next| maze.is_free(next))
                .map(|next| (direction, next))
        })
    }

    pub fn successors(&self, state: &State) -> Vec<State> {
        self.transitions(state.position())
            .map(|(_, next)| state.successor(next, self.step_cost()))
            .collect()
    }

    /// What the agent perceives when standing on `position`.
    pub fn sense(&self, position: Position) -> Result<Perception, MazeError> {
        self.maze.sense(position)
    }
}
