use crate::maze::{Direction, Position};
use crate::search::{NodeId, SearchNode, State, NO_NODE};
use segvec::{Linear, SegVec};
use std::collections::HashMap;

/// A [`SearchSpace`] is an append-only arena holding one [`SearchNode`] per
/// visited position. Nodes refer to their parent by index, so a path is
/// recovered by walking parent indices back from the goal rather than by
/// copying the path into every node.
#[derive(Debug)]
pub struct SearchSpace {
    root_node_id: NodeId,
    nodes: SegVec<SearchNode, Linear>,
    positions: SegVec<Position, Linear>,
    registered_nodes: HashMap<Position, NodeId>,
}

impl SearchSpace {
    pub fn new(initial_position: Position) -> Self {
        let mut nodes = SegVec::new();
        let mut positions = SegVec::new();
        let mut registered_nodes = HashMap::new();

        let root_node_id = NodeId::new(0);
        registered_nodes.insert(initial_position, root_node_id);
        nodes.push(SearchNode::new_root(root_node_id));
        positions.push(initial_position);

        Self {
            root_node_id,
            nodes,
            positions,
            registered_nodes,
        }
    }

    /// Return the node registered for `position`, creating it (as a child of
    /// `parent_id` reached via `transition`) if the position is new.
    pub fn insert_or_get_node(
        &mut self,
        position: Position,
        transition: Direction,
        parent_id: NodeId,
    ) -> &mut SearchNode {
        let node_id = match self.registered_nodes.get(&position) {
            Some(&node_id) => node_id,
            None => {
                let node_id = NodeId::new(self.nodes.len());
                self.nodes
                    .push(SearchNode::new_with_parent(node_id, parent_id, transition));
                self.positions.push(position);
                self.registered_nodes.insert(position, node_id);
                node_id
            }
        };
        self.get_node_mut(node_id)
    }

    pub fn lookup(&self, position: Position) -> Option<NodeId> {
        self.registered_nodes.get(&position).copied()
    }

    #[inline(always)]
    pub fn get_root_node_mut(&mut self) -> &mut SearchNode {
        self.get_node_mut(self.root_node_id)
    }

    #[inline(always)]
    pub fn get_node(&self, node_id: NodeId) -> &SearchNode {
        self.nodes.get(node_id.id()).expect("Invalid node id")
    }

    #[inline(always)]
    pub fn get_node_mut(&mut self, node_id: NodeId) -> &mut SearchNode {
        self.nodes.get_mut(node_id.id()).expect("Invalid node id")
    }

    #[inline(always)]
    pub fn get_position(&self, node_id: NodeId) -> Position {
        *self.positions.get(node_id.id()).expect("Invalid node id")
    }

    /// Number of distinct positions seen so far.
    pub fn len(&self) -> usize {
        self.registered_nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registered_nodes.is_empty()
    }

    /// Positions from the root to the given node, inclusive.
    pub fn extract_path(&self, node_id: NodeId) -> Vec<Position> {
        let mut path = vec![];
        let mut current_id = node_id;
        while current_id != NO_NODE {
            path.push(self.get_position(current_id));
            current_id = self.get_node(current_id).get_parent_id();
        }
        path.reverse();
        path
    }

    /// The [`State`] reached at the given node.
    pub fn extract_state(&self, node_id: NodeId) -> State {
        State::from_path(self.extract_path(node_id), self.get_node(node_id).get_g())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_or_get_registers_each_position_once() {
        let start = Position::new(0, 0);
        let mut space = SearchSpace::new(start);
        space.get_root_node_mut().open(0.0.into(), 0.0.into());
        let root_id = space.lookup(start).unwrap();

        let child_id = space
            .insert_or_get_node(Position::new(0, 1), Direction::Right, root_id)
            .get_node_id();
        let again_id = space
            .insert_or_get_node(Position::new(0, 1), Direction::Left, root_id)
            .get_node_id();

        assert_eq!(child_id, again_id);
        assert_eq!(space.len(), 2);
        assert_eq!(
            space.get_node(child_id).get_transition(),
            Some(Direction::Right)
        );
    }

    #[test]
    fn extract_path_follows_parents() {
        let mut space = SearchSpace::new(Position::new(0, 0));
        space.get_root_node_mut().open(0.0.into(), 0.0.into());
        let root_id = space.lookup(Position::new(0, 0)).unwrap();

        let a = space.insert_or_get_node(Position::new(1, 0), Direction::Down, root_id);
        a.open(1.0.into(), 0.0.into());
        let a_id = a.get_node_id();
        let b = space.insert_or_get_node(Position::new(1, 1), Direction::Right, a_id);
        b.open(2.0.into(), 0.0.into());
        let b_id = b.get_node_id();

        assert_eq!(
            space.extract_path(b_id),
            vec![
                Position::new(0, 0),
                Position::new(1, 0),
                Position::new(1, 1)
            ]
        );
        let state = space.extract_state(b_id);
        assert_eq!(state.position(), Position::new(1, 1));
        assert_eq!(state.cost().into_inner(), 2.0);
    }
}
