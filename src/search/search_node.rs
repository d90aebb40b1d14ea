use crate::maze::Direction;
use crate::search::HeuristicValue;
use ordered_float::Float;

/// Index of a node in the [`SearchSpace`](crate::search::SearchSpace) arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    #[inline(always)]
    pub fn id(&self) -> usize {
        self.0
    }
}

/// Parent id of the root node.
pub const NO_NODE: NodeId = NodeId(usize::MAX);

/// The status of a search node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchNodeStatus {
    /// New node, not yet opened
    New,
    /// Node is in the open list
    Open,
    /// Node has been expanded
    Closed,
}

/// A [`SearchNode`] holds the search-specific information about one maze
/// cell: how it was reached, at what cost, and its heuristic estimate.
#[derive(Debug, Clone)]
pub struct SearchNode {
    node_id: NodeId,
    status: SearchNodeStatus,
    /// G-value of the node, i.e. the cost of the best known path to it.
    g: HeuristicValue,
    /// H-value of the node. Zero for strategies without a heuristic.
    h: HeuristicValue,
    /// Move that led here from the parent, `None` for the root.
    transition: Option<Direction>,
    parent_id: NodeId,
}

impl SearchNode {
    pub fn new_root(node_id: NodeId) -> Self {
        Self {
            node_id,
            status: SearchNodeStatus::New,
            g: HeuristicValue::infinity(),
            h: HeuristicValue::infinity(),
            transition: None,
            parent_id: NO_NODE,
        }
    }

    pub fn new_with_parent(node_id: NodeId, parent_id: NodeId, transition: Direction) -> Self {
        Self {
            node_id,
            status: SearchNodeStatus::New,
            g: HeuristicValue::infinity(),
            h: HeuristicValue::infinity(),
            transition: Some(transition),
            parent_id,
        }
    }

    pub fn open(&mut self, g: HeuristicValue, h: HeuristicValue) {
        self.status = SearchNodeStatus::Open;
        self.g = g;
        self.h = h;
    }

    /// Open the node again through a cheaper parent. The heuristic value is
    /// kept since it only depends on the position.
    pub fn reopen(&mut self, g: HeuristicValue, parent_id: NodeId, transition: Direction) {
        debug_assert!(g < self.g, "reopening must improve the g-value");
        self.status = SearchNodeStatus::Open;
        self.g = g;
        self.parent_id = parent_id;
        self.transition = Some(transition);
    }

    pub fn close(&mut self) {
        debug_assert_eq!(
            self.status,
            SearchNodeStatus::Open,
            "Node must be open to close it"
        );
        self.status = SearchNodeStatus::Closed;
    }

    pub fn get_status(&self) -> SearchNodeStatus {
        self.status
    }

    pub fn get_node_id(&self) -> NodeId {
        self.node_id
    }

    pub fn get_g(&self) -> HeuristicValue {
        self.g
    }

    pub fn get_h(&self) -> HeuristicValue {
        self.h
    }

    pub fn get_parent_id(&self) -> NodeId {
        self.parent_id
    }

    pub fn get_transition(&self) -> Option<Direction> {
        self.transition
    }
}
