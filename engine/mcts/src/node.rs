//! MCTS tree node representation.
//!
//! Each node owns the board reached by playing a move from its parent.
//! Nodes store visit statistics used for UCT selection and for picking the
//! final move.

use crate::board::{Board, Move, PlayerId};

/// Index into the node arena. Using a newtype for type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    pub const NONE: NodeId = NodeId(u32::MAX);

    pub fn is_none(self) -> bool {
        self == Self::NONE
    }

    pub fn is_some(self) -> bool {
        !self.is_none()
    }
}

/// Board snapshot held by a node.
#[derive(Debug, Clone)]
pub struct NodeState<B> {
    /// Board after `initiating_move` was played
    pub board: B,

    /// Move that produced this state (None for the root)
    pub initiating_move: Option<Move>,

    /// Player to move when the state was created
    pub player_to_move: PlayerId,
}

impl<B: Board> NodeState<B> {
    pub fn new(board: B, initiating_move: Option<Move>) -> Self {
        let player_to_move = board.current_player();
        Self {
            board,
            initiating_move,
            player_to_move,
        }
    }
}

/// A node in the MCTS tree.
#[derive(Debug, Clone)]
pub struct MctsNode<B> {
    /// Parent node index (NONE for root)
    pub parent: NodeId,

    pub state: NodeState<B>,

    /// Children in expansion order.
    pub children: Vec<NodeId>,

    /// Set once the node has been expanded, even if it got no children.
    pub(crate) expanded: bool,

    /// Number of times this node has been visited
    pub(crate) visit_count: u32,

    /// Sum of rollout scores backpropagated through this node.
    /// mean = cumulative_score / visit_count
    pub(crate) cumulative_score: f64,
}

impl<B: Board> MctsNode<B> {
    /// Create a new root node.
    pub fn new_root(board: B) -> Self {
        Self::new_child(NodeId::NONE, board, None)
    }

    /// Create a new child node.
    pub fn new_child(parent: NodeId, board: B, initiating_move: Option<Move>) -> Self {
        Self {
            parent,
            state: NodeState::new(board, initiating_move),
            children: Vec::new(),
            expanded: false,
            visit_count: 0,
            cumulative_score: 0.0,
        }
    }
}

impl<B> MctsNode<B> {
    #[inline]
    pub fn visit_count(&self) -> u32 {
        self.visit_count
    }

    #[inline]
    pub fn cumulative_score(&self) -> f64 {
        self.cumulative_score
    }

    /// Mean rollout score. Returns 0.0 if never visited.
    #[inline]
    pub fn mean_score(&self) -> f64 {
        if self.visit_count == 0 {
            0.0
        } else {
            self.cumulative_score / self.visit_count as f64
        }
    }

    /// UCT value of this node as a child of a parent with `parent_visits_ln`
    /// = ln(N_parent).
    ///
    /// UCT = mean + C * sqrt(ln(N_parent) / N)
    ///
    /// Unvisited nodes are infinitely attractive so every child is tried once
    /// before any is revisited.
    #[inline]
    pub fn uct_value(&self, parent_visits_ln: f64, exploration: f64) -> f64 {
        if self.visit_count == 0 {
            return f64::INFINITY;
        }
        let n = self.visit_count as f64;
        self.mean_score() + exploration * (parent_visits_ln / n).sqrt()
    }

    /// Move that led to this node.
    #[inline]
    pub fn initiating_move(&self) -> Option<Move> {
        self.state.initiating_move
    }

    #[inline]
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// A leaf has no children, whether or not it has been expanded.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub(crate) fn record_visit(&mut self, score: f64) {
        self.visit_count += 1;
        self.cumulative_score += score;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedBoard;

    #[test]
    fn test_node_id_none() {
        assert!(NodeId::NONE.is_none());
        assert!(!NodeId::NONE.is_some());
        assert!(!NodeId(0).is_none());
        assert!(NodeId(0).is_some());
    }

    #[test]
    fn test_new_root() {
        let node = MctsNode::new_root(ScriptedBoard::new(3).with_current_player(2));

        assert!(node.parent.is_none());
        assert_eq!(node.visit_count(), 0);
        assert!(node.cumulative_score().abs() < 1e-9);
        assert!(node.initiating_move().is_none());
        assert_eq!(node.state.player_to_move, 2);
        assert!(node.children.is_empty());
        assert!(!node.is_expanded());
    }

    #[test]
    fn test_mean_score() {
        let mut node = MctsNode::new_root(ScriptedBoard::new(2));

        // Unvisited
        assert!(node.mean_score().abs() < 1e-9);

        node.record_visit(1.0);
        node.record_visit(2.0);
        assert_eq!(node.visit_count(), 2);
        assert!((node.mean_score() - 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_uct_value() {
        let mut node = MctsNode::new_root(ScriptedBoard::new(2));
        assert!(node.uct_value(10f64.ln(), 1.0).is_infinite());

        for _ in 0..4 {
            node.record_visit(0.5);
        }

        // UCT = 0.5 + 2.0 * sqrt(ln(100) / 4)
        let ln_parent = 100f64.ln();
        let expected = 0.5 + 2.0 * (ln_parent / 4.0).sqrt();
        assert!((node.uct_value(ln_parent, 2.0) - expected).abs() < 1e-9);

        // No exploration term with a single parent visit
        assert!((node.uct_value(1f64.ln(), 2.0) - 0.5).abs() < 1e-9);
    }
}
