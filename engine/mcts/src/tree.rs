//! MCTS tree structure with arena allocation.
//!
//! Nodes are stored in a contiguous Vec and referenced by NodeId indices.
//! Parent links are plain indices, so the tree never forms ownership cycles.

use crate::board::{Board, Move};
use crate::node::{MctsNode, NodeId};

/// MCTS tree with arena-based node storage.
#[derive(Debug)]
pub struct MctsTree<B> {
    /// Arena storing all nodes
    nodes: Vec<MctsNode<B>>,

    /// Root node index (always 0 after initialization)
    root: NodeId,
}

impl<B: Board> MctsTree<B> {
    /// Create a new tree rooted at the given board.
    pub fn new(board: B) -> Self {
        Self {
            nodes: vec![MctsNode::new_root(board)],
            root: NodeId(0),
        }
    }

    /// Add a child to a parent node. Only expansion creates nodes.
    /// Returns the new child's NodeId.
    pub(crate) fn add_child(&mut self, parent_id: NodeId, board: B, mv: Move) -> NodeId {
        let child_id = self.allocate(MctsNode::new_child(parent_id, board, Some(mv)));
        self.get_mut(parent_id).children.push(child_id);
        child_id
    }

    /// Expand a node with one child per legal successor of its board.
    ///
    /// Terminal boards are left childless. A node is expanded at most once;
    /// later calls add nothing. Returns the number of children added.
    pub fn expand(&mut self, node_id: NodeId) -> usize {
        let node = self.get(node_id);
        if node.expanded || !node.state.board.is_running() {
            return 0;
        }

        let successors = node.state.board.successors();
        self.get_mut(node_id).expanded = true;

        let added = successors.len();
        for (mv, board) in successors {
            self.add_child(node_id, board, mv);
        }
        added
    }
}

impl<B> MctsTree<B> {
    /// Get the root node ID.
    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Get a reference to a node by ID.
    #[inline]
    pub fn get(&self, id: NodeId) -> &MctsNode<B> {
        &self.nodes[id.0 as usize]
    }

    /// Get a mutable reference to a node by ID.
    #[inline]
    pub(crate) fn get_mut(&mut self, id: NodeId) -> &mut MctsNode<B> {
        &mut self.nodes[id.0 as usize]
    }

    /// Allocate a new node and return its ID.
    fn allocate(&mut self, node: MctsNode<B>) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Get the total number of nodes in the tree.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if tree is empty (should never be true after construction).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Select the child of a node with the highest UCT value.
    /// The earliest-expanded child wins ties. None if the node has no children.
    pub fn select_child(&self, node_id: NodeId, exploration: f64) -> Option<NodeId> {
        let node = self.get(node_id);
        // Pre-compute ln once instead of per-child comparison
        let parent_visits_ln = (node.visit_count as f64).ln();

        let mut best: Option<(NodeId, f64)> = None;
        for &child_id in &node.children {
            let value = self.get(child_id).uct_value(parent_visits_ln, exploration);
            if best.map_or(true, |(_, v)| value > v) {
                best = Some((child_id, value));
            }
        }
        best.map(|(id, _)| id)
    }

    /// Backpropagate a rollout score from a node to the root.
    /// Every node on the path gets one visit and the full score.
    pub fn backpropagate(&mut self, node_id: NodeId, score: f64) {
        let mut current_id = node_id;

        while current_id.is_some() {
            let node = self.get_mut(current_id);
            node.record_visit(score);
            current_id = node.parent;
        }
    }

    /// Get the most visited child of the root.
    /// The earliest-expanded child wins ties. None if the root has no children.
    pub fn best_child(&self) -> Option<NodeId> {
        let mut best: Option<(NodeId, u32)> = None;
        for &child_id in &self.get(self.root).children {
            let visits = self.get(child_id).visit_count;
            if best.map_or(true, |(_, v)| visits > v) {
                best = Some((child_id, visits));
            }
        }
        best.map(|(id, _)| id)
    }

    /// Visit distribution over the root's children, in expansion order.
    pub fn root_visit_distribution(&self) -> Vec<(NodeId, f64)> {
        let root = self.get(self.root);
        let total: u32 = root
            .children
            .iter()
            .map(|id| self.get(*id).visit_count)
            .sum();

        if total == 0 {
            return Vec::new();
        }

        root.children
            .iter()
            .map(|id| (*id, self.get(*id).visit_count as f64 / total as f64))
            .collect()
    }

    /// Get statistics about the tree for debugging.
    pub fn stats(&self) -> TreeStats {
        let root = self.get(self.root);
        TreeStats {
            total_nodes: self.nodes.len(),
            root_visits: root.visit_count,
            root_value: root.mean_score(),
            max_depth: self.compute_max_depth(self.root, 0),
        }
    }

    fn compute_max_depth(&self, node_id: NodeId, current_depth: u32) -> u32 {
        let node = self.get(node_id);
        if node.children.is_empty() {
            return current_depth;
        }

        node.children
            .iter()
            .map(|id| self.compute_max_depth(*id, current_depth + 1))
            .max()
            .unwrap_or(current_depth)
    }
}

/// Statistics about an MCTS tree.
#[derive(Debug, Clone)]
pub struct TreeStats {
    pub total_nodes: usize,
    pub root_visits: u32,
    pub root_value: f64,
    pub max_depth: u32,
}
