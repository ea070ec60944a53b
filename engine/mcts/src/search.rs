//! MCTS search implementation.
//!
//! Implements the core MCTS loop:
//! 1. Selection: Traverse tree using UCT to find a leaf
//! 2. Expansion: Add one child per legal successor of the leaf
//! 3. Simulation: Random rollout from a new child (or the leaf itself)
//! 4. Backpropagation: Update statistics along the path to the root
//!
//! The loop runs until the configured wall-clock budget is spent, or for a
//! fixed number of iterations when `max_iterations` is set.

use std::time::{Duration, Instant};

use rand::Rng;
use rand_chacha::ChaCha20Rng;
use thiserror::Error;
use tracing::{debug, trace, warn};

use crate::board::{Board, BoardError, Move, PlayerId};
use crate::config::MctsConfig;
use crate::node::NodeId;
use crate::rollout::{RolloutEngine, RolloutResult};
use crate::tree::MctsTree;

/// Errors that can occur during MCTS search.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Invalid board state: {0}")]
    InvalidBoardState(String),

    #[error("No legal moves available")]
    NoLegalMoves,

    #[error("Rollout snapshot failed: {0}")]
    CloneFailure(#[from] BoardError),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

/// How the returned move was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveSource {
    /// Early game, the board's best initial move was played without searching
    Opening,
    /// Most visited child of the search tree
    TreeSearch,
}

/// Result of an MCTS search.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Move to play
    pub best_move: Move,

    /// Visits of the chosen child (0 for opening moves)
    pub visits: u32,

    /// Mean rollout score of the chosen child (0.0 for opening moves)
    pub mean_score: f64,

    /// Loop iterations run, including skipped ones
    pub iterations: u32,

    /// Iterations abandoned because the rollout snapshot failed
    pub skipped_iterations: u32,

    /// Nodes in the tree when the search ended (0 for opening moves)
    pub tree_size: usize,

    pub source: MoveSource,

    pub elapsed: Duration,
}

/// MCTS search state for a single call.
pub struct MctsSearch<B: Board> {
    tree: MctsTree<B>,
    config: MctsConfig,
    rollout: RolloutEngine,
    perspective: PlayerId,
    skipped_iterations: u32,
}

impl<B: Board> MctsSearch<B> {
    /// Create a new MCTS search rooted at `board`.
    ///
    /// The player to move on `board` is the player the search optimizes for.
    pub fn new(board: B, config: MctsConfig) -> Result<Self, SearchError> {
        config.validate()?;
        if !board.is_running() {
            return Err(SearchError::InvalidBoardState(
                "search requires a running game".to_string(),
            ));
        }

        let perspective = board.current_player();
        let rollout = RolloutEngine::new(&config);

        Ok(Self {
            tree: MctsTree::new(board),
            config,
            rollout,
            perspective,
            skipped_iterations: 0,
        })
    }

    /// Run the search until the budget is spent and return the most visited
    /// root move.
    pub fn run(&mut self, rng: &mut ChaCha20Rng) -> Result<SearchResult, SearchError> {
        let start = Instant::now();
        let deadline = start + self.config.time_budget;

        debug!(
            legal_moves = self.tree.get(self.tree.root()).state.board.legal_moves().len(),
            perspective = self.perspective,
            budget_ms = self.config.time_budget.as_millis() as u64,
            max_iterations = ?self.config.max_iterations,
            "MCTS search starting"
        );

        let mut iterations = 0u32;
        loop {
            let exhausted = match self.config.max_iterations {
                Some(limit) => iterations >= limit,
                None => Instant::now() >= deadline,
            };
            if exhausted {
                break;
            }

            self.iterate(rng);
            iterations += 1;
        }

        let elapsed = start.elapsed();
        let best_id = self.tree.best_child().ok_or(SearchError::NoLegalMoves)?;
        let best = self.tree.get(best_id);
        let best_move = best.initiating_move().ok_or(SearchError::NoLegalMoves)?;

        let stats = self.tree.stats();
        debug!(
            iterations,
            skipped = self.skipped_iterations,
            tree_size = stats.total_nodes,
            max_depth = stats.max_depth,
            root_visits = stats.root_visits,
            best_visits = best.visit_count(),
            best_mean = best.mean_score(),
            elapsed_ms = elapsed.as_millis() as u64,
            "MCTS search complete"
        );

        Ok(SearchResult {
            best_move,
            visits: best.visit_count(),
            mean_score: best.mean_score(),
            iterations,
            skipped_iterations: self.skipped_iterations,
            tree_size: self.tree.len(),
            source: MoveSource::TreeSearch,
            elapsed,
        })
    }

    /// Run a single iteration (select -> expand -> simulate -> backpropagate).
    ///
    /// A failed rollout snapshot abandons this iteration only.
    fn iterate(&mut self, rng: &mut ChaCha20Rng) {
        // Selection
        let leaf_id = self.select();

        // Expansion
        let added = self.tree.expand(leaf_id);

        // Simulation starts from a random new child, or the leaf itself
        let node_id = if added > 0 {
            let children = &self.tree.get(leaf_id).children;
            children[rng.gen_range(0..children.len())]
        } else {
            leaf_id
        };

        let RolloutResult {
            score,
            rounds_played,
        } = match self.simulate(node_id, rng) {
            Ok(result) => result,
            Err(e) => {
                self.skipped_iterations += 1;
                warn!(node = node_id.0, error = %e, "Skipping MCTS iteration");
                return;
            }
        };

        // Backpropagation
        self.tree.backpropagate(node_id, score);

        trace!(
            leaf = leaf_id.0,
            node = node_id.0,
            expanded = added,
            rounds_played,
            score,
            "MCTS iteration complete"
        );
    }

    /// Roll out from a node of the tree for the search's perspective player.
    pub fn simulate(
        &self,
        node_id: NodeId,
        rng: &mut ChaCha20Rng,
    ) -> Result<RolloutResult, SearchError> {
        let state = &self.tree.get(node_id).state;
        Ok(self.rollout.run(state, self.perspective, rng)?)
    }

    /// Descend from the root by UCT until reaching a node without children.
    fn select(&self) -> NodeId {
        let mut current = self.tree.root();
        while let Some(child_id) = self
            .tree
            .select_child(current, self.config.exploration_constant)
        {
            current = child_id;
        }
        current
    }

    /// Get the search tree (for inspection/debugging).
    pub fn tree(&self) -> &MctsTree<B> {
        &self.tree
    }

    /// Player the search optimizes for.
    pub fn perspective(&self) -> PlayerId {
        self.perspective
    }
}

/// Find the next move for the player to move on `board`.
///
/// During the opening turns the board's best initial move is returned without
/// building a tree. Otherwise a fresh MCTS search is run and dropped.
pub fn find_next_move<B: Board>(
    board: &B,
    config: MctsConfig,
    rng: &mut ChaCha20Rng,
) -> Result<SearchResult, SearchError> {
    if !board.is_running() {
        return Err(SearchError::InvalidBoardState(
            "search requires a running game".to_string(),
        ));
    }

    let turn = board.turn_count();
    if turn < config.opening_move_threshold {
        let start = Instant::now();
        let best_move = board
            .best_initial_move()
            .ok_or(SearchError::NoLegalMoves)?;
        debug!(turn, ?best_move, "Opening turn, playing best initial move");
        return Ok(SearchResult {
            best_move,
            visits: 0,
            mean_score: 0.0,
            iterations: 0,
            skipped_iterations: 0,
            tree_size: 0,
            source: MoveSource::Opening,
            elapsed: start.elapsed(),
        });
    }

    let mut search = MctsSearch::new(board.clone(), config)?;
    search.run(rng)
}
