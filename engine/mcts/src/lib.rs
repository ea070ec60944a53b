//! Monte Carlo Tree Search (MCTS) for settlement-building board games.
//!
//! This crate picks the next move for the player to move by repeatedly
//! sampling short random games under a wall-clock budget. It is generic over
//! any game exposed through the [`Board`] trait: legal moves, move
//! application, player points and the fields around each intersection.
//!
//! # Overview
//!
//! Each search iteration consists of four phases:
//!
//! 1. **Selection**: Traverse the tree using UCT (Upper Confidence bound
//!    applied to Trees) to balance exploration and exploitation
//! 2. **Expansion**: When reaching a leaf, add one child for each legal move
//! 3. **Simulation**: Play a few random moves on a snapshot of a new child's
//!    board and score them with the building heuristic
//! 4. **Backpropagation**: Add the score and a visit to every node on the
//!    path from that child to the root
//!
//! During the first turns of a game the search is skipped and the board's
//! best opening placement is played instead.
//!
//! # Usage
//!
//! ```rust,ignore
//! use mcts::{find_next_move, MctsConfig};
//! use rand_chacha::ChaCha20Rng;
//! use rand::SeedableRng;
//!
//! let board = my_game.board(); // any type implementing mcts::Board
//! let config = MctsConfig::for_play();
//!
//! let mut rng = ChaCha20Rng::seed_from_u64(42);
//! let result = find_next_move(&board, config, &mut rng)?;
//!
//! println!("Best move: {:?}", result.best_move);
//! println!("Iterations: {}", result.iterations);
//! ```
//!
//! # Configuration
//!
//! The [`MctsConfig`] struct controls search behavior:
//!
//! - `time_budget`: Wall-clock budget per search (default: 1000 ms)
//! - `rollout_depth`: Random moves per rollout (default: 6)
//! - `exploration_constant`: UCT exploration constant (default: sqrt(2))
//! - `opening_move_threshold`: Turns played before searching (default: 4)
//! - `max_iterations`: Fixed iteration count instead of the clock (testing)
//!
//! [`MctsConfig::from_central`] builds it from `config.toml` via the
//! `engine-config` crate.
//!
//! # Architecture
//!
//! ```text
//! +-------------------------------------------------------------+
//! |                         MctsSearch                          |
//! +-------------------------------------------------------------+
//! |  +-------------+  +-------------+  +---------------------+  |
//! |  |  MctsTree   |  |    Board    |  |   RolloutEngine     |  |
//! |  |  (arena)    |  | (game rules)|  | (+ heuristic)       |  |
//! |  +------+------+  +------+------+  +----------+----------+  |
//! |         |                |                    |             |
//! |         v                v                    v             |
//! |  +-------------------------------------------------------+  |
//! |  |            select -> expand -> simulate ->            |  |
//! |  |                     backpropagate                     |  |
//! |  +-------------------------------------------------------+  |
//! +-------------------------------------------------------------+
//! ```

pub mod board;
pub mod config;
pub mod heuristic;
pub mod node;
pub mod rollout;
pub mod search;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

// Re-export main types
pub use board::{Board, BoardError, Field, Move, PlayerId, Resource};
pub use config::MctsConfig;
pub use heuristic::{best_opening_move, move_score, opening_move_score, raw_score};
pub use node::{MctsNode, NodeId, NodeState};
pub use rollout::{discounted_horizon, RolloutEngine, RolloutResult};
pub use search::{find_next_move, MctsSearch, MoveSource, SearchError, SearchResult};
pub use tree::{MctsTree, TreeStats};
