//! Random rollouts from a tree node.
//!
//! A rollout plays a handful of uniformly random moves on a private snapshot
//! of the node's board and accumulates the heuristic score of the perspective
//! player after each of that player's moves.

use rand_chacha::ChaCha20Rng;

use crate::board::{Board, BoardError, PlayerId};
use crate::config::MctsConfig;
use crate::heuristic::{move_score, raw_score};
use crate::node::NodeState;

/// Bounded-depth random playout.
#[derive(Debug, Clone)]
pub struct RolloutEngine {
    depth: u32,
    normalize_by_rounds_played: bool,
    normalization_hook: f64,
}

/// Outcome of a single rollout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RolloutResult {
    /// Reward to backpropagate
    pub score: f64,
    /// Random moves actually played
    pub rounds_played: u32,
}

impl RolloutEngine {
    pub fn new(config: &MctsConfig) -> Self {
        Self {
            depth: config.rollout_depth,
            normalize_by_rounds_played: config.normalize_by_rounds_played,
            normalization_hook: discounted_horizon(config.rollout_depth, config.discount),
        }
    }

    #[inline]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Sum of `discount^i` over the even rounds `0, 2, .. <= depth`.
    ///
    /// Available to callers that want to rescale rollout scores; the engine
    /// itself never applies it.
    #[inline]
    pub fn normalization_hook(&self) -> f64 {
        self.normalization_hook
    }

    /// Play a rollout from `state` on behalf of `perspective`.
    ///
    /// The returned score is the accumulated reward divided by the configured
    /// depth, even when the game ended before the depth was reached, unless
    /// `normalize_by_rounds_played` is set.
    pub fn run<B: Board>(
        &self,
        state: &NodeState<B>,
        perspective: PlayerId,
        rng: &mut ChaCha20Rng,
    ) -> Result<RolloutResult, BoardError> {
        let mut board = state.board.snapshot()?;

        let mut score = raw_score(&board, perspective);
        if let Some(mv) = &state.initiating_move {
            score += move_score(&board, mv);
        }

        let mut rounds_played = 0;
        for _ in 0..self.depth {
            let Some(mv) = board.random_legal_move(rng) else {
                break;
            };
            let mover = board.current_player();
            board.apply_move(&mv);
            rounds_played += 1;

            if mover == perspective {
                score += raw_score(&board, perspective) + move_score(&board, &mv);
            }
            if !board.is_running() {
                break;
            }
        }

        let divisor = if self.normalize_by_rounds_played {
            rounds_played.max(1)
        } else {
            self.depth
        };

        Ok(RolloutResult {
            score: score / divisor as f64,
            rounds_played,
        })
    }
}

/// Decaying series over even rollout rounds: `sum(discount^i for i in 0, 2, .. <= depth)`.
pub fn discounted_horizon(depth: u32, discount: f64) -> f64 {
    (0..=depth).step_by(2).map(|i| discount.powi(i as i32)).sum()
}
