//! Board collaborator contract.
//!
//! The search never implements game rules itself. Everything it needs from the
//! game (whose turn it is, which moves are legal, how a move changes the board,
//! how many points a player holds and what the map looks like around an
//! intersection) comes through the [`Board`] trait.

use rand::seq::SliceRandom;
use rand_chacha::ChaCha20Rng;
use thiserror::Error;

use crate::heuristic::best_opening_move;

/// Index of a player in turn order.
pub type PlayerId = usize;

/// Errors a board implementation can report to the search.
#[derive(Debug, Error)]
pub enum BoardError {
    #[error("Board snapshot failed: {0}")]
    SnapshotFailed(String),
}

/// Resource produced by a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Wood,
    Clay,
    Wheat,
    Sheep,
    Ore,
    Desert,
}

/// A field (tile) adjacent to an intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Field {
    /// Production weight of the field, higher is better.
    pub weight: f64,
    pub resource: Resource,
}

impl Field {
    pub fn new(weight: f64, resource: Resource) -> Self {
        Self { weight, resource }
    }
}

/// A move in the game.
///
/// Only the building moves matter to the scoring heuristic; everything else
/// (trades, dice, ending the turn, ...) is carried opaquely as [`Move::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    /// Place a new town. `target` is the intersection being built on.
    BuildTown { target: usize },
    /// Upgrade an existing town at `target`.
    UpgradeTown { target: usize },
    /// Build a road from `target` towards `end`.
    BuildRoad { target: usize, end: usize },
    /// Any move the heuristic does not score.
    Other {
        tag: u16,
        index1: Option<usize>,
        index2: Option<usize>,
    },
}

impl Move {
    /// Intersection the move is aimed at, if any.
    pub fn target(&self) -> Option<usize> {
        match *self {
            Move::BuildTown { target }
            | Move::UpgradeTown { target }
            | Move::BuildRoad { target, .. } => Some(target),
            Move::Other { index1, .. } => index1,
        }
    }
}

/// Game board as seen by the search.
///
/// `Clone` must produce a deep copy: mutating the clone through
/// [`Board::apply_move`] must never be observable on the original.
pub trait Board: Clone + std::fmt::Debug {
    /// Player whose turn it is.
    fn current_player(&self) -> PlayerId;

    /// Number of turns played so far.
    fn turn_count(&self) -> u32;

    /// All legal moves for the current player.
    fn legal_moves(&self) -> Vec<Move>;

    /// Whether the game is still in progress.
    fn is_running(&self) -> bool;

    /// Apply a move in place.
    fn apply_move(&mut self, mv: &Move);

    /// Point total of `player`.
    fn points(&self, player: PlayerId) -> u32;

    /// Fields adjacent to an intersection. Unknown intersections have none.
    fn adjacent_fields(&self, intersection: usize) -> &[Field];

    /// Intersection the current player is positioned on, if any.
    fn current_player_position(&self) -> Option<usize>;

    /// Best move for the opening turns, used instead of tree search.
    ///
    /// Defaults to the legal move with the highest opening score, the first
    /// one winning ties.
    fn best_initial_move(&self) -> Option<Move> {
        best_opening_move(self)
    }

    /// Draw a uniformly random legal move. `None` when there are no moves.
    fn random_legal_move(&self, rng: &mut ChaCha20Rng) -> Option<Move> {
        self.legal_moves().choose(rng).copied()
    }

    /// Every successor state reachable in one move, paired with that move.
    ///
    /// Order matters: it becomes the expansion order of the search tree.
    fn successors(&self) -> Vec<(Move, Self)> {
        self.legal_moves()
            .into_iter()
            .map(|mv| {
                let mut next = self.clone();
                next.apply_move(&mv);
                (mv, next)
            })
            .collect()
    }

    /// Deep copy used by rollouts.
    fn snapshot(&self) -> Result<Self, BoardError> {
        Ok(self.clone())
    }
}
