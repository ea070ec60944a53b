//! Deterministic board for tests and benchmarks.
//!
//! `ScriptedBoard` offers the same fixed set of moves every turn. Each move
//! awards a scripted number of points to the player making it, building a town
//! moves that player onto the town's intersection, and turns rotate through
//! the players. The game ends after a turn limit or when someone reaches the
//! winning point total.

use std::collections::HashMap;

use crate::board::{Board, BoardError, Field, Move, PlayerId};

/// Scripted board implementing [`Board`].
#[derive(Debug, Clone)]
pub struct ScriptedBoard {
    points: Vec<u32>,
    positions: Vec<Option<usize>>,
    current: PlayerId,
    turn: u32,
    max_turns: u32,
    winning_points: u32,
    moves: Vec<(Move, u32)>,
    fields: HashMap<usize, Vec<Field>>,
    best_initial: Option<Move>,
    fail_snapshots: bool,
}

impl ScriptedBoard {
    /// Create a running board with `num_players` players and no moves.
    pub fn new(num_players: usize) -> Self {
        Self {
            points: vec![0; num_players],
            positions: vec![None; num_players],
            current: 0,
            turn: 0,
            max_turns: u32::MAX,
            winning_points: u32::MAX,
            moves: Vec::new(),
            fields: HashMap::new(),
            best_initial: None,
            fail_snapshots: false,
        }
    }

    /// Offer `mv` every turn; playing it awards `reward` points to the mover.
    pub fn with_move(mut self, mv: Move, reward: u32) -> Self {
        self.moves.push((mv, reward));
        self
    }

    /// Set the fields adjacent to an intersection.
    pub fn with_fields(mut self, intersection: usize, fields: Vec<Field>) -> Self {
        self.fields.insert(intersection, fields);
        self
    }

    pub fn with_points(mut self, points: Vec<u32>) -> Self {
        self.points = points;
        self
    }

    pub fn with_positions(mut self, positions: Vec<Option<usize>>) -> Self {
        self.positions = positions;
        self
    }

    pub fn with_current_player(mut self, player: PlayerId) -> Self {
        self.current = player;
        self
    }

    /// Set the turn counter. Turns at or beyond `max_turns` end the game.
    pub fn with_turn(mut self, turn: u32) -> Self {
        self.turn = turn;
        self
    }

    pub fn with_max_turns(mut self, max_turns: u32) -> Self {
        self.max_turns = max_turns;
        self
    }

    pub fn with_winning_points(mut self, points: u32) -> Self {
        self.winning_points = points;
        self
    }

    /// Override the opening move reported by [`Board::best_initial_move`].
    pub fn with_best_initial_move(mut self, mv: Move) -> Self {
        self.best_initial = Some(mv);
        self
    }

    /// Make every [`Board::snapshot`] call fail.
    pub fn with_failing_snapshots(mut self) -> Self {
        self.fail_snapshots = true;
        self
    }

    fn reward(&self, mv: &Move) -> u32 {
        self.moves
            .iter()
            .find(|(m, _)| m == mv)
            .map_or(0, |(_, reward)| *reward)
    }
}

impl Board for ScriptedBoard {
    fn current_player(&self) -> PlayerId {
        self.current
    }

    fn turn_count(&self) -> u32 {
        self.turn
    }

    fn legal_moves(&self) -> Vec<Move> {
        if !self.is_running() {
            return Vec::new();
        }
        self.moves.iter().map(|(mv, _)| *mv).collect()
    }

    fn is_running(&self) -> bool {
        self.turn < self.max_turns && self.points.iter().all(|&p| p < self.winning_points)
    }

    fn apply_move(&mut self, mv: &Move) {
        let mover = self.current;
        self.points[mover] += self.reward(mv);
        if let Move::BuildTown { target } = *mv {
            self.positions[mover] = Some(target);
        }
        self.turn += 1;
        self.current = (self.current + 1) % self.points.len();
    }

    fn points(&self, player: PlayerId) -> u32 {
        self.points.get(player).copied().unwrap_or(0)
    }

    fn adjacent_fields(&self, intersection: usize) -> &[Field] {
        self.fields
            .get(&intersection)
            .map_or(&[][..], |fields| fields.as_slice())
    }

    fn current_player_position(&self) -> Option<usize> {
        self.positions.get(self.current).copied().flatten()
    }

    fn best_initial_move(&self) -> Option<Move> {
        self.best_initial
            .or_else(|| crate::heuristic::best_opening_move(self))
    }

    fn snapshot(&self) -> Result<Self, BoardError> {
        if self.fail_snapshots {
            return Err(BoardError::SnapshotFailed(
                "scripted snapshot failure".to_string(),
            ));
        }
        Ok(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_rotation_and_rewards() {
        let mut board = ScriptedBoard::new(3).with_move(Move::UpgradeTown { target: 0 }, 2);

        board.apply_move(&Move::UpgradeTown { target: 0 });
        board.apply_move(&Move::UpgradeTown { target: 0 });

        assert_eq!(board.points(0), 2);
        assert_eq!(board.points(1), 2);
        assert_eq!(board.points(2), 0);
        assert_eq!(board.current_player(), 2);
        assert_eq!(board.turn_count(), 2);
    }

    #[test]
    fn test_game_ends_at_turn_limit() {
        let mut board = ScriptedBoard::new(2)
            .with_move(Move::BuildTown { target: 0 }, 0)
            .with_max_turns(1);

        assert!(board.is_running());
        board.apply_move(&Move::BuildTown { target: 0 });
        assert!(!board.is_running());
        assert!(board.legal_moves().is_empty());
    }

    #[test]
    fn test_game_ends_at_winning_points() {
        let mut board = ScriptedBoard::new(2)
            .with_move(Move::UpgradeTown { target: 0 }, 5)
            .with_winning_points(5);

        board.apply_move(&Move::UpgradeTown { target: 0 });
        assert!(!board.is_running());
    }

    #[test]
    fn test_build_town_moves_player() {
        let mut board = ScriptedBoard::new(2).with_move(Move::BuildTown { target: 4 }, 0);
        board.apply_move(&Move::BuildTown { target: 4 });
        // Player 1 is now to move and has no position yet
        assert_eq!(board.current_player_position(), None);
        board = board.with_current_player(0);
        assert_eq!(board.current_player_position(), Some(4));
    }

    #[test]
    fn test_failing_snapshot() {
        let board = ScriptedBoard::new(2).with_failing_snapshots();
        assert!(board.snapshot().is_err());
        assert!(ScriptedBoard::new(2).snapshot().is_ok());
    }
}
