//! Scoring heuristic used by rollouts.
//!
//! A rollout reward is the perspective player's point total plus a small bonus
//! for building moves that sit next to productive fields. Roads are weighted
//! four times lighter than towns.

use crate::board::{Board, Field, Move, PlayerId, Resource};

/// Divisor applied to town building and upgrading bonuses.
pub const TOWN_DIVISOR: f64 = 100.0;

/// Divisor applied to road building bonuses.
pub const ROAD_DIVISOR: f64 = 400.0;

/// Multiplier applied to the opening-move score.
pub const OPENING_SCALE: f64 = 100.0;

/// Current point total of `player`.
#[inline]
pub fn raw_score<B: Board>(board: &B, player: PlayerId) -> f64 {
    board.points(player) as f64
}

/// Bonus for a move, based on the fields it touches.
///
/// `BuildTown` looks at the acting player's current position, while
/// `UpgradeTown` and `BuildRoad` look at the move's own target.
pub fn move_score<B: Board>(board: &B, mv: &Move) -> f64 {
    match *mv {
        Move::BuildTown { .. } => board
            .current_player_position()
            .map_or(0.0, |pos| field_weight(board.adjacent_fields(pos)) / TOWN_DIVISOR),
        Move::UpgradeTown { target } => field_weight(board.adjacent_fields(target)) / TOWN_DIVISOR,
        Move::BuildRoad { target, .. } => field_weight(board.adjacent_fields(target)) / ROAD_DIVISOR,
        Move::Other { .. } => 0.0,
    }
}

/// Score for choosing an opening placement.
///
/// Wood and clay count four times, wheat and sheep three times, anything else
/// not at all.
pub fn opening_move_score<B: Board>(board: &B, mv: &Move) -> f64 {
    let Some(target) = mv.target() else {
        return 0.0;
    };

    let score: f64 = board
        .adjacent_fields(target)
        .iter()
        .map(|f| f.weight * opening_multiplier(f.resource))
        .sum();
    score * OPENING_SCALE
}

/// Legal move with the highest opening score, the first one winning ties.
pub fn best_opening_move<B: Board>(board: &B) -> Option<Move> {
    let mut best: Option<(Move, f64)> = None;
    for mv in board.legal_moves() {
        let score = opening_move_score(board, &mv);
        if best.map_or(true, |(_, s)| score > s) {
            best = Some((mv, score));
        }
    }
    best.map(|(mv, _)| mv)
}

#[inline]
fn opening_multiplier(resource: Resource) -> f64 {
    match resource {
        Resource::Wood | Resource::Clay => 4.0,
        Resource::Wheat | Resource::Sheep => 3.0,
        Resource::Ore | Resource::Desert => 0.0,
    }
}

#[inline]
fn field_weight(fields: &[Field]) -> f64 {
    fields.iter().map(|f| f.weight).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedBoard;

    fn board() -> ScriptedBoard {
        ScriptedBoard::new(2)
            .with_fields(
                0,
                vec![
                    Field::new(4.0, Resource::Wood),
                    Field::new(3.0, Resource::Ore),
                ],
            )
            .with_fields(
                1,
                vec![
                    Field::new(5.0, Resource::Wheat),
                    Field::new(1.0, Resource::Desert),
                    Field::new(2.0, Resource::Clay),
                ],
            )
    }

    #[test]
    fn test_raw_score_is_point_total() {
        let board = board().with_points(vec![3, 7]);
        assert!((raw_score(&board, 0) - 3.0).abs() < 1e-9);
        assert!((raw_score(&board, 1) - 7.0).abs() < 1e-9);
    }

    #[test]
    fn test_build_town_uses_current_position() {
        let board = board().with_positions(vec![Some(1), None]);
        // Target is ignored, the acting player's position (1) counts: 5+1+2 = 8
        let score = move_score(&board, &Move::BuildTown { target: 0 });
        assert!((score - 0.08).abs() < 1e-9);
    }

    #[test]
    fn test_build_town_without_position_scores_zero() {
        let board = board();
        let score = move_score(&board, &Move::BuildTown { target: 0 });
        assert!(score.abs() < 1e-9);
    }

    #[test]
    fn test_upgrade_and_road_use_target() {
        let board = board().with_positions(vec![Some(1), None]);

        let upgrade = move_score(&board, &Move::UpgradeTown { target: 0 });
        assert!((upgrade - 7.0 / 100.0).abs() < 1e-9);

        let road = move_score(&board, &Move::BuildRoad { target: 0, end: 1 });
        assert!((road - 7.0 / 400.0).abs() < 1e-9);

        // Same fields, roads are worth a quarter of an upgrade
        assert!((upgrade - 4.0 * road).abs() < 1e-9);
    }

    #[test]
    fn test_other_moves_score_zero() {
        let board = board();
        let mv = Move::Other {
            tag: 9,
            index1: Some(0),
            index2: None,
        };
        assert!(move_score(&board, &mv).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_intersection_scores_zero() {
        let board = board();
        assert!(move_score(&board, &Move::UpgradeTown { target: 42 }).abs() < 1e-9);
    }

    #[test]
    fn test_opening_move_score() {
        let board = board();

        // 4*4 (wood) + 3*0 (ore) = 16, scaled by 100
        let at0 = opening_move_score(&board, &Move::BuildTown { target: 0 });
        assert!((at0 - 1600.0).abs() < 1e-9);

        // 5*3 (wheat) + 1*0 (desert) + 2*4 (clay) = 23, scaled by 100
        let at1 = opening_move_score(&board, &Move::BuildRoad { target: 1, end: 0 });
        assert!((at1 - 2300.0).abs() < 1e-9);

        let pass = Move::Other {
            tag: 0,
            index1: None,
            index2: None,
        };
        assert!(opening_move_score(&board, &pass).abs() < 1e-9);
    }
}
