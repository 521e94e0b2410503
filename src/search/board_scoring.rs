//! Pluggable board evaluation.
//!
//! Search stays independent of the heuristic by going through the
//! `BoardScorer` trait. Scores are always from White's point of view:
//! positive favours White, negative favours Black.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;

pub trait BoardScorer: Send + Sync {
    /// Static score of `board`, White-positive.
    fn score(&self, board: &Board) -> i32;
}

#[inline]
pub const fn piece_value(piece: PieceKind) -> i32 {
    match piece {
        PieceKind::Pawn => 100,
        PieceKind::Knight => 320,
        PieceKind::Bishop => 330,
        PieceKind::Rook => 500,
        PieceKind::Queen => 900,
        PieceKind::King => 20000,
    }
}

/// Material plus small placement bonuses: pawn advancement, minor-piece
/// centralisation and a light rook advancement term.
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionalScorer;

impl PositionalScorer {
    /// Placement bonus of a piece standing on `at`.
    pub fn placement_bonus(piece: Piece, at: Position) -> i32 {
        let x = i32::from(at.x);
        let y = i32::from(at.y);
        match piece.kind {
            PieceKind::Pawn => match piece.color {
                Color::White => (6 - y) * 8,
                Color::Black => (y - 1) * 8,
            },
            PieceKind::Knight | PieceKind::Bishop => {
                // Manhattan distance to the centre point (3.5, 3.5), scaled by 8.
                let scaled_distance = (28 - 8 * x).abs() + (28 - 8 * y).abs();
                (32 - scaled_distance).max(0)
            }
            PieceKind::Rook => match piece.color {
                Color::White => (7 - y) * 2,
                Color::Black => y * 2,
            },
            PieceKind::Queen | PieceKind::King => 0,
        }
    }
}

impl BoardScorer for PositionalScorer {
    fn score(&self, board: &Board) -> i32 {
        board
            .occupied()
            .map(|(at, piece)| {
                let value = piece_value(piece.kind) + Self::placement_bonus(piece, at);
                match piece.color {
                    Color::White => value,
                    Color::Black => -value,
                }
            })
            .sum()
    }
}

/// Bare material count, handy as a baseline in tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl BoardScorer for MaterialScorer {
    fn score(&self, board: &Board) -> i32 {
        board
            .occupied()
            .map(|(_, piece)| match piece.color {
                Color::White => piece_value(piece.kind),
                Color::Black => -piece_value(piece.kind),
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::game_state::GameState;

    #[test]
    fn starting_position_is_balanced() {
        let game = GameState::new_game();
        assert_eq!(PositionalScorer.score(&game.board), 0);
        assert_eq!(MaterialScorer.score(&game.board), 0);
    }

    #[test]
    fn extra_queen_dominates_placement() {
        let game = GameState::from_fen("4k3/8/8/8/8/8/8/3QK3 w - - 0 1").expect("FEN should parse");
        assert_eq!(PositionalScorer.score(&game.board), 900);

        let black = GameState::from_fen("3qk3/8/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        assert_eq!(PositionalScorer.score(&black.board), -900);
    }

    #[test]
    fn placement_bonuses() {
        let knight = Piece::new(PieceId(0), PieceKind::Knight, Color::White);
        assert_eq!(PositionalScorer::placement_bonus(knight, Position::new(3, 3)), 24);
        assert_eq!(PositionalScorer::placement_bonus(knight, Position::new(0, 0)), 0);

        let pawn = Piece::new(PieceId(1), PieceKind::Pawn, Color::White);
        assert_eq!(PositionalScorer::placement_bonus(pawn, Position::new(4, 6)), 0);
        assert_eq!(PositionalScorer::placement_bonus(pawn, Position::new(4, 4)), 16);

        let black_pawn = Piece::new(PieceId(2), PieceKind::Pawn, Color::Black);
        assert_eq!(PositionalScorer::placement_bonus(black_pawn, Position::new(4, 3)), 16);

        let rook = Piece::new(PieceId(3), PieceKind::Rook, Color::Black);
        assert_eq!(PositionalScorer::placement_bonus(rook, Position::new(0, 0)), 0);
        assert_eq!(PositionalScorer::placement_bonus(rook, Position::new(0, 6)), 12);
    }
}
