//! Raw geometric attack detection.
//!
//! Pins and turn order are ignored on purpose here: the question is only
//! whether some piece of `attacker_color` could capture on the square. Check
//! detection and castling-path safety are both built on it.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::moves::movement_offsets::{
    BISHOP_DIRECTIONS, KING_OFFSETS, KNIGHT_OFFSETS, ROOK_DIRECTIONS,
};

#[inline]
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    let Some(king) = board.king_position(color) else {
        return false;
    };
    is_square_attacked(board, king, color.opposite())
}

pub fn is_square_attacked(board: &Board, square: Position, attacker_color: Color) -> bool {
    let is_attacker = |position: Option<Position>, kinds: &[PieceKind]| {
        position
            .and_then(|p| board.piece_at(p))
            .is_some_and(|piece| piece.color == attacker_color && kinds.contains(&piece.kind))
    };

    // A pawn attacks diagonally forward, so it sits one row behind the target
    // from its own point of view.
    let pawn_row = -attacker_color.pawn_direction();
    if [-1, 1]
        .into_iter()
        .any(|dx| is_attacker(square.offset(dx, pawn_row), &[PieceKind::Pawn]))
    {
        return true;
    }

    if KNIGHT_OFFSETS
        .iter()
        .any(|&(dx, dy)| is_attacker(square.offset(dx, dy), &[PieceKind::Knight]))
    {
        return true;
    }

    if BISHOP_DIRECTIONS.iter().any(|&direction| {
        is_attacker(
            first_piece_along(board, square, direction),
            &[PieceKind::Bishop, PieceKind::Queen],
        )
    }) {
        return true;
    }

    if ROOK_DIRECTIONS.iter().any(|&direction| {
        is_attacker(
            first_piece_along(board, square, direction),
            &[PieceKind::Rook, PieceKind::Queen],
        )
    }) {
        return true;
    }

    KING_OFFSETS
        .iter()
        .any(|&(dx, dy)| is_attacker(square.offset(dx, dy), &[PieceKind::King]))
}

/// First occupied square walking from `origin` (exclusive) along a ray.
fn first_piece_along(board: &Board, origin: Position, (dx, dy): (i8, i8)) -> Option<Position> {
    let mut current = origin.offset(dx, dy);
    while let Some(position) = current {
        if !board.is_empty_at(position) {
            return Some(position);
        }
        current = position.offset(dx, dy);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::game_state::GameState;
    use crate::utils::algebraic::algebraic_to_position;

    fn sq(name: &str) -> Position {
        algebraic_to_position(name).expect("test square should parse")
    }

    #[test]
    fn pawns_attack_diagonally_forward_only() {
        let game = GameState::from_fen("4k3/8/8/8/4P3/8/8/4K3 w - - 0 1").expect("FEN should parse");
        assert!(is_square_attacked(&game.board, sq("d5"), Color::White));
        assert!(is_square_attacked(&game.board, sq("f5"), Color::White));
        assert!(!is_square_attacked(&game.board, sq("e5"), Color::White));
        assert!(!is_square_attacked(&game.board, sq("d3"), Color::White));

        let black = GameState::from_fen("4k3/8/8/4p3/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        assert!(is_square_attacked(&black.board, sq("d4"), Color::Black));
        assert!(!is_square_attacked(&black.board, sq("d6"), Color::Black));
    }

    #[test]
    fn sliders_are_blocked_by_first_piece() {
        let game = GameState::from_fen("4k3/8/8/8/R2n3q/8/8/4K3 w - - 0 1").expect("FEN should parse");
        assert!(is_square_attacked(&game.board, sq("c4"), Color::White));
        assert!(is_square_attacked(&game.board, sq("d4"), Color::White));
        assert!(!is_square_attacked(&game.board, sq("e4"), Color::White));
        assert!(is_square_attacked(&game.board, sq("e4"), Color::Black));
        // Queen on h4 sees the e1 king along the diagonal.
        assert!(is_king_in_check(&game.board, Color::White));
    }

    #[test]
    fn knights_and_kings_attack_by_offset() {
        let game = GameState::from_fen("4k3/8/8/8/3N4/8/8/K7 w - - 0 1").expect("FEN should parse");
        assert!(is_square_attacked(&game.board, sq("e6"), Color::White));
        assert!(is_square_attacked(&game.board, sq("b3"), Color::White));
        assert!(!is_square_attacked(&game.board, sq("d5"), Color::White));
        assert!(is_square_attacked(&game.board, sq("b2"), Color::White));
        assert!(!is_king_in_check(&game.board, Color::Black));
    }

    #[test]
    fn missing_king_is_never_in_check() {
        let game = GameState::from_fen("8/8/8/8/8/8/8/4K2r w - - 0 1").expect("FEN should parse");
        assert!(is_king_in_check(&game.board, Color::White));
        assert!(!is_king_in_check(&game.board, Color::Black));
    }
}
