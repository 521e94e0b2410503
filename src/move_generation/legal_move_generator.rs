//! Full legal move generation pipeline.
//!
//! Phase one asks the per-piece generators for pseudo-legal moves. Phase two
//! applies each candidate to a scratch state and drops it if the mover's own
//! king is left in check, which covers pins, walking into check and
//! ignoring an existing check in one place.

use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::moves::chess_move::Move;

/// Pseudo-legal moves of the piece on `from`, whoever it belongs to.
pub fn pseudo_legal_moves_from(game_state: &GameState, from: Position, out: &mut Vec<Move>) {
    let Some(piece) = game_state.board.piece_at(from) else {
        return;
    };

    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(game_state, from, piece, out),
        PieceKind::Knight => generate_knight_moves(game_state, from, piece, out),
        PieceKind::Bishop => generate_bishop_moves(game_state, from, piece, out),
        PieceKind::Rook => generate_rook_moves(game_state, from, piece, out),
        PieceKind::Queen => generate_queen_moves(game_state, from, piece, out),
        PieceKind::King => generate_king_moves(game_state, from, piece, out),
    }
}

#[inline]
fn leaves_king_safe(game_state: &GameState, mv: &Move, color: Color) -> bool {
    let next = apply_move(game_state, mv);
    !is_king_in_check(&next.board, color)
}

/// Every legal move for `color`, in board scan order.
pub fn legal_moves(game_state: &GameState, color: Color) -> Vec<Move> {
    let mut pseudo = Vec::<Move>::with_capacity(64);
    for (from, _) in game_state.board.pieces_of(color) {
        pseudo_legal_moves_from(game_state, from, &mut pseudo);
    }

    pseudo.retain(|mv| leaves_king_safe(game_state, mv, color));
    pseudo
}

/// Legal moves starting on `from`. Empty when the square is vacant or holds
/// a piece of the side not to move.
pub fn legal_moves_for_square(game_state: &GameState, from: Position) -> Vec<Move> {
    let Some(piece) = game_state.board.piece_at(from) else {
        return Vec::new();
    };
    if piece.color != game_state.side_to_move {
        return Vec::new();
    }

    let mut moves = Vec::new();
    pseudo_legal_moves_from(game_state, from, &mut moves);
    moves.retain(|mv| leaves_king_safe(game_state, mv, piece.color));
    moves
}

/// Cheaper than `!legal_moves(..).is_empty()`: stops at the first legal move.
pub fn has_any_legal_move(game_state: &GameState, color: Color) -> bool {
    let mut pseudo = Vec::<Move>::with_capacity(32);
    for (from, _) in game_state.board.pieces_of(color) {
        pseudo.clear();
        pseudo_legal_moves_from(game_state, from, &mut pseudo);
        if pseudo.iter().any(|mv| leaves_king_safe(game_state, mv, color)) {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::algebraic::algebraic_to_position;

    fn sq(name: &str) -> Position {
        algebraic_to_position(name).expect("test square should parse")
    }

    #[test]
    fn starting_position_has_twenty_moves_each_side() {
        let game = GameState::new_game();
        assert_eq!(legal_moves(&game, Color::White).len(), 20);
        assert_eq!(legal_moves(&game, Color::Black).len(), 20);
        assert!(has_any_legal_move(&game, Color::White));
    }

    #[test]
    fn every_legal_move_leaves_own_king_safe() {
        let fens = [
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
            "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
            "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8",
        ];
        for fen in fens {
            let game = GameState::from_fen(fen).expect("FEN should parse");
            for mv in legal_moves(&game, game.side_to_move) {
                let next = apply_move(&game, &mv);
                assert!(!is_king_in_check(&next.board, game.side_to_move), "{fen}: {mv:?}");
            }
        }
    }

    #[test]
    fn pinned_piece_cannot_leave_the_line() {
        // Bishop on e2 is pinned by the rook on e8.
        let game = GameState::from_fen("4r1k1/8/8/8/8/8/4B3/4K3 w - - 0 1").expect("FEN should parse");
        assert!(legal_moves_for_square(&game, sq("e2")).is_empty());
        assert_eq!(legal_moves_for_square(&game, sq("e1")).len(), 4);
    }

    #[test]
    fn square_query_respects_side_to_move() {
        let game = GameState::new_game();
        assert_eq!(legal_moves_for_square(&game, sq("g1")).len(), 2);
        assert!(legal_moves_for_square(&game, sq("g8")).is_empty());
        assert!(legal_moves_for_square(&game, sq("e4")).is_empty());
    }

    #[test]
    fn mated_side_has_no_moves() {
        let game = GameState::from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3")
            .expect("fool's mate FEN should parse");
        assert!(legal_moves(&game, Color::White).is_empty());
        assert!(!has_any_legal_move(&game, Color::White));
        assert!(is_king_in_check(&game.board, Color::White));
    }

    #[test]
    fn en_passant_that_exposes_king_is_rejected() {
        // Capturing on d6 would clear the fifth rank between h5 rook and a5 king.
        let game = GameState::from_fen("8/8/8/K2pP2r/8/8/8/7k w - d6 0 2").expect("FEN should parse");
        assert!(legal_moves_for_square(&game, sq("e5"))
            .iter()
            .all(|m| !m.is_en_passant));
    }
}
