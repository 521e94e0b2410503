//! Pseudo-legal rook move generation.
//!
//! Ray-casts along the rook directions from one square. Self-check is
//! filtered later by the legal move generator.

use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_shared::push_slide_moves;
use crate::moves::chess_move::Move;
use crate::moves::movement_offsets::ROOK_DIRECTIONS;

pub fn generate_rook_moves(game_state: &GameState, from: Position, rook: Piece, out: &mut Vec<Move>) {
    push_slide_moves(&game_state.board, from, rook, &ROOK_DIRECTIONS, out);
}

#[cfg(test)]
mod tests {
    use super::generate_rook_moves;
    use crate::game_state::game_state::GameState;
    use crate::utils::algebraic::algebraic_to_position;

    #[test]
    fn rays_stop_at_blockers() {
        let game = GameState::from_fen("4k3/8/8/3p4/8/8/3R1P2/4K3 w - - 0 1").expect("FEN should parse");
        let from = algebraic_to_position("d2").expect("d2");
        let rook = game.board.piece_at(from).expect("rook on d2");

        let mut moves = Vec::new();
        generate_rook_moves(&game, from, rook, &mut moves);

        // Up: d3, d4, d5 (capture). Down: d1. Left: c2, b2, a2. Right: e2.
        assert_eq!(moves.len(), 8);
        assert_eq!(moves.iter().filter(|m| m.is_capture()).count(), 1);
    }
}
