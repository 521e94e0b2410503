use crate::game_state::game_state::GameState;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::push_step_moves;
use crate::moves::chess_move::Move;
use crate::moves::movement_offsets::KNIGHT_OFFSETS;

pub fn generate_knight_moves(game_state: &GameState, from: Position, knight: Piece, out: &mut Vec<Move>) {
    push_step_moves(&game_state.board, from, knight, &KNIGHT_OFFSETS, out);
}

#[cfg(test)]
mod tests {
    use super::generate_knight_moves;
    use crate::game_state::game_state::GameState;
    use crate::utils::algebraic::algebraic_to_position;

    #[test]
    fn corner_knight_skips_own_pieces() {
        let game = GameState::from_fen("4k3/8/8/8/8/1p6/2P5/N3K3 w - - 0 1").expect("FEN should parse");
        let from = algebraic_to_position("a1").expect("a1");
        let knight = game.board.piece_at(from).expect("knight on a1");

        let mut moves = Vec::new();
        generate_knight_moves(&game, from, knight, &mut moves);

        // c2 holds a white pawn; b3 holds a black one.
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].to, algebraic_to_position("b3").expect("b3"));
        assert!(moves[0].is_capture());
    }
}
