//! Pseudo-legal queen move generation.
//!
//! Ray-casts along the queen directions from one square. Self-check is
//! filtered later by the legal move generator.

use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_shared::push_slide_moves;
use crate::moves::chess_move::Move;
use crate::moves::movement_offsets::QUEEN_DIRECTIONS;

pub fn generate_queen_moves(game_state: &GameState, from: Position, queen: Piece, out: &mut Vec<Move>) {
    push_slide_moves(&game_state.board, from, queen, &QUEEN_DIRECTIONS, out);
}
