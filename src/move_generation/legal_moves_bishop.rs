//! Pseudo-legal bishop move generation.
//!
//! Ray-casts along the bishop directions from one square. Self-check is
//! filtered later by the legal move generator.

use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_shared::push_slide_moves;
use crate::moves::chess_move::Move;
use crate::moves::movement_offsets::BISHOP_DIRECTIONS;

pub fn generate_bishop_moves(game_state: &GameState, from: Position, bishop: Piece, out: &mut Vec<Move>) {
    push_slide_moves(&game_state.board, from, bishop, &BISHOP_DIRECTIONS, out);
}
