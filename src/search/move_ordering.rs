//! Cheap move-ordering heuristic.
//!
//! Ordering only changes how early alpha-beta can cut, never the value a
//! full-window search returns.

use crate::moves::chess_move::Move;
use crate::search::board_scoring::piece_value;

pub const CASTLE_ORDER_SCORE: i32 = 30;
pub const EN_PASSANT_ORDER_SCORE: i32 = 50;

/// Castles 30, en passant 50, other captures `100 + victim - attacker / 10`,
/// quiet moves 0.
#[inline]
pub fn move_order_score(mv: &Move) -> i32 {
    if mv.is_castle() {
        return CASTLE_ORDER_SCORE;
    }
    if mv.is_en_passant {
        return EN_PASSANT_ORDER_SCORE;
    }
    match mv.captured {
        Some(victim) => 100 + piece_value(victim.kind) - piece_value(mv.piece.kind) / 10,
        None => 0,
    }
}

/// Highest score first. The sort is stable, so equal scores keep their
/// generation order.
pub fn order_moves(moves: &mut [Move]) {
    moves.sort_by_key(|mv| std::cmp::Reverse(move_order_score(mv)));
}
