//! Pure state transition: `(state, move) -> new state`.
//!
//! The input state is never touched. A move whose moving piece is not on its
//! origin square is treated as stale and yields an unchanged copy.

use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::moves::chess_move::Move;

pub fn apply_move(game_state: &GameState, mv: &Move) -> GameState {
    let on_origin = game_state.board.piece_at(mv.from);
    let Some(moving) = on_origin.filter(|piece| piece.same_identity(&mv.piece)) else {
        return game_state.clone();
    };

    let mut next = game_state.clone();
    let board = &mut next.board;

    board.set(mv.from, None);

    let captured = if mv.is_en_passant {
        board.take(Position::new(mv.to.x, mv.from.y))
    } else {
        board.piece_at(mv.to)
    };

    let promotion = mv.promotion.filter(|_| moving.kind == PieceKind::Pawn);
    board.set(mv.to, Some(moving.moved(promotion)));

    if let Some(castle) = mv.castle {
        let row = moving.color.home_row();
        let rook = board.take(Position::new(castle.rook_home_file(), row));
        board.set(
            Position::new(castle.rook_target_file(), row),
            rook.map(|rook| rook.moved(None)),
        );
    }

    update_castling_rights(&mut next.castling_rights, mv, moving, captured);

    next.en_passant_target = if moving.kind == PieceKind::Pawn && mv.from.y.abs_diff(mv.to.y) == 2 {
        Some(Position::new(mv.from.x, (mv.from.y + mv.to.y) / 2))
    } else {
        None
    };

    if moving.kind == PieceKind::Pawn || captured.is_some() {
        next.halfmove_clock = 0;
    } else {
        next.halfmove_clock = next.halfmove_clock.saturating_add(1);
    }
    if game_state.side_to_move == Color::Black {
        next.fullmove_number = next.fullmove_number.saturating_add(1);
    }

    next.side_to_move = game_state.side_to_move.opposite();
    next.last_move = Some(*mv);

    next
}

fn update_castling_rights(
    rights: &mut CastlingRights,
    mv: &Move,
    moving: Piece,
    captured: Option<Piece>,
) {
    if moving.kind == PieceKind::King {
        rights.revoke_all(moving.color);
    }

    if moving.kind == PieceKind::Rook {
        if let Some(side) = corner_side(mv.from, moving.color) {
            rights.revoke(moving.color, side);
        }
    }

    // Capturing a rook on its original corner removes its owner's right.
    if let Some(victim) = captured.filter(|piece| piece.kind == PieceKind::Rook) {
        if let Some(side) = corner_side(mv.to, victim.color) {
            rights.revoke(victim.color, side);
        }
    }
}

/// Castling side whose rook starts on `square` for `color`.
fn corner_side(square: Position, color: Color) -> Option<CastleSide> {
    if square.y != color.home_row() {
        return None;
    }
    [CastleSide::Kingside, CastleSide::Queenside]
        .into_iter()
        .find(|side| side.rook_home_file() == square.x)
}
