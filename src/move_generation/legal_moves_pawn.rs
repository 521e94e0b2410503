use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_shared::enemy_piece_on;
use crate::moves::chess_move::Move;

/// Pseudo-legal pawn moves from `from`: pushes, double push from the start
/// row, diagonal captures and en passant. Moves landing on the last row are
/// queen-promotion templates; the host may swap the piece before applying.
pub fn generate_pawn_moves(game_state: &GameState, from: Position, pawn: Piece, out: &mut Vec<Move>) {
    let board = &game_state.board;
    let side = pawn.color;
    let forward = side.pawn_direction();
    let promotion_row = side.promotion_row();

    if let Some(to) = from.offset(0, forward).filter(|to| board.is_empty_at(*to)) {
        out.push(promotion_aware(Move::new(from, to, pawn, None), promotion_row));

        if from.y == side.pawn_start_row() {
            if let Some(jump) = from.offset(0, 2 * forward).filter(|to| board.is_empty_at(*to)) {
                out.push(Move {
                    is_double_pawn_push: true,
                    ..Move::new(from, jump, pawn, None)
                });
            }
        }
    }

    for dx in [-1i8, 1i8] {
        let Some(to) = from.offset(dx, forward) else {
            continue;
        };

        if let Some(target) = enemy_piece_on(board, side, to) {
            out.push(promotion_aware(Move::new(from, to, pawn, Some(target)), promotion_row));
        }

        if game_state.en_passant_target == Some(to) {
            // The victim sits beside us, on the file we capture towards.
            let victim = Position::new(to.x, from.y);
            if let Some(captured) = enemy_piece_on(board, side, victim)
                .filter(|piece| piece.kind == PieceKind::Pawn)
            {
                out.push(Move {
                    is_en_passant: true,
                    ..Move::new(from, to, pawn, Some(captured))
                });
            }
        }
    }
}

#[inline]
fn promotion_aware(mv: Move, promotion_row: u8) -> Move {
    if mv.to.y == promotion_row {
        Move {
            promotion: Some(PieceKind::Queen),
            ..mv
        }
    } else {
        mv
    }
}
