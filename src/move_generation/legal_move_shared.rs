use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::moves::chess_move::Move;

/// Enemy piece on `square` from the point of view of `color`, if any.
#[inline]
pub fn enemy_piece_on(board: &Board, color: Color, square: Position) -> Option<Piece> {
    board.piece_at(square).filter(|piece| piece.color != color)
}

/// Single-step movers (knight, king): each offset lands on an empty or
/// enemy-occupied square.
pub fn push_step_moves(
    board: &Board,
    from: Position,
    piece: Piece,
    offsets: &[(i8, i8)],
    out: &mut Vec<Move>,
) {
    for &(dx, dy) in offsets {
        let Some(to) = from.offset(dx, dy) else {
            continue;
        };
        match board.piece_at(to) {
            None => out.push(Move::new(from, to, piece, None)),
            Some(target) if target.color != piece.color => {
                out.push(Move::new(from, to, piece, Some(target)))
            }
            Some(_) => {}
        }
    }
}

/// Sliders (bishop, rook, queen): walk each ray until the first piece,
/// which is included only when it can be captured.
pub fn push_slide_moves(
    board: &Board,
    from: Position,
    piece: Piece,
    directions: &[(i8, i8)],
    out: &mut Vec<Move>,
) {
    for &(dx, dy) in directions {
        let mut current = from.offset(dx, dy);
        while let Some(to) = current {
            match board.piece_at(to) {
                None => out.push(Move::new(from, to, piece, None)),
                Some(target) => {
                    if target.color != piece.color {
                        out.push(Move::new(from, to, piece, Some(target)));
                    }
                    break;
                }
            }
            current = to.offset(dx, dy);
        }
    }
}
