//! Move text: coordinate notation for input and the move-log format shown
//! to players.
//!
//! Coordinate notation is `e2e4`, with a trailing piece letter for
//! promotions (`e7e8n`). The log format spells out origin and destination
//! with `-` or `x` between them (`Ng1-f3`, `e5xd6`, `a7-a8=Q`) and appends
//! `+` for check or `#` for mate.

use std::fmt;

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::{has_any_legal_move, legal_moves_for_square};
use crate::moves::chess_move::Move;
use crate::utils::algebraic::{algebraic_to_position, position_to_algebraic};

pub fn to_coordinate_notation(mv: &Move) -> Result<String, ChessErrors> {
    let mut out = position_to_algebraic(mv.from)?;
    out.push_str(&position_to_algebraic(mv.to)?);
    if let Some(promotion) = mv.promotion {
        out.push(promotion.letter().to_ascii_lowercase());
    }
    Ok(out)
}

/// Resolve coordinate notation against the legal moves of `game_state`.
///
/// A promotion letter picks the piece; without one a promotion defaults to
/// the generated queen template.
pub fn parse_coordinate_move(game_state: &GameState, text: &str) -> Result<Move, ChessErrors> {
    let text = text.trim();
    if !text.is_ascii() || !(4..=5).contains(&text.len()) {
        return Err(ChessErrors::InvalidMoveNotation(text.to_owned()));
    }

    let from = algebraic_to_position(&text[0..2])?;
    let to = algebraic_to_position(&text[2..4])?;
    let promotion = match text[4..].chars().next() {
        None => None,
        Some(ch) => match PieceKind::from_letter(ch) {
            Some(kind @ (PieceKind::Knight | PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen)) => {
                Some(kind)
            }
            _ => return Err(ChessErrors::InvalidMoveNotation(text.to_owned())),
        },
    };

    let mv = legal_moves_for_square(game_state, from)
        .into_iter()
        .find(|mv| mv.to == to)
        .ok_or_else(|| ChessErrors::IllegalMove(text.to_owned()))?;

    match (mv.is_promotion(), promotion) {
        (true, Some(kind)) => Ok(mv.with_promotion(kind)),
        (true, None) => Ok(mv),
        (false, None) => Ok(mv),
        (false, Some(_)) => Err(ChessErrors::IllegalMove(text.to_owned())),
    }
}

/// Piece a move actually removes from `game_state`'s board.
pub fn captured_piece(game_state: &GameState, mv: &Move) -> Option<Piece> {
    let square = if mv.is_en_passant {
        Position::new(mv.to.x, mv.from.y)
    } else {
        mv.to
    };
    game_state
        .board
        .piece_at(square)
        .filter(|piece| piece.color != mv.piece.color)
}

/// Move-log entry for `mv` played from `game_state`, with check/mate suffix.
pub fn describe_move(game_state: &GameState, mv: &Move) -> Result<String, ChessErrors> {
    let mut out = String::new();
    if mv.piece.kind != PieceKind::Pawn {
        out.push(mv.piece.kind.letter());
    }
    out.push_str(&position_to_algebraic(mv.from)?);
    out.push(if mv.is_capture() || mv.is_en_passant { 'x' } else { '-' });
    out.push_str(&position_to_algebraic(mv.to)?);
    if let Some(promotion) = mv.promotion {
        out.push('=');
        out.push(promotion.letter());
    }

    let next = apply_move(game_state, mv);
    let opponent = next.side_to_move;
    if is_king_in_check(&next.board, opponent) {
        out.push(if has_any_legal_move(&next, opponent) { '+' } else { '#' });
    }

    Ok(out)
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = to_coordinate_notation(self).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}
