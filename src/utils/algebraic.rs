//! Square-name conversions.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and internal
//! `Position`s, where row 0 is rank 8.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::Position;

/// Convert a square name (for example: "e4") to a position.
#[inline]
pub fn algebraic_to_position(square: &str) -> Result<Position, ChessErrors> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessErrors::InvalidAlgebraicString(square.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessErrors::InvalidAlgebraicString(square.to_owned()));
    }

    Ok(Position::new(file - b'a', b'8' - rank))
}

/// Convert a position to its square name (for example: "e4").
#[inline]
pub fn position_to_algebraic(position: Position) -> Result<String, ChessErrors> {
    if !position.is_on_board() {
        return Err(ChessErrors::InvalidFileOrRank(position.x, position.y));
    }

    let file_char = char::from(b'a' + position.x);
    let rank_char = char::from(b'8' - position.y);
    Ok(format!("{file_char}{rank_char}"))
}
