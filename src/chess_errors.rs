//! Errors used at the fallible edges of the engine.
//!
//! The rules core itself never fails: an empty move list, a `None` search
//! result, or an unchanged state are the only abnormal outcomes there. Text
//! parsing (FEN, coordinates, moves) and engine configuration do fail, and
//! they report through the single `ChessErrors` type defined here.

use thiserror::Error;

/// Unified error type for parsing and configuration failures.
///
/// Variants carry the offending token or string so callers can log or show
/// precise diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessErrors {
    /// A square name such as `e4` could not be parsed.
    #[error("invalid algebraic square: {0}")]
    InvalidAlgebraicString(String),

    /// Zero-based file/rank indices outside `0..=7`.
    #[error("file/rank out of bounds: ({0}, {1})")]
    InvalidFileOrRank(u8, u8),

    /// Unexpected character while parsing a FEN record.
    #[error("invalid FEN token '{0}'")]
    InvalidFENtoken(char),

    /// FEN record with malformed structure.
    ///
    /// Payload: a description of what was wrong.
    #[error("invalid FEN: {0}")]
    InvalidFENstring(String),

    /// A move string did not parse as coordinate notation (`e2e4`, `e7e8q`).
    #[error("invalid move notation: {0}")]
    InvalidMoveNotation(String),

    /// A well-formed move string that names no legal move in the position.
    #[error("illegal move in this position: {0}")]
    IllegalMove(String),

    /// An engine option name or value was rejected.
    #[error("invalid engine option {name}={value}")]
    InvalidOption { name: String, value: String },
}
