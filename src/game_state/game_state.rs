//! Immutable-per-ply game state.
//!
//! `GameState` bundles the board with the auxiliary rule state: side to
//! move, castling rights, en-passant target, clocks and the last move
//! played. States are never edited once handed out; `apply_move` always
//! returns a fresh one, so keeping old states around is all a host needs for
//! undo and redo.

use crate::chess_errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::legal_moves;
use crate::moves::chess_move::Move;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    /// Square passed over by a two-square pawn advance on the previous ply.
    pub en_passant_target: Option<Position>,
    pub halfmove_clock: u16,
    pub fullmove_number: u16,
    /// Kept for host-side highlighting; the engine never reads it.
    pub last_move: Option<Move>,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            board: Board::empty(),
            side_to_move: Color::White,
            castling_rights: CastlingRights::NONE,
            en_passant_target: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            last_move: None,
        }
    }
}

impl GameState {
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    pub fn new_game() -> Self {
        Self {
            board: Board::starting_position(),
            castling_rights: CastlingRights::ALL,
            ..Self::default()
        }
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, ChessErrors> {
        parse_fen(fen)
    }

    #[inline]
    pub fn to_fen(&self) -> String {
        generate_fen(self)
    }
}

/// Outcome classification for the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Check,
    Checkmate { winner: Color },
    Stalemate,
}

impl GameStatus {
    #[inline]
    pub fn is_game_over(self) -> bool {
        matches!(self, GameStatus::Checkmate { .. } | GameStatus::Stalemate)
    }
}

/// Classify a position: no legal moves plus check is mate, no legal moves
/// without check is stalemate.
pub fn game_status(game_state: &GameState) -> GameStatus {
    let side = game_state.side_to_move;
    let in_check = is_king_in_check(&game_state.board, side);
    let has_moves = !legal_moves(game_state, side).is_empty();

    match (has_moves, in_check) {
        (true, false) => GameStatus::Ongoing,
        (true, true) => GameStatus::Check,
        (false, true) => GameStatus::Checkmate {
            winner: side.opposite(),
        },
        (false, false) => GameStatus::Stalemate,
    }
}
