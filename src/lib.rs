//! Crate root module declarations for the Pawnstorm opponent engine.
//!
//! This file exposes the rules core (board model, attack detection, legal
//! move generation, move application), the alpha-beta search, the engine
//! wrapper with its configuration, and notation/FEN helpers so the console
//! host, tests, and benches can import stable module paths.

pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
}

pub mod moves {
    pub mod chess_move;
    pub mod movement_offsets;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
    pub mod perft;
}

pub mod search {
    pub mod alpha_beta;
    pub mod board_scoring;
    pub mod move_ordering;
}

pub mod engines {
    pub mod engine_config;
    pub mod engine_minimax;
    pub mod engine_trait;
}

pub mod host {
    pub mod console_top;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod long_algebraic;
    pub mod render_game_state;
}

pub use crate::chess_errors::ChessErrors;
pub use crate::engines::engine_config::{Difficulty, EngineConfig};
pub use crate::engines::engine_minimax::MinimaxEngine;
pub use crate::game_state::board::Board;
pub use crate::game_state::chess_types::{
    CastleSide, CastlingRights, Color, Piece, PieceId, PieceKind, Position,
};
pub use crate::game_state::game_state::{game_status, GameState, GameStatus};
pub use crate::move_generation::legal_move_apply::apply_move;
pub use crate::move_generation::legal_move_checks::{is_king_in_check, is_square_attacked};
pub use crate::move_generation::legal_move_generator::{legal_moves, legal_moves_for_square};
pub use crate::moves::chess_move::Move;
pub use crate::search::alpha_beta::{best_move, best_move_with_rng};
