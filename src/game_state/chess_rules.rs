//! Canonical chess-rule constants.
//!
//! Static rule literals: board dimensions, the back-rank layout and the
//! standard starting position FEN used to initialize and validate setup.

use crate::game_state::chess_types::PieceKind;

/// Files and ranks per side of the board.
pub const BOARD_SIZE: u8 = 8;

/// File index of both kings at game start.
pub const KING_HOME_FILE: u8 = 4;

/// Back-rank layout from the a-file to the h-file.
pub const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
