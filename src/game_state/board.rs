//! 8x8 mailbox board.
//!
//! Cells are indexed `[y][x]` (rank index, then file). The board is a plain
//! `Copy` array, so every state transition works on its own copy.

use crate::game_state::chess_rules::{BACK_RANK, BOARD_SIZE};
use crate::game_state::chess_types::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub const fn empty() -> Self {
        Self {
            squares: [[None; 8]; 8],
        }
    }

    /// Standard opening layout. Ids are handed out in board scan order,
    /// rank 8 first, matching what FEN import produces for the same layout.
    pub fn starting_position() -> Self {
        let pawns = [PieceKind::Pawn; 8];
        let rows = [
            (Color::Black.home_row(), Color::Black, BACK_RANK),
            (Color::Black.pawn_start_row(), Color::Black, pawns),
            (Color::White.pawn_start_row(), Color::White, pawns),
            (Color::White.home_row(), Color::White, BACK_RANK),
        ];

        let mut board = Self::empty();
        let mut next_id = 0u16;
        for (y, color, kinds) in rows {
            for (x, kind) in (0..BOARD_SIZE).zip(kinds) {
                board.set(Position::new(x, y), Some(Piece::new(PieceId(next_id), kind, color)));
                next_id += 1;
            }
        }

        board
    }

    #[inline]
    pub fn piece_at(&self, position: Position) -> Option<Piece> {
        if !position.is_on_board() {
            return None;
        }
        self.squares[position.y as usize][position.x as usize]
    }

    #[inline]
    pub fn is_empty_at(&self, position: Position) -> bool {
        self.piece_at(position).is_none()
    }

    #[inline]
    pub fn set(&mut self, position: Position, piece: Option<Piece>) {
        if position.is_on_board() {
            self.squares[position.y as usize][position.x as usize] = piece;
        }
    }

    #[inline]
    pub fn take(&mut self, position: Position) -> Option<Piece> {
        let piece = self.piece_at(position);
        self.set(position, None);
        piece
    }

    /// Every occupied square with its piece, scanning rank 8 to rank 1.
    pub fn occupied(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.squares.iter().enumerate().flat_map(|(y, row)| {
            row.iter().enumerate().filter_map(move |(x, cell)| {
                cell.map(|piece| (Position::new(x as u8, y as u8), piece))
            })
        })
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.occupied().filter(move |(_, piece)| piece.color == color)
    }

    pub fn king_position(&self, color: Color) -> Option<Position> {
        self.pieces_of(color)
            .find(|(_, piece)| piece.kind == PieceKind::King)
            .map(|(position, _)| position)
    }
}
