//! Value types shared by the board model, move generation and search.
//!
//! Everything here is `Copy`: pieces and positions are plain values so a
//! board can be duplicated per ply without any aliasing between states.

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Internal rank index holding this color's king and rooks at game start.
    #[inline]
    pub const fn home_row(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    /// Internal rank index holding this color's pawns at game start.
    #[inline]
    pub const fn pawn_start_row(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// Rank index where this color's pawns promote.
    #[inline]
    pub const fn promotion_row(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    /// Row delta of a single pawn step for this color.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }
}

/// Piece kind (color is carried separately on `Piece`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Upper-case letter used in FEN and move logs (`P` for pawns).
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'P' => Some(PieceKind::Pawn),
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'R' => Some(PieceKind::Rook),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }
}

/// Stable identity token of a piece, unique within one game.
///
/// Survives moves and promotion so a host can animate the same piece across
/// states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(pub u16);

/// A piece as it sits on one board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub id: PieceId,
    pub kind: PieceKind,
    pub color: Color,
    pub has_moved: bool,
}

impl Piece {
    #[inline]
    pub const fn new(id: PieceId, kind: PieceKind, color: Color) -> Self {
        Self {
            id,
            kind,
            color,
            has_moved: false,
        }
    }

    /// True when `other` is the same physical piece, ignoring has-moved.
    #[inline]
    pub fn same_identity(&self, other: &Piece) -> bool {
        self.id == other.id && self.kind == other.kind && self.color == other.color
    }

    /// Copy of this piece after it has moved, optionally promoted.
    #[inline]
    pub fn moved(self, promotion: Option<PieceKind>) -> Self {
        Self {
            kind: promotion.unwrap_or(self.kind),
            has_moved: true,
            ..self
        }
    }
}

/// Board coordinate: `x` is the file (0 = a-file), `y` the internal rank
/// index (0 = rank 8, the far rank from White's side).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: u8,
    pub y: u8,
}

impl Position {
    #[inline]
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Neighbouring square `(dx, dy)` away, or `None` off the board.
    #[inline]
    pub fn offset(self, dx: i8, dy: i8) -> Option<Self> {
        let x = self.x as i8 + dx;
        let y = self.y as i8 + dy;
        if (0..8).contains(&x) && (0..8).contains(&y) {
            Some(Self::new(x as u8, y as u8))
        } else {
            None
        }
    }

    #[inline]
    pub const fn is_on_board(self) -> bool {
        self.x < 8 && self.y < 8
    }
}

/// Which side of the board a castling move goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    Kingside,
    Queenside,
}

impl CastleSide {
    /// File the rook starts on.
    #[inline]
    pub const fn rook_home_file(self) -> u8 {
        match self {
            CastleSide::Kingside => 7,
            CastleSide::Queenside => 0,
        }
    }

    /// File the rook lands on after castling.
    #[inline]
    pub const fn rook_target_file(self) -> u8 {
        match self {
            CastleSide::Kingside => 5,
            CastleSide::Queenside => 3,
        }
    }

    /// File the king lands on after castling.
    #[inline]
    pub const fn king_target_file(self) -> u8 {
        match self {
            CastleSide::Kingside => 6,
            CastleSide::Queenside => 2,
        }
    }
}

const CASTLE_WHITE_KINGSIDE: u8 = 1 << 0;
const CASTLE_WHITE_QUEENSIDE: u8 = 1 << 1;
const CASTLE_BLACK_KINGSIDE: u8 = 1 << 2;
const CASTLE_BLACK_QUEENSIDE: u8 = 1 << 3;

/// Castling rights, one independent flag per color and side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CastlingRights(u8);

impl CastlingRights {
    pub const NONE: Self = Self(0);
    pub const ALL: Self = Self(
        CASTLE_WHITE_KINGSIDE | CASTLE_WHITE_QUEENSIDE | CASTLE_BLACK_KINGSIDE | CASTLE_BLACK_QUEENSIDE,
    );

    #[inline]
    const fn bit(color: Color, side: CastleSide) -> u8 {
        match (color, side) {
            (Color::White, CastleSide::Kingside) => CASTLE_WHITE_KINGSIDE,
            (Color::White, CastleSide::Queenside) => CASTLE_WHITE_QUEENSIDE,
            (Color::Black, CastleSide::Kingside) => CASTLE_BLACK_KINGSIDE,
            (Color::Black, CastleSide::Queenside) => CASTLE_BLACK_QUEENSIDE,
        }
    }

    #[inline]
    pub const fn has(self, color: Color, side: CastleSide) -> bool {
        self.0 & Self::bit(color, side) != 0
    }

    #[inline]
    pub fn grant(&mut self, color: Color, side: CastleSide) {
        self.0 |= Self::bit(color, side);
    }

    #[inline]
    pub fn revoke(&mut self, color: Color, side: CastleSide) {
        self.0 &= !Self::bit(color, side);
    }

    #[inline]
    pub fn revoke_all(&mut self, color: Color) {
        self.revoke(color, CastleSide::Kingside);
        self.revoke(color, CastleSide::Queenside);
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_offset_stays_on_board() {
        let corner = Position::new(0, 7);
        assert_eq!(corner.offset(-1, 0), None);
        assert_eq!(corner.offset(0, 1), None);
        assert_eq!(corner.offset(1, -1), Some(Position::new(1, 6)));
    }

    #[test]
    fn castling_rights_are_independent_per_side() {
        let mut rights = CastlingRights::ALL;
        rights.revoke(Color::White, CastleSide::Queenside);
        assert!(rights.has(Color::White, CastleSide::Kingside));
        assert!(!rights.has(Color::White, CastleSide::Queenside));
        assert!(rights.has(Color::Black, CastleSide::Queenside));

        rights.revoke_all(Color::Black);
        assert!(!rights.has(Color::Black, CastleSide::Kingside));
        assert!(!rights.has(Color::Black, CastleSide::Queenside));
        assert!(!rights.is_empty());
    }

    #[test]
    fn promotion_keeps_identity() {
        let pawn = Piece::new(PieceId(9), PieceKind::Pawn, Color::White);
        let queen = pawn.moved(Some(PieceKind::Queen));
        assert_eq!(queen.id, pawn.id);
        assert_eq!(queen.kind, PieceKind::Queen);
        assert!(queen.has_moved);
        assert!(!pawn.has_moved);
    }
}
