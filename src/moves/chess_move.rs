//! Move description consumed by `apply_move`.
//!
//! A `Move` is created by the generator and applied once. The only field a
//! caller is expected to touch afterwards is the promotion choice, via
//! `with_promotion`.

use crate::game_state::chess_types::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Position,
    pub to: Position,
    /// Snapshot of the moving piece before the move.
    pub piece: Piece,
    /// Piece removed by this move; for en passant, the pawn beside `to`.
    pub captured: Option<Piece>,
    pub is_double_pawn_push: bool,
    pub is_en_passant: bool,
    pub castle: Option<CastleSide>,
    /// Kind the pawn turns into. Generated promotions default to a queen.
    pub promotion: Option<PieceKind>,
}

impl Move {
    /// Plain move or capture with no special flags.
    #[inline]
    pub fn new(from: Position, to: Position, piece: Piece, captured: Option<Piece>) -> Self {
        Self {
            from,
            to,
            piece,
            captured,
            is_double_pawn_push: false,
            is_en_passant: false,
            castle: None,
            promotion: None,
        }
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    #[inline]
    pub fn is_promotion(&self) -> bool {
        self.promotion.is_some()
    }

    #[inline]
    pub fn is_castle(&self) -> bool {
        self.castle.is_some()
    }

    /// Same promotion template with a different target piece. Non-promotion
    /// moves are returned unchanged.
    pub fn with_promotion(self, kind: PieceKind) -> Self {
        if !self.is_promotion() || matches!(kind, PieceKind::Pawn | PieceKind::King) {
            return self;
        }
        Self {
            promotion: Some(kind),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pawn() -> Piece {
        Piece::new(PieceId(12), PieceKind::Pawn, Color::White)
    }

    #[test]
    fn promotion_choice_overrides_template() {
        let template = Move {
            promotion: Some(PieceKind::Queen),
            ..Move::new(Position::new(0, 1), Position::new(0, 0), pawn(), None)
        };
        let knight = template.with_promotion(PieceKind::Knight);
        assert_eq!(knight.promotion, Some(PieceKind::Knight));
        assert_eq!(template.promotion, Some(PieceKind::Queen));
        assert_eq!(template.with_promotion(PieceKind::King), template);
    }

    #[test]
    fn quiet_moves_ignore_promotion_choice() {
        let push = Move::new(Position::new(0, 6), Position::new(0, 5), pawn(), None);
        assert_eq!(push.with_promotion(PieceKind::Rook), push);
        assert!(!push.is_capture());
    }
}
