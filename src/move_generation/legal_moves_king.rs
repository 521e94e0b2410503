use crate::game_state::chess_rules::KING_HOME_FILE;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_move_shared::push_step_moves;
use crate::moves::chess_move::Move;
use crate::moves::movement_offsets::KING_OFFSETS;

pub fn generate_king_moves(game_state: &GameState, from: Position, king: Piece, out: &mut Vec<Move>) {
    push_step_moves(&game_state.board, from, king, &KING_OFFSETS, out);
    generate_castling_moves(game_state, from, king, out);
}

fn generate_castling_moves(game_state: &GameState, from: Position, king: Piece, out: &mut Vec<Move>) {
    let side = king.color;
    let home = Position::new(KING_HOME_FILE, side.home_row());
    if from != home {
        return;
    }

    // Cannot castle out of check.
    if is_square_attacked(&game_state.board, from, side.opposite()) {
        return;
    }

    for castle in [CastleSide::Kingside, CastleSide::Queenside] {
        if game_state.castling_rights.has(side, castle) && can_castle(game_state, side, castle) {
            let to = Position::new(castle.king_target_file(), home.y);
            out.push(Move {
                castle: Some(castle),
                ..Move::new(from, to, king, None)
            });
        }
    }
}

/// Rook unmoved on its corner, every square between king and rook empty,
/// and no square the king crosses or lands on attacked.
fn can_castle(game_state: &GameState, side: Color, castle: CastleSide) -> bool {
    let board = &game_state.board;
    let row = side.home_row();
    let enemy = side.opposite();

    let rook_home = Position::new(castle.rook_home_file(), row);
    let rook_ready = board.piece_at(rook_home).is_some_and(|rook| {
        rook.kind == PieceKind::Rook && rook.color == side && !rook.has_moved
    });
    if !rook_ready {
        return false;
    }

    let (low, high) = match castle {
        CastleSide::Kingside => (KING_HOME_FILE + 1, castle.rook_home_file()),
        CastleSide::Queenside => (castle.rook_home_file() + 1, KING_HOME_FILE),
    };
    if (low..high).any(|x| !board.is_empty_at(Position::new(x, row))) {
        return false;
    }

    let king_target = castle.king_target_file();
    let (path_low, path_high) = if king_target > KING_HOME_FILE {
        (KING_HOME_FILE + 1, king_target)
    } else {
        (king_target, KING_HOME_FILE - 1)
    };
    !(path_low..=path_high).any(|x| is_square_attacked(board, Position::new(x, row), enemy))
}

#[cfg(test)]
mod tests {
    use super::generate_king_moves;
    use crate::game_state::chess_types::CastleSide;
    use crate::game_state::game_state::GameState;
    use crate::moves::chess_move::Move;
    use crate::utils::algebraic::algebraic_to_position;

    fn castles(fen: &str) -> Vec<CastleSide> {
        let game = GameState::from_fen(fen).expect("FEN should parse");
        let from = game
            .board
            .king_position(game.side_to_move)
            .expect("side to move has a king");
        let king = game.board.piece_at(from).expect("king");
        let mut out: Vec<Move> = Vec::new();
        generate_king_moves(&game, from, king, &mut out);
        out.iter().filter_map(|m| m.castle).collect()
    }

    #[test]
    fn both_sides_available_with_clear_paths() {
        let sides = castles("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        assert_eq!(sides, vec![CastleSide::Kingside, CastleSide::Queenside]);
        let sides = castles("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1");
        assert_eq!(sides, vec![CastleSide::Kingside, CastleSide::Queenside]);
    }

    #[test]
    fn rights_gate_each_side_independently() {
        assert_eq!(
            castles("r3k2r/8/8/8/8/8/8/R3K2R w Q - 0 1"),
            vec![CastleSide::Queenside]
        );
        assert!(castles("r3k2r/8/8/8/8/8/8/R3K2R w - - 0 1").is_empty());
    }

    #[test]
    fn attacked_transit_square_blocks_castling() {
        // Black rook on f8 covers f1.
        assert_eq!(
            castles("4kr2/8/8/8/8/8/8/R3K2R w KQ - 0 1"),
            vec![CastleSide::Queenside]
        );
        // b1 may be attacked on the queen side; the king never crosses it.
        assert_eq!(
            castles("1r2k3/8/8/8/8/8/8/R3K3 w Q - 0 1"),
            vec![CastleSide::Queenside]
        );
    }

    #[test]
    fn attacked_destination_square_blocks_castling() {
        // Bishop on h2 covers g1 only.
        assert_eq!(
            castles("4k3/8/8/8/8/8/7b/R3K2R w KQ - 0 1"),
            vec![CastleSide::Queenside]
        );
        // Bishop on a3 covers c1 only.
        assert_eq!(
            castles("4k3/8/8/8/8/b7/8/R3K2R w KQ - 0 1"),
            vec![CastleSide::Kingside]
        );
    }

    #[test]
    fn no_castling_out_of_check_or_through_pieces() {
        assert!(castles("4r1k1/8/8/8/8/8/8/R3K2R w KQ - 0 1").is_empty());
        assert!(castles("4k3/8/8/8/8/8/8/RN2K1NR w KQ - 0 1").is_empty());
    }

    #[test]
    fn moved_rook_cannot_castle() {
        let mut game = GameState::from_fen("4k3/8/8/8/8/8/8/4K2R w K - 0 1").expect("FEN should parse");
        let corner = algebraic_to_position("h1").expect("h1");
        let rook = game.board.piece_at(corner).expect("rook on h1");
        game.board.set(corner, Some(rook.moved(None)));

        let from = algebraic_to_position("e1").expect("e1");
        let king = game.board.piece_at(from).expect("king");
        let mut out = Vec::new();
        generate_king_moves(&game, from, king, &mut out);
        assert!(out.iter().all(|m| m.castle.is_none()));
    }
}
