//! Move-path enumeration for validating the generator.
//!
//! Counts leaf nodes of the legal move tree and tallies the kind of move
//! that reached each leaf. Promotions are generated as queen-only templates,
//! so positions with promotions in range undercount published totals.

use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::{has_any_legal_move, legal_moves};
use crate::moves::chess_move::Move;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

pub fn perft(game_state: &GameState, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for mv in legal_moves(game_state, game_state.side_to_move) {
        total.merge(perft_recurse(game_state, &mv, depth));
    }
    total
}

/// Leaf counts under each root move, in generation order.
pub fn perft_divide(game_state: &GameState, depth: u8) -> Vec<(Move, usize)> {
    if depth == 0 {
        return Vec::new();
    }
    legal_moves(game_state, game_state.side_to_move)
        .into_iter()
        .map(|mv| (mv, perft_recurse(game_state, &mv, depth).nodes))
        .collect()
}

fn perft_recurse(parent: &GameState, mv: &Move, remaining: u8) -> PerftCounts {
    let next = apply_move(parent, mv);

    if remaining > 1 {
        return perft(&next, remaining - 1);
    }

    let gives_check = is_king_in_check(&next.board, next.side_to_move);
    PerftCounts {
        nodes: 1,
        captures: usize::from(mv.is_capture()),
        en_passant: usize::from(mv.is_en_passant),
        castles: usize::from(mv.is_castle()),
        promotions: usize::from(mv.is_promotion()),
        checks: usize::from(gives_check),
        checkmates: usize::from(gives_check && !has_any_legal_move(&next, next.side_to_move)),
    }
}

#[cfg(test)]
mod tests {
    use super::{perft, perft_divide};
    use crate::game_state::game_state::GameState;

    #[test]
    fn startpos_node_counts() {
        let game = GameState::new_game();
        assert_eq!(perft(&game, 0).nodes, 1);
        assert_eq!(perft(&game, 1).nodes, 20);
        assert_eq!(perft(&game, 2).nodes, 400);

        let depth3 = perft(&game, 3);
        assert_eq!(depth3.nodes, 8902);
        assert_eq!(depth3.captures, 34);
        assert_eq!(depth3.checks, 12);
        assert_eq!(depth3.checkmates, 0);
    }

    #[test]
    fn kiwipete_exercises_castling_and_captures() {
        let game = GameState::from_fen(
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        )
        .expect("kiwipete FEN should parse");

        let depth1 = perft(&game, 1);
        assert_eq!(depth1.nodes, 48);
        assert_eq!(depth1.captures, 8);
        assert_eq!(depth1.castles, 2);

        let depth2 = perft(&game, 2);
        assert_eq!(depth2.nodes, 2039);
        assert_eq!(depth2.captures, 351);
        assert_eq!(depth2.en_passant, 1);
        assert_eq!(depth2.castles, 91);
        assert_eq!(depth2.checks, 3);
    }

    #[test]
    fn rook_endgame_with_en_passant_pins() {
        let game = GameState::from_fen("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1")
            .expect("FEN should parse");
        assert_eq!(perft(&game, 1).nodes, 14);
        assert_eq!(perft(&game, 2).nodes, 191);
        assert_eq!(perft(&game, 3).nodes, 2812);
    }

    #[test]
    fn divide_sums_to_total() {
        let game = GameState::new_game();
        let divided = perft_divide(&game, 2);
        assert_eq!(divided.len(), 20);
        assert_eq!(divided.iter().map(|(_, n)| n).sum::<usize>(), 400);
    }
}
