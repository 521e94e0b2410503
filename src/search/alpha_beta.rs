//! Fixed-depth minimax with alpha-beta pruning.
//!
//! White maximizes and Black minimizes the White-positive static score. At
//! the root every move is searched with a full window so exact ties are
//! known; one of the tied best moves is then picked at random. The random
//! source is a parameter so tests and seeded engines are reproducible.

use rand::prelude::IndexedRandom;
use rand::Rng;
use tracing::{debug, trace};

use crate::game_state::chess_types::Color;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::{has_any_legal_move, legal_moves};
use crate::moves::chess_move::Move;
use crate::search::board_scoring::{BoardScorer, PositionalScorer};
use crate::search::move_ordering::order_moves;

/// Magnitude of a checkmate score. Larger than any material total.
pub const MATE_SCORE: i32 = 100_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredMove {
    pub mv: Move,
    pub score: i32,
}

#[derive(Debug, Clone, Default)]
pub struct SearchOutcome {
    pub best_move: Option<Move>,
    pub best_score: Option<i32>,
    /// Every root move that reached `best_score`.
    pub tied_moves: Vec<Move>,
    pub nodes: u64,
}

pub struct AlphaBetaSearch<S: BoardScorer = PositionalScorer> {
    scorer: S,
    nodes: u64,
}

impl<S: BoardScorer> AlphaBetaSearch<S> {
    pub fn new(scorer: S) -> Self {
        Self { scorer, nodes: 0 }
    }

    /// Exact minimax value of every root move, in move-ordering order.
    ///
    /// A depth of zero is treated as one: each root move is still applied
    /// and its resulting position scored.
    pub fn score_root_moves(&mut self, game_state: &GameState, depth: u8) -> Vec<ScoredMove> {
        let mut moves = legal_moves(game_state, game_state.side_to_move);
        order_moves(&mut moves);

        let child_depth = depth.max(1) - 1;
        moves
            .into_iter()
            .map(|mv| {
                let next = apply_move(game_state, &mv);
                let score = self.minimax(&next, child_depth, i32::MIN, i32::MAX);
                trace!(mv = %mv, score, "root move scored");
                ScoredMove { mv, score }
            })
            .collect()
    }

    pub fn search<R: Rng + ?Sized>(
        &mut self,
        game_state: &GameState,
        depth: u8,
        rng: &mut R,
    ) -> SearchOutcome {
        let start_nodes = self.nodes;
        let scored = self.score_root_moves(game_state, depth);

        let maximizing = game_state.side_to_move == Color::White;
        let best_score = if maximizing {
            scored.iter().map(|s| s.score).max()
        } else {
            scored.iter().map(|s| s.score).min()
        };

        let tied_moves: Vec<Move> = scored
            .iter()
            .filter(|s| Some(s.score) == best_score)
            .map(|s| s.mv)
            .collect();
        let best_move = tied_moves.as_slice().choose(rng).copied();
        let nodes = self.nodes - start_nodes;

        match best_move {
            Some(mv) => debug!(
                depth,
                nodes,
                score = ?best_score,
                ties = tied_moves.len(),
                chosen = %mv,
                "search finished"
            ),
            None => debug!(depth, nodes, "search finished without legal moves"),
        }

        SearchOutcome {
            best_move,
            best_score,
            tied_moves,
            nodes,
        }
    }

    fn minimax(&mut self, game_state: &GameState, depth: u8, mut alpha: i32, mut beta: i32) -> i32 {
        self.nodes += 1;
        let side = game_state.side_to_move;

        if depth == 0 {
            if !has_any_legal_move(game_state, side) {
                return terminal_score(game_state);
            }
            return self.scorer.score(&game_state.board);
        }

        let mut moves = legal_moves(game_state, side);
        if moves.is_empty() {
            return terminal_score(game_state);
        }
        order_moves(&mut moves);

        match side {
            Color::White => {
                let mut value = i32::MIN;
                for mv in &moves {
                    let next = apply_move(game_state, mv);
                    value = value.max(self.minimax(&next, depth - 1, alpha, beta));
                    alpha = alpha.max(value);
                    if alpha >= beta {
                        break;
                    }
                }
                value
            }
            Color::Black => {
                let mut value = i32::MAX;
                for mv in &moves {
                    let next = apply_move(game_state, mv);
                    value = value.min(self.minimax(&next, depth - 1, alpha, beta));
                    beta = beta.min(value);
                    if beta <= alpha {
                        break;
                    }
                }
                value
            }
        }
    }
}

/// Score of a position with no legal moves: mate against the side to move,
/// or a dead draw for stalemate.
fn terminal_score(game_state: &GameState) -> i32 {
    let side = game_state.side_to_move;
    if !is_king_in_check(&game_state.board, side) {
        return 0;
    }
    match side {
        Color::White => -MATE_SCORE,
        Color::Black => MATE_SCORE,
    }
}

/// Engine move for the side to move using the thread-local RNG for ties.
pub fn best_move(game_state: &GameState, depth: u8) -> Option<Move> {
    best_move_with_rng(game_state, depth, &mut rand::rng())
}

/// Engine move with an explicit tie-break source.
pub fn best_move_with_rng<R: Rng + ?Sized>(game_state: &GameState, depth: u8, rng: &mut R) -> Option<Move> {
    AlphaBetaSearch::new(PositionalScorer)
        .search(game_state, depth, rng)
        .best_move
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::PieceKind;
    use crate::search::board_scoring::MaterialScorer;
    use crate::utils::algebraic::algebraic_to_position;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn takes_the_free_queen_at_depth_one() {
        let game = GameState::from_fen("4k3/8/8/3q4/8/8/3R4/4K3 w - - 0 1").expect("FEN should parse");
        let mut rng = StdRng::seed_from_u64(7);
        let outcome = AlphaBetaSearch::new(PositionalScorer).search(&game, 1, &mut rng);

        let mv = outcome.best_move.expect("white has moves");
        assert!(outcome.tied_moves.contains(&mv));
        assert_eq!(mv.captured.map(|p| p.kind), Some(PieceKind::Queen));
        assert_eq!(mv.to, algebraic_to_position("d5").expect("d5"));
    }

    #[test]
    fn black_minimizes() {
        let game = GameState::from_fen("4k3/8/8/3r4/8/8/3Q4/4K3 b - - 0 1").expect("FEN should parse");
        let mut rng = StdRng::seed_from_u64(11);
        let mv = best_move_with_rng(&game, 1, &mut rng).expect("black has moves");
        assert_eq!(mv.captured.map(|p| p.kind), Some(PieceKind::Queen));
    }

    #[test]
    fn finds_mate_in_one() {
        // Back-rank mate: Ra1-a8.
        let game = GameState::from_fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1").expect("FEN should parse");
        let mut search = AlphaBetaSearch::new(PositionalScorer);
        let outcome = search.search(&game, 2, &mut StdRng::seed_from_u64(3));

        assert_eq!(outcome.best_score, Some(MATE_SCORE));
        let mv = outcome.best_move.expect("white has moves");
        assert_eq!(mv.to, algebraic_to_position("a8").expect("a8"));
        assert!(outcome.nodes > 0);
    }

    #[test]
    fn depth_zero_still_returns_a_move() {
        let game = GameState::new_game();
        let mut rng = StdRng::seed_from_u64(5);
        let outcome = AlphaBetaSearch::new(PositionalScorer).search(&game, 0, &mut rng);
        let legal = legal_moves(&game, game.side_to_move);
        let mv = outcome.best_move.expect("depth zero is floored, not an error");
        assert!(legal.contains(&mv));
        assert!(outcome.tied_moves.iter().all(|m| legal.contains(m)));
    }

    #[test]
    fn no_legal_moves_means_no_move() {
        let mated = GameState::from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3")
            .expect("FEN should parse");
        assert_eq!(best_move(&mated, 2), None);

        let stalemate = GameState::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").expect("FEN should parse");
        let outcome = AlphaBetaSearch::new(PositionalScorer).search(&stalemate, 3, &mut rand::rng());
        assert_eq!(outcome.best_move, None);
        assert_eq!(outcome.best_score, None);
    }

    #[test]
    fn tie_break_only_picks_from_the_optimal_set() {
        // Material-only scoring makes every quiet king move tie.
        let game = GameState::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let mut search = AlphaBetaSearch::new(MaterialScorer);
        let scored = search.score_root_moves(&game, 2);
        assert_eq!(scored.len(), 5);
        assert!(scored.iter().all(|s| s.score == 0));

        for seed in 0..16 {
            let mut rng = StdRng::seed_from_u64(seed);
            let outcome = search.search(&game, 2, &mut rng);
            let mv = outcome.best_move.expect("king has moves");
            assert_eq!(outcome.tied_moves.len(), 5);
            assert!(outcome.tied_moves.contains(&mv));
        }
    }

    #[test]
    fn same_seed_same_choice() {
        let game = GameState::new_game();
        let first = best_move_with_rng(&game, 1, &mut StdRng::seed_from_u64(42));
        let second = best_move_with_rng(&game, 1, &mut StdRng::seed_from_u64(42));
        assert_eq!(first, second);
    }

    #[test]
    fn pruning_does_not_change_root_values() {
        let game = GameState::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1")
            .expect("kiwipete FEN should parse");
        let mut search = AlphaBetaSearch::new(PositionalScorer);
        for scored in search.score_root_moves(&game, 2) {
            let next = apply_move(&game, &scored.mv);
            let replies = legal_moves(&next, next.side_to_move);
            let exhaustive = replies
                .iter()
                .map(|reply| PositionalScorer.score(&apply_move(&next, reply).board))
                .min()
                .unwrap_or(0);
            assert_eq!(scored.score, exhaustive, "{}", scored.mv);
        }
    }

    fn unpruned_minimax(game_state: &GameState, depth: u8, nodes: &mut u64) -> i32 {
        *nodes += 1;
        let moves = legal_moves(game_state, game_state.side_to_move);
        if moves.is_empty() {
            return terminal_score(game_state);
        }
        if depth == 0 {
            return PositionalScorer.score(&game_state.board);
        }
        let scores: Vec<i32> = moves
            .iter()
            .map(|mv| unpruned_minimax(&apply_move(game_state, mv), depth - 1, nodes))
            .collect();
        let best = match game_state.side_to_move {
            Color::White => scores.iter().max(),
            Color::Black => scores.iter().min(),
        };
        best.copied().unwrap_or(0)
    }

    #[test]
    fn cutoffs_at_depth_three_match_plain_minimax() {
        let positions = [
            "6k1/5ppp/8/3q4/8/2N5/5PPP/R5K1 w - - 0 1",
            "r5k1/5ppp/8/8/3Q4/2n5/5PPP/6K1 b - - 0 1",
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1",
        ];
        for fen in positions {
            let game = GameState::from_fen(fen).expect("FEN should parse");
            let mut search = AlphaBetaSearch::new(PositionalScorer);
            let mut reference_nodes = 0u64;

            for scored in search.score_root_moves(&game, 3) {
                let next = apply_move(&game, &scored.mv);
                let reference = unpruned_minimax(&next, 2, &mut reference_nodes);
                assert_eq!(scored.score, reference, "{fen}: {}", scored.mv);
            }
            assert!(
                search.nodes < reference_nodes,
                "{fen}: expected cutoffs, visited {} of {}",
                search.nodes,
                reference_nodes
            );
        }
    }
}
