//! Alpha-beta opponent behind the `Engine` trait.
//!
//! Reports its root statistics as info lines so hosts can show them, and
//! holds either a seeded or the thread RNG for tie-breaks.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use crate::chess_errors::ChessErrors;
use crate::engines::engine_config::{EngineConfig, MAX_DEPTH};
use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game_state::game_state::GameState;
use crate::search::alpha_beta::{AlphaBetaSearch, SearchOutcome};
use crate::search::board_scoring::PositionalScorer;

pub struct MinimaxEngine {
    config: EngineConfig,
    seeded_rng: Option<StdRng>,
}

impl MinimaxEngine {
    pub fn new(config: EngineConfig) -> Self {
        let seeded_rng = config.seed.map(StdRng::seed_from_u64);
        Self { config, seeded_rng }
    }

    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Copy for a worker thread. A seeded generator hands the copy a seed
    /// drawn from its own stream, so repeated searches stay reproducible
    /// without replaying the same tie-breaks.
    pub fn fork(&mut self) -> Self {
        Self {
            config: self.config.clone(),
            seeded_rng: self.seeded_rng.as_mut().map(|rng| StdRng::from_rng(rng)),
        }
    }

    fn run_search(&mut self, game_state: &GameState, depth: u8) -> SearchOutcome {
        let mut search = AlphaBetaSearch::new(PositionalScorer);
        match self.seeded_rng.as_mut() {
            Some(rng) => search.search(game_state, depth, rng),
            None => search.search(game_state, depth, &mut rand::rng()),
        }
    }
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl Engine for MinimaxEngine {
    fn name(&self) -> &str {
        "Pawnstorm Minimax"
    }

    fn new_game(&mut self) {
        self.seeded_rng = self.config.seed.map(StdRng::seed_from_u64);
    }

    fn set_option(&mut self, name: &str, value: &str) -> Result<(), ChessErrors> {
        self.config.set_option(name, value)?;
        self.seeded_rng = self.config.seed.map(StdRng::seed_from_u64);
        info!(option = name, value, depth = self.config.depth, "engine option set");
        Ok(())
    }

    fn choose_move(
        &mut self,
        game_state: &GameState,
        params: &GoParams,
    ) -> Result<EngineOutput, ChessErrors> {
        let depth = params.depth.unwrap_or(self.config.depth);
        if !(1..=MAX_DEPTH).contains(&depth) {
            return Err(ChessErrors::InvalidOption {
                name: "Depth".to_owned(),
                value: depth.to_string(),
            });
        }
        let outcome = self.run_search(game_state, depth);

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info depth {depth} nodes {} ties {}",
            outcome.nodes,
            outcome.tied_moves.len()
        ));
        if let Some(score) = outcome.best_score {
            out.info_lines.push(format!("info score {score}"));
        }
        out.best_move = outcome.best_move;
        Ok(out)
    }
}
