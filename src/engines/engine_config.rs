//! Engine configuration: search depth, difficulty presets and the optional
//! tie-break seed.
//!
//! Values are layered: defaults, then `PAWNSTORM_*` environment variables,
//! then explicit `set_option` calls from the host.

use std::str::FromStr;

use tracing::warn;

use crate::chess_errors::ChessErrors;

pub const ENV_DEPTH: &str = "PAWNSTORM_DEPTH";
pub const ENV_SEED: &str = "PAWNSTORM_SEED";
pub const ENV_DIFFICULTY: &str = "PAWNSTORM_DIFFICULTY";

/// Deepest search a host may request. Each extra ply multiplies the work.
pub const MAX_DEPTH: u8 = 6;

/// Named strength levels offered to players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Difficulty {
    Calm,
    #[default]
    Sharp,
    Savage,
    Brutal,
}

impl Difficulty {
    pub const fn depth(self) -> u8 {
        match self {
            Difficulty::Calm => 1,
            Difficulty::Sharp => 2,
            Difficulty::Savage => 3,
            Difficulty::Brutal => 4,
        }
    }
}

impl FromStr for Difficulty {
    type Err = ChessErrors;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "calm" | "1" => Ok(Difficulty::Calm),
            "sharp" | "2" => Ok(Difficulty::Sharp),
            "savage" | "3" => Ok(Difficulty::Savage),
            "brutal" | "4" => Ok(Difficulty::Brutal),
            _ => Err(ChessErrors::InvalidOption {
                name: "Difficulty".to_owned(),
                value: s.to_owned(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub depth: u8,
    /// Fixed seed for the tie-break RNG; `None` uses the thread RNG.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            depth: Difficulty::default().depth(),
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Defaults overlaid with the `PAWNSTORM_*` environment variables.
    /// Unparseable values are logged and skipped.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        for (key, option) in [
            (ENV_DIFFICULTY, "Difficulty"),
            (ENV_DEPTH, "Depth"),
            (ENV_SEED, "Seed"),
        ] {
            if let Some(value) = lookup(key) {
                if let Err(err) = config.set_option(option, &value) {
                    warn!(%key, %err, "ignoring environment override");
                }
            }
        }
        config
    }

    /// Apply one named option. The config is unchanged on error.
    pub fn set_option(&mut self, name: &str, value: &str) -> Result<(), ChessErrors> {
        let invalid = || ChessErrors::InvalidOption {
            name: name.to_owned(),
            value: value.to_owned(),
        };

        match name.trim().to_ascii_lowercase().as_str() {
            "depth" => {
                let depth = value.trim().parse::<u8>().map_err(|_| invalid())?;
                if !(1..=MAX_DEPTH).contains(&depth) {
                    return Err(invalid());
                }
                self.depth = depth;
            }
            "difficulty" => {
                self.depth = value.parse::<Difficulty>().map_err(|_| invalid())?.depth();
            }
            "seed" => {
                let value = value.trim();
                self.seed = if value.is_empty() || value.eq_ignore_ascii_case("none") {
                    None
                } else {
                    Some(value.parse::<u64>().map_err(|_| invalid())?)
                };
            }
            _ => return Err(invalid()),
        }
        Ok(())
    }
}
