//! Engine configuration for self-play games.
//!
//! Defaults give a short, reproducible-if-seeded game between two `Medium`
//! players. The binary layers environment overrides on top via
//! [`EngineConfig::with_overrides`].

use crate::agent::ai::{Difficulty, Evaluator, MaterialTable, PieceValues, PositionalTable};

pub const DEPTH_VAR: &str = "CHESS_DEPTH";
pub const SEED_VAR: &str = "CHESS_SEED";
pub const MAX_PLIES_VAR: &str = "CHESS_MAX_PLIES";
pub const POSITIONAL_VAR: &str = "CHESS_POSITIONAL";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{name}={value:?} is not a valid value")]
    InvalidValue { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub white: Difficulty,
    pub black: Difficulty,
    /// Search depth for both sides, overriding the difficulties
    pub depth: Option<u8>,
    pub piece_values: PieceValues,
    /// Add piece-square bonuses to material
    pub positional: bool,
    /// RNG seed for tie-breaking; `None` draws from entropy
    pub seed: Option<u64>,
    /// Self-play stops as a draw after this many plies
    pub max_plies: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            white: Difficulty::Medium,
            black: Difficulty::Medium,
            depth: None,
            piece_values: PieceValues::default(),
            positional: true,
            seed: None,
            max_plies: 200,
        }
    }
}

impl EngineConfig {
    /// AI versus AI with the given strengths, everything else default
    pub fn aivai(white: Difficulty, black: Difficulty) -> Self {
        Self {
            white,
            black,
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Evaluator matching `piece_values` and `positional`
    pub fn evaluator(&self) -> Evaluator {
        if self.positional {
            Evaluator::new(PositionalTable::new(self.piece_values))
        } else {
            Evaluator::new(MaterialTable::new(self.piece_values))
        }
    }

    /// Applies overrides from `lookup`, which maps a variable name to its
    /// value. Unset variables keep the current setting.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(DEPTH_VAR) {
            let depth = parse(DEPTH_VAR, &value)?;
            if depth == 0 {
                return Err(ConfigError::InvalidValue {
                    name: DEPTH_VAR,
                    value,
                });
            }
            self.depth = Some(depth);
        }
        if let Some(value) = lookup(SEED_VAR) {
            self.seed = Some(parse(SEED_VAR, &value)?);
        }
        if let Some(value) = lookup(MAX_PLIES_VAR) {
            self.max_plies = parse(MAX_PLIES_VAR, &value)?;
        }
        if let Some(value) = lookup(POSITIONAL_VAR) {
            self.positional = match value.as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        name: POSITIONAL_VAR,
                        value,
                    })
                }
            };
        }
        Ok(self)
    }

    /// Defaults overridden from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().with_overrides(|name| std::env::var(name).ok())
    }
}

fn parse<T: std::str::FromStr>(name: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        name,
        value: value.to_string(),
    })
}
