//! Session configuration
//!
//! Defaults can be overridden from the environment:
//!
//! - `BLOCKFALL_SEED`: RNG seed (default: 1)
//! - `BLOCKFALL_RANDOMIZER`: `uniform` or `bag` (default: uniform)
//!
//! Missing or unparsable values keep the default.

use std::env;

use serde::{Deserialize, Serialize};
use tracing::warn;

pub const SEED_ENV: &str = "BLOCKFALL_SEED";
pub const RANDOMIZER_ENV: &str = "BLOCKFALL_RANDOMIZER";

/// Next-piece selection policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Randomizer {
    /// Uniform over the catalog, repeats allowed
    #[default]
    Uniform,
    /// 7-bag: each run of seven pieces holds every kind once
    Bag,
}

impl Randomizer {
    pub fn from_name(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "uniform" | "random" => Some(Randomizer::Uniform),
            "bag" | "7bag" | "7-bag" => Some(Randomizer::Bag),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Randomizer::Uniform => "uniform",
            Randomizer::Bag => "bag",
        }
    }
}

/// Everything needed to start a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    pub seed: u64,
    pub randomizer: Randomizer,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            randomizer: Randomizer::Uniform,
        }
    }
}

impl SessionConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let seed = match lookup(SEED_ENV) {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                warn!(value = %raw, "ignoring unparsable {SEED_ENV}");
                defaults.seed
            }),
            None => defaults.seed,
        };

        let randomizer = match lookup(RANDOMIZER_ENV) {
            Some(raw) => Randomizer::from_name(&raw).unwrap_or_else(|| {
                warn!(value = %raw, "ignoring unknown {RANDOMIZER_ENV}");
                defaults.randomizer
            }),
            None => defaults.randomizer,
        };

        Self { seed, randomizer }
    }

    pub fn with_seed(self, seed: u64) -> Self {
        Self { seed, ..self }
    }

    pub fn with_randomizer(self, randomizer: Randomizer) -> Self {
        Self { randomizer, ..self }
    }
}
