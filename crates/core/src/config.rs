//! Game tuning knobs, read from the environment.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `MEMORY_SEED` | random | Deal seed; a fixed seed replays the same boards |
//! | `MEMORY_MISMATCH_DELAY_MS` | 1000 | How long a mismatched pair stays face up |
//! | `MEMORY_CONGRATS_DELAY_MS` | 500 | Delay before the congratulation notice |
//!
//! Values that fail to parse fall back to the default.

use crate::types::{CONGRATS_DELAY_MS, MISMATCH_DELAY_MS, TIMER_PERIOD_MS};

/// Seed used when none is configured.
pub const DEFAULT_SEED: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// `None` lets the runner pick one.
    pub seed: Option<u32>,
    pub mismatch_delay_ms: u32,
    pub congrats_delay_ms: u32,
    pub timer_period_ms: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            mismatch_delay_ms: MISMATCH_DELAY_MS,
            congrats_delay_ms: CONGRATS_DELAY_MS,
            timer_period_ms: TIMER_PERIOD_MS,
        }
    }
}

impl GameConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from any key/value source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let parse = |key: &str| lookup(key).and_then(|s| s.trim().parse::<u32>().ok());
        let defaults = Self::default();

        Self {
            seed: parse("MEMORY_SEED"),
            mismatch_delay_ms: parse("MEMORY_MISMATCH_DELAY_MS")
                .unwrap_or(defaults.mismatch_delay_ms),
            congrats_delay_ms: parse("MEMORY_CONGRATS_DELAY_MS")
                .unwrap_or(defaults.congrats_delay_ms),
            timer_period_ms: defaults.timer_period_ms,
        }
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn seed_or_default(&self) -> u32 {
        self.seed.unwrap_or(DEFAULT_SEED)
    }
}
