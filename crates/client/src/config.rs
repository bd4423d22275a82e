//! Driver settings resolved from flags, environment and defaults.
use std::env;
use std::str::FromStr;

use crate::cli::Cli;

/// Run parameters after precedence is applied: flag, then environment,
/// then default.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunSettings {
    pub seed: u64,
    pub ticks: u64,
    /// Ticks between progress summaries.
    pub summary_every: u64,
}

impl Default for RunSettings {
    fn default() -> Self {
        Self {
            seed: 0,
            ticks: 600,
            summary_every: 60,
        }
    }
}

impl RunSettings {
    /// Construct settings from process environment variables.
    ///
    /// Environment variables:
    /// - `UNDEAD_SEED` - World seed (default: 0)
    /// - `UNDEAD_TICKS` - Ticks to simulate (default: 600)
    pub fn from_env() -> Self {
        let mut settings = Self::default();
        if let Some(seed) = read_env::<u64>("UNDEAD_SEED") {
            settings.seed = seed;
        }
        if let Some(ticks) = read_env::<u64>("UNDEAD_TICKS") {
            settings.ticks = ticks;
        }
        settings
    }

    /// Flags override whatever the environment provided.
    pub fn with_cli(mut self, cli: &Cli) -> Self {
        if let Some(seed) = cli.seed {
            self.seed = seed;
        }
        if let Some(ticks) = cli.ticks {
            self.ticks = ticks;
        }
        self
    }
}

fn read_env<T: FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|value| value.parse().ok())
}
