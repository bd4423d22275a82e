//! Headless driver for the enemy AI.
//!
//! Resolves a level, an AI configuration and run settings from the command
//! line and environment, then ticks a [`undead_runtime::World`] against a
//! fixed target while logging summaries.
pub mod cli;
pub mod config;
pub mod driver;

pub use cli::Cli;
pub use config::RunSettings;
pub use driver::{LevelSource, Scenario, core_failure, log_failure};
