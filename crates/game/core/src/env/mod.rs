//! Collaborators the AI core reads from: the static level and seeded randomness.

mod level;
pub mod rng;

pub use level::{DynLevel, LevelDimensions, LevelOracle, TileGrid, TileKind};
pub use rng::{RngStream, agent_rng, compute_seed};
