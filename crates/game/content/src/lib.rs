//! Data-driven level content and loaders.
//!
//! This crate supplies the collaborators the AI core consumes:
//! - Level layouts (tile grid plus start positions)
//! - Built-in levels (embedded RON)
//! - Seeded procedural levels
//! - AI configuration (TOML)
//!
//! Content never appears inside agent state; the runtime turns it into a
//! world.

pub mod generator;
pub mod layout;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use generator::LevelGenerator;
pub use layout::LevelLayout;

#[cfg(feature = "loaders")]
pub use loaders::{
    BUILTIN_LEVEL_COUNT, ConfigLoader, LevelLoader, LoadResult, builtin_level,
};
