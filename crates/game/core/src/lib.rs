//! Enemy AI core: grid pathfinding and per-tick behavior evaluation.
//!
//! `undead-core` knows nothing about windows, sprites or scores. It consumes
//! a read-only [`LevelOracle`] and a target position, and mutates its
//! [`Agent`]s' position, facing and movement state once per tick. The
//! owning simulation decides when agents spawn, tick and die.
pub mod agent;
pub mod config;
pub mod env;
pub mod error;
pub mod geometry;
pub mod pathfinding;

pub use agent::{
    Agent, AgentBody, AgentId, AgentKind, AgentSnapshot, AgentTree, MoveOutcome, PatrolRoute,
    PerceptionState, Strategy, has_line_of_sight,
};
pub use behavior_tree::Status;
pub use config::{
    AiConfig, FallbackStrategy, KindProfile, PatrolAdvance, PatrolConfig, SearchConfig,
};
pub use env::{DynLevel, LevelDimensions, LevelOracle, RngStream, TileGrid, TileKind};
pub use error::{ConfigError, CoreError, ErrorSeverity, GridError, SpawnError};
pub use geometry::{Facing, Point, Rect, Size, TilePos};
pub use pathfinding::{Path, Pathfinder, find_path};
