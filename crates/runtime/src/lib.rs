//! Simulation runtime for the enemy AI.
//!
//! The core never owns agents; this crate does. A [`World`] holds a level
//! and its enemies, places them from a layout or a [`Roster`], ticks them in
//! order against one target, and removes the dead when asked.
//!
//! Modules are organized by responsibility:
//! - [`world`] hosts the world and its tick loop
//! - [`spawn`] places enemies on levels without fixed starts
//! - [`roster`] sizes those enemy groups per level
//! - [`error`] carries the runtime error type
pub mod error;
pub mod roster;
pub mod spawn;
pub mod world;

pub use error::{Result, RuntimeError};
pub use roster::Roster;
pub use spawn::SpawnPlanner;
pub use world::{TickReport, World};
