//! Lightweight behavior tree library for per-tick game agents.
//!
//! This library provides a minimal, deterministic behavior tree implementation:
//!
//! - **No delta time**: Every tick completes immediately
//! - **No Running state**: Actions either succeed or fail instantly
//! - **Stateless structure**: Trees are built once and never mutated; all
//!   runtime state lives in the context passed to [`Behavior::tick`]
//! - **Zero dependencies**: Pure Rust with no external crates
//!
//! # Architecture
//!
//! - [`Behavior`]: Core trait for all nodes, generic over a mutable context
//!   and a read-only environment
//! - [`Status`]: Success or Failure (no Running state)
//! - Composite nodes: [`Sequence`], [`Selector`]
//! - Leaf nodes: [`Condition`], [`Action`]

pub mod behavior;
pub mod builder;
pub mod composite;
pub mod leaf;
pub mod status;

// Re-export core types for ergonomic API
pub use behavior::Behavior;
pub use composite::{Selector, Sequence};
pub use leaf::{Action, Condition};
pub use status::Status;
