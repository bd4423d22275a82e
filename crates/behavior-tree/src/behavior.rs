//! Core behavior trait.
//!
//! This module defines the [`Behavior`] trait, which is the fundamental
//! abstraction for all behavior tree nodes. The trait is generic over a
//! mutable context type `C` and a read-only environment type `E`.
//!
//! Splitting the two lets a tree be stored next to the state it drives
//! (the context) while the world it reads (the environment) is only
//! borrowed for the duration of a tick.

use crate::Status;

/// A behavior tree node that can be evaluated against a context.
pub trait Behavior<C, E: ?Sized = ()>: Send + Sync {
    /// Evaluate this behavior node against the given context.
    ///
    /// # Arguments
    ///
    /// * `ctx` - Mutable reference to the context/blackboard. Nodes can read
    ///   state and modify it (e.g., to move the agent or store a path).
    /// * `env` - Read-only environment shared by every node in this tick.
    ///
    /// # Returns
    ///
    /// - `Status::Success` if the behavior succeeded
    /// - `Status::Failure` if the behavior failed
    fn tick(&self, ctx: &mut C, env: &E) -> Status;
}

/// Blanket implementation for boxed behaviors.
///
/// This allows `Box<dyn Behavior<C, E>>` to also implement `Behavior<C, E>`,
/// enabling dynamic dispatch and heterogeneous collections of nodes.
impl<C, E: ?Sized> Behavior<C, E> for Box<dyn Behavior<C, E>> {
    #[inline]
    fn tick(&self, ctx: &mut C, env: &E) -> Status {
        (**self).tick(ctx, env)
    }
}
