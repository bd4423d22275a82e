//! Composite behavior nodes.
//!
//! Composite nodes control the execution flow of multiple child behaviors.
//! This module provides the fundamental building blocks for creating
//! fallback chains: [`Sequence`] (AND logic) and [`Selector`] (OR logic).

use crate::{Behavior, Status};

/// Boxed child node stored by composites.
type Child<C, E> = Box<dyn Behavior<C, E>>;

/// Executes child behaviors in sequence until one fails.
///
/// # Semantics
///
/// A `Sequence` node evaluates its children from left to right:
/// - If a child returns `Failure`, the sequence **stops immediately** and returns `Failure`
/// - If a child returns `Success`, the sequence **continues** to the next child
/// - If all children return `Success`, the sequence returns `Success`
///
/// This is analogous to a short-circuited logical AND (&&) operation.
pub struct Sequence<C, E: ?Sized = ()> {
    children: Vec<Child<C, E>>,
}

impl<C, E: ?Sized> Sequence<C, E> {
    /// Creates a new sequence with the given child behaviors.
    ///
    /// # Panics
    ///
    /// Panics if `children` is empty. A sequence with no children is
    /// meaningless and likely indicates a programming error.
    pub fn new(children: Vec<Child<C, E>>) -> Self {
        assert!(
            !children.is_empty(),
            "Sequence must have at least one child"
        );
        Self { children }
    }
}

impl<C, E: ?Sized> Behavior<C, E> for Sequence<C, E> {
    fn tick(&self, ctx: &mut C, env: &E) -> Status {
        for child in &self.children {
            match child.tick(ctx, env) {
                Status::Success => continue,               // Move to next child
                Status::Failure => return Status::Failure, // Short-circuit
            }
        }
        Status::Success
    }
}

/// Executes child behaviors in order until one succeeds.
///
/// # Semantics
///
/// A `Selector` node evaluates its children from left to right:
/// - If a child returns `Success`, the selector **stops immediately** and returns `Success`
/// - If a child returns `Failure`, the selector **continues** to the next child
/// - If all children return `Failure`, the selector returns `Failure`
///
/// This is analogous to a short-circuited logical OR (||) operation, and is
/// how fallback priority is expressed: earlier children win.
pub struct Selector<C, E: ?Sized = ()> {
    children: Vec<Child<C, E>>,
}

impl<C, E: ?Sized> Selector<C, E> {
    /// Creates a new selector with the given child behaviors.
    ///
    /// # Panics
    ///
    /// Panics if `children` is empty. A selector with no children is
    /// meaningless and likely indicates a programming error.
    pub fn new(children: Vec<Child<C, E>>) -> Self {
        assert!(
            !children.is_empty(),
            "Selector must have at least one child"
        );
        Self { children }
    }
}

impl<C, E: ?Sized> Behavior<C, E> for Selector<C, E> {
    fn tick(&self, ctx: &mut C, env: &E) -> Status {
        for child in &self.children {
            match child.tick(ctx, env) {
                Status::Success => return Status::Success, // Short-circuit
                Status::Failure => continue,               // Try next child
            }
        }
        Status::Failure
    }
}
