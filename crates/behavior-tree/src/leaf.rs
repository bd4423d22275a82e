//! Leaf behavior nodes backed by closures.
//!
//! Leaves are where a tree touches its owner. Instead of one struct per
//! check or per action, [`Condition`] and [`Action`] wrap a closure so the
//! owner can wire its own predicates and operations in without subclassing.

use crate::{Behavior, Status};

type Predicate<C, E> = Box<dyn Fn(&C, &E) -> bool + Send + Sync>;
type Operation<C, E> = Box<dyn Fn(&mut C, &E) -> Status + Send + Sync>;

/// Wraps a pure predicate over the current context.
///
/// Conditions receive the context immutably and therefore cannot mutate it.
/// `true` maps to `Success`, `false` to `Failure`.
pub struct Condition<C, E: ?Sized = ()> {
    predicate: Predicate<C, E>,
}

impl<C, E: ?Sized> Condition<C, E> {
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&C, &E) -> bool + Send + Sync + 'static,
    {
        Self {
            predicate: Box::new(predicate),
        }
    }
}

impl<C, E: ?Sized> Behavior<C, E> for Condition<C, E> {
    #[inline]
    fn tick(&self, ctx: &mut C, env: &E) -> Status {
        Status::from((self.predicate)(ctx, env))
    }
}

/// Wraps a state-mutating operation.
///
/// The returned status reports whether the operation judged itself
/// successful. For movement actions that means "an action was taken",
/// not "the destination was reached".
pub struct Action<C, E: ?Sized = ()> {
    operation: Operation<C, E>,
}

impl<C, E: ?Sized> Action<C, E> {
    pub fn new<F>(operation: F) -> Self
    where
        F: Fn(&mut C, &E) -> Status + Send + Sync + 'static,
    {
        Self {
            operation: Box::new(operation),
        }
    }
}

impl<C, E: ?Sized> Behavior<C, E> for Action<C, E> {
    #[inline]
    fn tick(&self, ctx: &mut C, env: &E) -> Status {
        (self.operation)(ctx, env)
    }
}
