//! Builder utilities for ergonomic behavior tree construction.
//!
//! This module provides helper functions to reduce boilerplate when building
//! behavior trees. Instead of writing verbose `Box::new(Sequence::new(vec![...]))`,
//! you can use shorter functions like `sequence(vec![...])`.

use crate::{Action, Behavior, Condition, Selector, Sequence, Status};

/// Creates a sequence node.
///
/// Shorthand for `Box::new(Sequence::new(children))`.
#[inline]
pub fn sequence<C: 'static, E: ?Sized + 'static>(
    children: Vec<Box<dyn Behavior<C, E>>>,
) -> Box<dyn Behavior<C, E>> {
    Box::new(Sequence::new(children))
}

/// Creates a selector node.
///
/// Shorthand for `Box::new(Selector::new(children))`.
#[inline]
pub fn selector<C: 'static, E: ?Sized + 'static>(
    children: Vec<Box<dyn Behavior<C, E>>>,
) -> Box<dyn Behavior<C, E>> {
    Box::new(Selector::new(children))
}

/// Creates a condition leaf from a predicate.
#[inline]
pub fn condition<C: 'static, E: ?Sized + 'static, F>(predicate: F) -> Box<dyn Behavior<C, E>>
where
    F: Fn(&C, &E) -> bool + Send + Sync + 'static,
{
    Box::new(Condition::new(predicate))
}

/// Creates an action leaf from an operation.
#[inline]
pub fn action<C: 'static, E: ?Sized + 'static, F>(operation: F) -> Box<dyn Behavior<C, E>>
where
    F: Fn(&mut C, &E) -> Status + Send + Sync + 'static,
{
    Box::new(Action::new(operation))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Guard {
        open: bool,
        log: Vec<&'static str>,
    }

    fn tree() -> Box<dyn Behavior<Guard>> {
        selector(vec![
            sequence(vec![
                condition(|g: &Guard, _: &()| g.open),
                action(|g: &mut Guard, _: &()| {
                    g.log.push("enter");
                    Status::Success
                }),
            ]),
            action(|g: &mut Guard, _: &()| {
                g.log.push("knock");
                Status::Success
            }),
        ])
    }

    #[test]
    fn fallback_runs_when_precondition_fails() {
        let root = tree();
        let mut guard = Guard {
            open: false,
            log: Vec::new(),
        };

        assert_eq!(root.tick(&mut guard, &()), Status::Success);
        guard.open = true;
        assert_eq!(root.tick(&mut guard, &()), Status::Success);
        assert_eq!(guard.log, vec!["knock", "enter"]);
    }
}
