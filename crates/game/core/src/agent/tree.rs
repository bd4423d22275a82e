use behavior_tree::Behavior;
use behavior_tree::builder::{action, condition, selector, sequence};

use super::AgentBody;
use super::strategies;
use crate::config::FallbackStrategy;
use crate::env::DynLevel;

/// Boxed decision tree owned by one agent. The level is borrowed per tick.
pub type AgentTree = Box<dyn Behavior<AgentBody, DynLevel>>;

/// Builds the priority chain every agent runs:
///
/// ```text
/// Selector(
///   Sequence(Condition(target_visible), Action(direct_chase)),
///   Sequence(Action(recompute_path_to_target), Condition(has_path), Action(follow_path)),
///   Action(fallback),
/// )
/// ```
pub fn build(fallback: FallbackStrategy) -> AgentTree {
    let fallback = match fallback {
        FallbackStrategy::Wander => action(strategies::random_wander),
        FallbackStrategy::Patrol => action(strategies::waypoint_patrol),
    };

    selector(vec![
        sequence(vec![
            condition(strategies::target_visible),
            action(strategies::direct_chase),
        ]),
        sequence(vec![
            action(strategies::recompute_path_to_target),
            condition(strategies::has_path),
            action(strategies::follow_path),
        ]),
        fallback,
    ])
}
