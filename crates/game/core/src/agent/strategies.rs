//! Leaf behaviors of the agent tree.
//!
//! Every function here has the shape the tree's `Condition` and `Action`
//! leaves expect, so the tree is wired from plain function items.

use behavior_tree::Status;
use rand::Rng;
use tracing::{debug, trace};

use super::{AgentBody, Strategy};
use crate::config::PatrolAdvance;
use crate::env::{DynLevel, LevelOracle};
use crate::geometry::Facing;
use crate::pathfinding::Pathfinder;

/// Share of a full step below which a patrol move counts as stalled.
const PATROL_STALL_FRACTION: f32 = 0.05;

pub fn target_visible(body: &AgentBody, _level: &DynLevel) -> bool {
    body.perception.target_visible
}

pub fn has_path(body: &AgentBody, _level: &DynLevel) -> bool {
    !body.path.is_empty()
}

/// Moves straight at the last known target position.
///
/// Succeeds whenever a position is remembered, whether or not the move made
/// progress.
pub fn direct_chase(body: &mut AgentBody, level: &DynLevel) -> Status {
    let Some(target) = body.perception.last_known_target else {
        return Status::Failure;
    };

    body.strategy = Some(Strategy::Chase);
    body.step_toward(target, level);
    body.moving = true;
    Status::Success
}

/// Replaces the stored path with a fresh search to the last known target.
/// An empty result still counts as success; `has_path` filters it.
pub fn recompute_path_to_target(body: &mut AgentBody, level: &DynLevel) -> Status {
    let Some(target) = body.perception.last_known_target else {
        return Status::Failure;
    };

    body.path = Pathfinder::new(level)
        .with_expansion_limit(body.tuning.max_expansions)
        .find_path(body.center(), target);

    if body.path.is_empty() {
        debug!(agent = %body.id, ?target, "last known target unreachable");
    } else {
        trace!(agent = %body.id, waypoints = body.path.len(), "path recomputed");
    }
    Status::Success
}

/// Walks towards the head waypoint, popping it once within one step.
///
/// A head inside the agent's own tile also counts as reached while more
/// waypoints follow: replanned paths always start at the current tile.
pub fn follow_path(body: &mut AgentBody, level: &DynLevel) -> Status {
    let Some(mut waypoint) = body.path.head() else {
        return Status::Failure;
    };

    body.strategy = Some(Strategy::FollowPath);
    let center = body.center();
    let in_own_tile = level.tile_of(waypoint) == level.tile_of(center) && body.path.len() > 1;
    if in_own_tile || center.distance(waypoint) < body.profile.speed {
        body.path.pop_head();
        match body.path.head() {
            Some(next) => waypoint = next,
            None => {
                body.moving = false;
                return Status::Success;
            }
        }
    }

    body.step_toward(waypoint, level);
    body.moving = true;
    Status::Success
}

/// Takes a single-axis step in a random direction. Bumping into something
/// starts an idle cooldown.
pub fn random_wander(body: &mut AgentBody, level: &DynLevel) -> Status {
    body.strategy = Some(Strategy::Wander);
    if body.perception.random_move_cooldown > 0 {
        body.moving = false;
        return Status::Success;
    }

    let facing = Facing::ALL[body.rng.gen_range(0..Facing::ALL.len())];
    body.facing = facing;
    let outcome = body.slide_by(facing.unit() * body.profile.speed, level);

    if outcome.moved() {
        body.moving = true;
    } else {
        body.perception.random_move_cooldown = body.tuning.wander_cooldown_ticks;
        body.moving = false;
        debug!(agent = %body.id, ?facing, "wander blocked, cooling down");
    }
    Status::Success
}

/// Heads for the current patrol point.
///
/// With [`PatrolAdvance::OnArrival`] the route moves on once the agent is
/// within one step of the point, or when the step covered almost no ground
/// (pinned against a wall, the free axis only creeps towards the point).
/// [`PatrolAdvance::EveryTick`] moves on unconditionally.
pub fn waypoint_patrol(body: &mut AgentBody, level: &DynLevel) -> Status {
    let Some(point) = body.perception.patrol.as_ref().map(|route| route.current()) else {
        return Status::Failure;
    };

    body.strategy = Some(Strategy::Patrol);
    let before = body.center();
    body.step_toward(point, level);
    body.moving = true;

    let advance = match body.tuning.patrol_advance {
        PatrolAdvance::EveryTick => true,
        PatrolAdvance::OnArrival => {
            let speed = body.profile.speed;
            let after = body.center();
            after.distance(before) < speed * PATROL_STALL_FRACTION
                || after.distance(point) < speed
        }
    };
    if advance && let Some(route) = body.perception.patrol.as_mut() {
        route.advance();
        trace!(agent = %body.id, index = route.index(), "patrol point advanced");
    }
    Status::Success
}
