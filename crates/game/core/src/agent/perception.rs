use tracing::trace;

use super::AgentBody;
use crate::env::LevelOracle;
use crate::geometry::Point;

/// Per-agent sensing state. Refreshed at the start of every tick, before the
/// behavior tree runs; only the fields below carry over between ticks.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PerceptionState {
    pub target_visible: bool,
    pub target_close: bool,
    /// Centre of the target the last time it was seen. Sticky: hiding the
    /// target never clears it.
    pub last_known_target: Option<Point>,
    pub random_move_cooldown: u32,
    pub patrol: Option<PatrolRoute>,
}

/// Fixed patrol points chosen at spawn, plus the one currently targeted.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PatrolRoute {
    points: Vec<Point>,
    index: usize,
}

impl PatrolRoute {
    /// Returns `None` for an empty point list.
    pub fn new(points: Vec<Point>) -> Option<Self> {
        if points.is_empty() {
            return None;
        }
        Some(Self { points, index: 0 })
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> Point {
        self.points[self.index]
    }

    pub fn advance(&mut self) {
        self.index = (self.index + 1) % self.points.len();
    }
}

/// Samples the segment `from -> to` every `step` units and reports whether
/// none of the samples fall on a blocked tile.
///
/// Targets further than `range` are never visible. At least one sample is
/// taken, so a target standing inside a wall is hidden even at point-blank
/// range.
pub fn has_line_of_sight<L: LevelOracle + ?Sized>(
    level: &L,
    from: Point,
    to: Point,
    range: f32,
    step: f32,
) -> bool {
    let delta = to - from;
    let distance = delta.length();
    if distance > range {
        return false;
    }

    let samples = ((distance / step) as u32).max(1);
    (1..=samples).all(|i| {
        let sample = from + delta * (i as f32 / samples as f32);
        !level.is_tile_blocked(level.tile_of(sample))
    })
}

impl AgentBody {
    /// Updates visibility, proximity, sticky memory and the wander cooldown
    /// for a target centred on `target`.
    pub(crate) fn refresh_perception<L: LevelOracle + ?Sized>(&mut self, target: Point, level: &L) {
        let center = self.center();
        let visible = has_line_of_sight(
            level,
            center,
            target,
            self.profile.visibility_range,
            self.tuning.sight_sample_step,
        );

        let perception = &mut self.perception;
        perception.target_visible = visible;
        perception.target_close = center.distance(target) < self.profile.close_distance;
        if visible {
            perception.last_known_target = Some(target);
        }
        perception.random_move_cooldown = perception.random_move_cooldown.saturating_sub(1);

        trace!(
            agent = %self.id,
            visible,
            close = perception.target_close,
            cooldown = perception.random_move_cooldown,
            "perception refreshed"
        );
    }
}
