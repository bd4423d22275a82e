use super::AgentBody;
use crate::env::LevelOracle;
use crate::geometry::{Facing, Point, Rect};

/// Which axes of an attempted move were applied.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MoveOutcome {
    pub moved_x: bool,
    pub moved_y: bool,
}

impl MoveOutcome {
    pub fn moved(self) -> bool {
        self.moved_x || self.moved_y
    }
}

impl AgentBody {
    /// Applies `delta` one axis at a time, X first. Each axis is kept only if
    /// the bounding box at the new position is clear, so a diagonal move into
    /// a wall slides along it.
    pub(crate) fn slide_by<L: LevelOracle + ?Sized>(&mut self, delta: Point, level: &L) -> MoveOutcome {
        let mut outcome = MoveOutcome::default();

        if delta.x != 0.0 {
            let next = Point::new(self.position.x + delta.x, self.position.y);
            if !level.is_region_blocked(Rect::from_origin(next, self.size)) {
                self.position = next;
                outcome.moved_x = true;
            }
        }

        if delta.y != 0.0 {
            let next = Point::new(self.position.x, self.position.y + delta.y);
            if !level.is_region_blocked(Rect::from_origin(next, self.size)) {
                self.position = next;
                outcome.moved_y = true;
            }
        }

        outcome
    }

    /// Steps one tick's worth of speed from the agent's centre towards `goal`,
    /// turning to face the dominant axis of the intended move.
    pub(crate) fn step_toward<L: LevelOracle + ?Sized>(&mut self, goal: Point, level: &L) -> MoveOutcome {
        let offset = goal - self.center();
        let length = offset.length().max(1.0);
        let delta = offset * (self.profile.speed / length);

        if let Some(facing) = Facing::from_vector(delta) {
            self.facing = facing;
        }
        self.slide_by(delta, level)
    }
}
