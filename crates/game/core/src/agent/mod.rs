//! Enemy agents: per-agent state plus the behavior tree that drives it.
//!
//! An [`Agent`] pairs an [`AgentBody`] (everything the tree reads and
//! mutates) with its own [`AgentTree`]. Kinds differ only by
//! [`KindProfile`] data; there is one agent type.

mod kind;
mod motion;
mod perception;
pub mod strategies;
mod tree;

pub use kind::{AgentId, AgentKind, Strategy};
pub use motion::MoveOutcome;
pub use perception::{PatrolRoute, PerceptionState, has_line_of_sight};
pub use tree::AgentTree;

use behavior_tree::Status;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, trace, warn};

use crate::config::{AiConfig, FallbackStrategy, KindProfile, PatrolAdvance, PatrolConfig};
use crate::env::{DynLevel, LevelOracle, RngStream, agent_rng};
use crate::error::SpawnError;
use crate::geometry::{Facing, Point, Rect, Size, TilePos};
use crate::pathfinding::Path;

/// Engine knobs copied out of [`AiConfig`] at spawn so a tick never needs
/// the config.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Tuning {
    pub(crate) sight_sample_step: f32,
    pub(crate) wander_cooldown_ticks: u32,
    pub(crate) patrol_advance: PatrolAdvance,
    pub(crate) max_expansions: Option<usize>,
}

impl Tuning {
    fn from_config(config: &AiConfig) -> Self {
        Self {
            sight_sample_step: config.sight_sample_step,
            wander_cooldown_ticks: config.wander_cooldown_ticks,
            patrol_advance: config.patrol.advance,
            max_expansions: config.search.max_expansions,
        }
    }
}

/// The mutable side of an agent: the context its behavior tree ticks on.
///
/// `position` is the top-left corner of the bounding box.
#[derive(Clone, Debug)]
pub struct AgentBody {
    pub(crate) id: AgentId,
    pub(crate) kind: AgentKind,
    pub(crate) profile: KindProfile,
    pub(crate) tuning: Tuning,
    pub(crate) position: Point,
    pub(crate) size: Size,
    pub(crate) facing: Facing,
    pub(crate) moving: bool,
    pub(crate) health: u32,
    pub(crate) perception: PerceptionState,
    pub(crate) path: Path,
    pub(crate) strategy: Option<Strategy>,
    pub(crate) rng: ChaCha8Rng,
}

impl AgentBody {
    pub fn center(&self) -> Point {
        self.bounds().center()
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_origin(self.position, self.size)
    }
}

/// One enemy instance.
pub struct Agent {
    pub(crate) body: AgentBody,
    tree: AgentTree,
}

impl Agent {
    /// Places a new agent with its bounding box's top-left at `position`.
    ///
    /// The box is one tile square. Patrolling kinds draw their patrol points
    /// here, from a stream seeded by `world_seed` and `id`. `config` is
    /// expected to have passed [`AiConfig::validate`].
    pub fn spawn<L: LevelOracle + ?Sized>(
        id: AgentId,
        kind: AgentKind,
        position: Point,
        config: &AiConfig,
        level: &L,
        world_seed: u64,
    ) -> Result<Self, SpawnError> {
        let profile = *config.profile(kind);
        let size = Size::square(level.tile_size());

        if level.is_region_blocked(Rect::from_origin(position, size)) {
            return Err(SpawnError::Blocked { position });
        }

        let patrol = match profile.fallback {
            FallbackStrategy::Patrol => {
                let mut rng = agent_rng(world_seed, id.0, RngStream::Spawn);
                Some(generate_patrol_route(level, size, &config.patrol, &mut rng)?)
            }
            FallbackStrategy::Wander => None,
        };

        debug!(
            agent = %id,
            %kind,
            x = position.x,
            y = position.y,
            patrol_points = patrol.as_ref().map_or(0, |route| route.points().len()),
            "agent spawned"
        );

        Ok(Self {
            body: AgentBody {
                id,
                kind,
                profile,
                tuning: Tuning::from_config(config),
                position,
                size,
                facing: Facing::default(),
                moving: false,
                health: profile.health,
                perception: PerceptionState {
                    patrol,
                    ..PerceptionState::default()
                },
                path: Path::empty(),
                strategy: None,
                rng: agent_rng(world_seed, id.0, RngStream::Behavior),
            },
            tree: tree::build(profile.fallback),
        })
    }

    /// Runs one tick: refresh perception against a target centred on
    /// `target`, then evaluate the behavior tree once.
    pub fn update(&mut self, target: Point, level: &DynLevel) -> Status {
        self.body.strategy = None;
        self.body.refresh_perception(target, level);
        let status = self.tree.tick(&mut self.body, level);

        trace!(
            agent = %self.body.id,
            ?status,
            strategy = ?self.body.strategy,
            x = self.body.position.x,
            y = self.body.position.y,
            "agent ticked"
        );
        status
    }

    /// Applies damage and returns the remaining health.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        self.body.health = self.body.health.saturating_sub(amount);
        debug!(agent = %self.body.id, amount, health = self.body.health, "agent damaged");
        self.body.health
    }

    pub fn is_alive(&self) -> bool {
        self.body.health > 0
    }

    pub fn id(&self) -> AgentId {
        self.body.id
    }

    pub fn kind(&self) -> AgentKind {
        self.body.kind
    }

    pub fn profile(&self) -> &KindProfile {
        &self.body.profile
    }

    pub fn position(&self) -> Point {
        self.body.position
    }

    pub fn center(&self) -> Point {
        self.body.center()
    }

    pub fn bounds(&self) -> Rect {
        self.body.bounds()
    }

    pub fn facing(&self) -> Facing {
        self.body.facing
    }

    pub fn is_moving(&self) -> bool {
        self.body.moving
    }

    pub fn health(&self) -> u32 {
        self.body.health
    }

    pub fn perception(&self) -> &PerceptionState {
        &self.body.perception
    }

    pub fn path(&self) -> &Path {
        &self.body.path
    }

    /// Strategy executed on the last tick, `None` before the first tick.
    pub fn strategy(&self) -> Option<Strategy> {
        self.body.strategy
    }

    pub fn snapshot(&self) -> AgentSnapshot {
        let body = &self.body;
        AgentSnapshot {
            id: body.id,
            kind: body.kind,
            position: body.position,
            center: body.center(),
            facing: body.facing,
            moving: body.moving,
            health: body.health,
            target_visible: body.perception.target_visible,
            target_close: body.perception.target_close,
            last_known_target: body.perception.last_known_target,
            path_len: body.path.len(),
            strategy: body.strategy,
        }
    }
}

impl core::fmt::Debug for Agent {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Agent").field("body", &self.body).finish_non_exhaustive()
    }
}

/// Observable agent state after a tick.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentSnapshot {
    pub id: AgentId,
    pub kind: AgentKind,
    pub position: Point,
    pub center: Point,
    pub facing: Facing,
    pub moving: bool,
    pub health: u32,
    pub target_visible: bool,
    pub target_close: bool,
    pub last_known_target: Option<Point>,
    pub path_len: usize,
    pub strategy: Option<Strategy>,
}

/// Rejection-samples interior tiles where a `size` box fits.
///
/// Points are the box centre when placed on the sampled tile. Running short
/// of `point_count` is tolerated; finding none is an error.
fn generate_patrol_route<L: LevelOracle + ?Sized>(
    level: &L,
    size: Size,
    config: &PatrolConfig,
    rng: &mut ChaCha8Rng,
) -> Result<PatrolRoute, SpawnError> {
    let dims = level.dimensions();
    if dims.width < 3 || dims.height < 3 {
        return Err(SpawnError::NoPatrolPoints { attempts: 0 });
    }
    let max_x = dims.width as i32 - 2;
    let max_y = dims.height as i32 - 2;
    let half = Point::new(size.width / 2.0, size.height / 2.0);

    let mut points = Vec::with_capacity(config.point_count);
    let mut attempts = 0;
    for _ in 0..config.point_count {
        for _ in 0..config.sample_attempts {
            attempts += 1;
            let tile = TilePos::new(rng.gen_range(1..=max_x), rng.gen_range(1..=max_y));
            let origin = level.tile_origin(tile);
            if !level.is_region_blocked(Rect::from_origin(origin, size)) {
                points.push(origin + half);
                break;
            }
        }
    }

    if points.len() < config.point_count {
        warn!(
            found = points.len(),
            wanted = config.point_count,
            attempts,
            "patrol route is short"
        );
    }
    PatrolRoute::new(points).ok_or(SpawnError::NoPatrolPoints { attempts })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{TileGrid, TileKind};

    fn bordered(width: u32, height: u32) -> TileGrid {
        let mut grid = TileGrid::filled(width, height, 32.0, TileKind::Floor).unwrap();
        for x in 0..width as i32 {
            grid.set_tile(TilePos::new(x, 0), TileKind::Wall);
            grid.set_tile(TilePos::new(x, height as i32 - 1), TileKind::Wall);
        }
        for y in 0..height as i32 {
            grid.set_tile(TilePos::new(0, y), TileKind::Wall);
            grid.set_tile(TilePos::new(width as i32 - 1, y), TileKind::Wall);
        }
        grid
    }

    #[test]
    fn spawn_uses_kind_profile() {
        let grid = bordered(8, 8);
        let config = AiConfig::default();

        let zombie =
            Agent::spawn(AgentId(1), AgentKind::Zombie, Point::new(32.0, 32.0), &config, &grid, 1)
                .unwrap();
        let mummy =
            Agent::spawn(AgentId(2), AgentKind::Mummy, Point::new(64.0, 64.0), &config, &grid, 1)
                .unwrap();

        assert_eq!(zombie.health(), 1);
        assert!(zombie.perception().patrol.is_none());
        assert_eq!(mummy.health(), 2);
        assert_eq!(mummy.perception().patrol.as_ref().unwrap().points().len(), 4);
        assert_eq!(zombie.center(), Point::new(48.0, 48.0));
        assert_eq!(zombie.facing(), Facing::Down);
    }

    #[test]
    fn spawn_into_wall_is_rejected() {
        let grid = bordered(8, 8);
        let err = Agent::spawn(
            AgentId(1),
            AgentKind::Zombie,
            Point::new(0.0, 32.0),
            &AiConfig::default(),
            &grid,
            1,
        )
        .unwrap_err();
        assert!(matches!(err, SpawnError::Blocked { .. }));
    }

    #[test]
    fn patrol_points_are_walkable_tile_centres() {
        let mut grid = bordered(10, 10);
        grid.set_tile(TilePos::new(4, 4), TileKind::Water);
        let mut rng = agent_rng(9, 3, RngStream::Spawn);

        let route =
            generate_patrol_route(&grid, Size::square(32.0), &PatrolConfig::default(), &mut rng)
                .unwrap();

        for point in route.points() {
            let tile = grid.tile_of(*point);
            assert!(!grid.is_tile_blocked(tile));
            assert_eq!(grid.tile_center(tile), *point);
        }
    }

    #[test]
    fn patrol_without_floor_fails() {
        let grid = bordered(3, 3);
        // The only interior tile is walled in too.
        let mut grid = grid;
        grid.set_tile(TilePos::new(1, 1), TileKind::Wall);
        let config = PatrolConfig {
            sample_attempts: 5,
            ..PatrolConfig::default()
        };
        let mut rng = agent_rng(1, 1, RngStream::Spawn);

        let err =
            generate_patrol_route(&grid, Size::square(32.0), &config, &mut rng).unwrap_err();
        assert_eq!(err, SpawnError::NoPatrolPoints { attempts: 20 });
    }

    #[test]
    fn damage_saturates() {
        let grid = bordered(5, 5);
        let mut mummy = Agent::spawn(
            AgentId(4),
            AgentKind::Mummy,
            Point::new(32.0, 32.0),
            &AiConfig::default(),
            &grid,
            1,
        )
        .unwrap();

        assert_eq!(mummy.take_damage(1), 1);
        assert!(mummy.is_alive());
        assert_eq!(mummy.take_damage(5), 0);
        assert!(!mummy.is_alive());
    }

    #[test]
    fn same_seed_same_wander() {
        let grid = bordered(12, 12);
        let config = AiConfig::default();
        let far_away = Point::new(10_000.0, 10_000.0);

        let run = || {
            let mut agent = Agent::spawn(
                AgentId(7),
                AgentKind::Zombie,
                Point::new(160.0, 160.0),
                &config,
                &grid,
                42,
            )
            .unwrap();
            (0..50)
                .map(|_| {
                    agent.update(far_away, &grid);
                    agent.position()
                })
                .collect::<Vec<_>>()
        };

        assert_eq!(run(), run());
    }
}
