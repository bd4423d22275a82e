//! The owning simulation: one level, its enemies, and the tick loop.

use std::iter;

use tracing::{debug, info, trace};
use undead_content::LevelLayout;
use undead_core::env::{RngStream, agent_rng};
use undead_core::{
    Agent, AgentId, AgentKind, AgentSnapshot, AiConfig, DynLevel, LevelOracle, Point, Strategy,
    TilePos,
};

use crate::error::{Result, RuntimeError};
use crate::roster::Roster;
use crate::spawn::SpawnPlanner;

/// Agent id 0 never names an agent; its streams belong to the world.
const WORLD_STREAM_ID: u32 = 0;

/// Counts of what the agents did during one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    pub tick: u64,
    pub agents: usize,
    /// Agents that could see the target this tick.
    pub visible: usize,
    pub chasing: usize,
    pub following: usize,
    pub wandering: usize,
    pub patrolling: usize,
}

impl TickReport {
    fn record(&mut self, agent: &Agent) {
        self.agents += 1;
        if agent.perception().target_visible {
            self.visible += 1;
        }
        match agent.strategy() {
            Some(Strategy::Chase) => self.chasing += 1,
            Some(Strategy::FollowPath) => self.following += 1,
            Some(Strategy::Wander) => self.wandering += 1,
            Some(Strategy::Patrol) => self.patrolling += 1,
            None => {}
        }
    }
}

/// Owns the level and every live agent.
///
/// Agents are updated strictly in spawn order, all against the same target
/// snapshot. The level is never mutated once the world exists.
pub struct World {
    level: Box<DynLevel>,
    config: AiConfig,
    seed: u64,
    agents: Vec<Agent>,
    next_id: u32,
    tick: u64,
}

impl World {
    pub fn new(level: impl LevelOracle + 'static, config: AiConfig, seed: u64) -> Result<Self> {
        config.validate()?;
        let dims = level.dimensions();
        info!(
            width = dims.width,
            height = dims.height,
            tile_size = level.tile_size(),
            seed,
            "world created"
        );

        Ok(Self {
            level: Box::new(level),
            config,
            seed,
            agents: Vec::new(),
            next_id: WORLD_STREAM_ID + 1,
            tick: 0,
        })
    }

    /// Builds a world from a layout.
    ///
    /// Fixed enemy starts are used when the layout has any. Otherwise the
    /// roster is placed by the [`SpawnPlanner`], zombies first.
    pub fn from_layout(
        layout: LevelLayout,
        roster: Roster,
        config: AiConfig,
        seed: u64,
    ) -> Result<Self> {
        let fixed_starts = layout.has_enemy_starts();
        let starts: Vec<(AgentKind, TilePos)> = layout.enemy_starts().collect();
        let player = layout.player_start;
        let mut world = Self::new(layout.grid, config, seed)?;

        let starts = if fixed_starts {
            starts
        } else {
            let mut rng = agent_rng(seed, WORLD_STREAM_ID, RngStream::Spawn);
            let tiles =
                SpawnPlanner::default().plan(world.level(), player, roster.total(), &mut rng);
            let kinds = iter::repeat_n(AgentKind::Zombie, roster.zombies)
                .chain(iter::repeat_n(AgentKind::Mummy, roster.mummies));
            kinds.zip(tiles).collect()
        };

        for (kind, tile) in starts {
            world.spawn_on_tile(kind, tile)?;
        }
        Ok(world)
    }

    /// Spawns an agent with its box's top-left at `position`.
    pub fn spawn(&mut self, kind: AgentKind, position: Point) -> Result<AgentId> {
        let id = AgentId(self.next_id);
        let agent = Agent::spawn(id, kind, position, &self.config, self.level.as_ref(), self.seed)
            .map_err(|source| RuntimeError::Spawn { id, kind, source })?;

        self.next_id += 1;
        self.agents.push(agent);
        Ok(id)
    }

    pub fn spawn_on_tile(&mut self, kind: AgentKind, tile: TilePos) -> Result<AgentId> {
        let origin = self.level.tile_origin(tile);
        self.spawn(kind, origin)
    }

    /// Advances every agent by one tick towards a target centred on `target`.
    pub fn tick(&mut self, target: Point) -> TickReport {
        self.tick += 1;
        let level = self.level.as_ref();
        let mut report = TickReport {
            tick: self.tick,
            ..TickReport::default()
        };

        for agent in &mut self.agents {
            agent.update(target, level);
            report.record(agent);
        }

        trace!(?report, "world ticked");
        report
    }

    /// Applies damage and returns the agent's remaining health. Dead agents
    /// stay in the world until [`World::remove_dead`].
    pub fn damage(&mut self, id: AgentId, amount: u32) -> Result<u32> {
        let agent = self
            .agents
            .iter_mut()
            .find(|agent| agent.id() == id)
            .ok_or(RuntimeError::UnknownAgent(id))?;
        Ok(agent.take_damage(amount))
    }

    /// Drops agents with no health left and returns their ids.
    pub fn remove_dead(&mut self) -> Vec<AgentId> {
        let mut removed = Vec::new();
        self.agents.retain(|agent| {
            if agent.is_alive() {
                return true;
            }
            debug!(agent = %agent.id(), kind = %agent.kind(), "agent removed");
            removed.push(agent.id());
            false
        });
        removed
    }

    pub fn agent(&self, id: AgentId) -> Option<&Agent> {
        self.agents.iter().find(|agent| agent.id() == id)
    }

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn snapshots(&self) -> Vec<AgentSnapshot> {
        self.agents.iter().map(Agent::snapshot).collect()
    }

    pub fn level(&self) -> &DynLevel {
        self.level.as_ref()
    }

    pub fn config(&self) -> &AiConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn tick_count(&self) -> u64 {
        self.tick
    }
}

#[cfg(test)]
mod tests {
    use undead_core::{SpawnError, TileGrid, TileKind};

    use super::*;

    fn room() -> TileGrid {
        TileGrid::from_rows(
            &["########", "#......#", "#......#", "#......#", "########"],
            32.0,
        )
        .unwrap()
    }

    #[test]
    fn invalid_config_is_rejected() {
        let mut config = AiConfig::default();
        config.zombie.speed = -1.0;
        assert!(matches!(
            World::new(room(), config, 1),
            Err(RuntimeError::Config(_))
        ));
    }

    #[test]
    fn spawn_assigns_sequential_ids() {
        let mut world = World::new(room(), AiConfig::default(), 1).unwrap();
        let a = world.spawn_on_tile(AgentKind::Zombie, TilePos::new(1, 1)).unwrap();
        let b = world.spawn_on_tile(AgentKind::Mummy, TilePos::new(5, 3)).unwrap();

        assert_eq!((a, b), (AgentId(1), AgentId(2)));
        assert_eq!(world.agent(b).unwrap().kind(), AgentKind::Mummy);
    }

    #[test]
    fn spawn_into_wall_reports_kind_and_id() {
        let mut world = World::new(room(), AiConfig::default(), 1).unwrap();
        let err = world.spawn_on_tile(AgentKind::Zombie, TilePos::new(0, 0)).unwrap_err();

        match err {
            RuntimeError::Spawn { id, kind, source } => {
                assert_eq!(id, AgentId(1));
                assert_eq!(kind, AgentKind::Zombie);
                assert!(matches!(source, SpawnError::Blocked { .. }));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(world.agents().is_empty());
    }

    #[test]
    fn tick_report_counts_strategies() {
        let mut world = World::new(room(), AiConfig::default(), 1).unwrap();
        world.spawn_on_tile(AgentKind::Zombie, TilePos::new(1, 1)).unwrap();
        world.spawn_on_tile(AgentKind::Mummy, TilePos::new(6, 3)).unwrap();

        let target = world.level().tile_center(TilePos::new(3, 2));
        let report = world.tick(target);

        assert_eq!(report.tick, 1);
        assert_eq!(report.agents, 2);
        assert_eq!(report.visible, 2);
        assert_eq!(report.chasing, 2);
        assert_eq!(world.tick_count(), 1);
    }

    #[test]
    fn dead_agents_are_removed_on_request() {
        let mut world = World::new(room(), AiConfig::default(), 1).unwrap();
        let zombie = world.spawn_on_tile(AgentKind::Zombie, TilePos::new(1, 1)).unwrap();
        let mummy = world.spawn_on_tile(AgentKind::Mummy, TilePos::new(5, 2)).unwrap();

        assert_eq!(world.damage(zombie, 1).unwrap(), 0);
        assert_eq!(world.damage(mummy, 1).unwrap(), 1);
        assert_eq!(world.agents().len(), 2);

        assert_eq!(world.remove_dead(), vec![zombie]);
        assert_eq!(world.agents().len(), 1);
        assert!(world.remove_dead().is_empty());
        assert!(matches!(
            world.damage(zombie, 1),
            Err(RuntimeError::UnknownAgent(id)) if id == zombie
        ));
    }
}
