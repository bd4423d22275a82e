use crate::agent::AgentKind;
use crate::error::ConfigError;

/// AI configuration constants and tunable parameters.
///
/// Every field has a default tuned for 32-unit tiles, so a
/// configuration file only needs to name the values it changes.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AiConfig {
    /// Side length of one tile in world units. Agents are one tile square.
    pub tile_size: f32,
    /// Distance between line-of-sight samples.
    pub sight_sample_step: f32,
    /// Ticks a wandering agent idles after bumping into a wall.
    pub wander_cooldown_ticks: u32,
    pub patrol: PatrolConfig,
    pub search: SearchConfig,
    pub zombie: KindProfile,
    pub mummy: KindProfile,
}

impl AiConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_TILE_SIZE: f32 = 32.0;
    pub const DEFAULT_SIGHT_SAMPLE_STEP: f32 = 10.0;
    pub const DEFAULT_WANDER_COOLDOWN_TICKS: u32 = 30;

    pub fn new() -> Self {
        Self {
            tile_size: Self::DEFAULT_TILE_SIZE,
            sight_sample_step: Self::DEFAULT_SIGHT_SAMPLE_STEP,
            wander_cooldown_ticks: Self::DEFAULT_WANDER_COOLDOWN_TICKS,
            patrol: PatrolConfig::default(),
            search: SearchConfig::default(),
            zombie: KindProfile::zombie(),
            mummy: KindProfile::mummy(),
        }
    }

    pub fn profile(&self, kind: AgentKind) -> &KindProfile {
        match kind {
            AgentKind::Zombie => &self.zombie,
            AgentKind::Mummy => &self.mummy,
        }
    }

    /// Rejects values that would make movement or sensing meaningless.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("tile_size", self.tile_size)?;
        positive("sight_sample_step", self.sight_sample_step)?;
        if self.patrol.point_count == 0 {
            return Err(ConfigError::Zero {
                field: "patrol.point_count",
            });
        }
        if self.patrol.sample_attempts == 0 {
            return Err(ConfigError::Zero {
                field: "patrol.sample_attempts",
            });
        }
        self.zombie
            .validate("zombie.speed", "zombie.visibility_range")?;
        self.mummy
            .validate("mummy.speed", "mummy.visibility_range")?;
        Ok(())
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-kind tuning. Strategy selection is data: `fallback` decides which
/// leaf ends the agent's selector.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KindProfile {
    /// World units moved per tick.
    pub speed: f32,
    pub health: u32,
    /// Beyond this centre-to-centre distance the target is never visible.
    pub visibility_range: f32,
    /// Centre-to-centre distance under which the target counts as close.
    pub close_distance: f32,
    pub fallback: FallbackStrategy,
}

impl KindProfile {
    pub const fn zombie() -> Self {
        Self {
            speed: 2.0,
            health: 1,
            visibility_range: 200.0,
            close_distance: 150.0,
            fallback: FallbackStrategy::Wander,
        }
    }

    pub const fn mummy() -> Self {
        Self {
            speed: 1.0,
            health: 2,
            visibility_range: 250.0,
            close_distance: 200.0,
            fallback: FallbackStrategy::Patrol,
        }
    }

    fn validate(
        &self,
        speed_field: &'static str,
        range_field: &'static str,
    ) -> Result<(), ConfigError> {
        positive(speed_field, self.speed)?;
        positive(range_field, self.visibility_range)
    }
}

/// Lowest-priority behavior when neither chasing nor path-following applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FallbackStrategy {
    /// Random single-axis steps with a cooldown after hitting a wall.
    Wander,
    /// Cycle through patrol points chosen at spawn.
    Patrol,
}

/// When a patrolling agent moves on to its next patrol point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PatrolAdvance {
    /// Advance once the agent is within one step of the current point.
    #[default]
    OnArrival,
    /// Advance every patrol tick whether or not the point was reached.
    EveryTick,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PatrolConfig {
    pub point_count: usize,
    /// Rejection-sampling attempts per patrol point.
    pub sample_attempts: usize,
    pub advance: PatrolAdvance,
}

impl Default for PatrolConfig {
    fn default() -> Self {
        Self {
            point_count: 4,
            sample_attempts: 1000,
            advance: PatrolAdvance::OnArrival,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Cap on A* node expansions per search. `None` searches exhaustively.
    pub max_expansions: Option<usize>,
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}
