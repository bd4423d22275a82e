//! Builds a world from the selected level source and runs it.

use std::path::PathBuf;

use anyhow::Result;
use tracing::{debug, error, info};
use undead_content::{ConfigLoader, LevelGenerator, LevelLayout, LevelLoader, builtin_level};
use undead_core::{AiConfig, ConfigError, CoreError, GridError, Point, SpawnError};
use undead_runtime::{Roster, TickReport, World};

use crate::cli::Cli;
use crate::config::RunSettings;

/// Where the level comes from.
#[derive(Clone, Debug, PartialEq)]
pub enum LevelSource {
    Builtin(usize),
    File(PathBuf),
    Generated { width: u32, height: u32 },
}

impl LevelSource {
    pub fn from_cli(cli: &Cli) -> Self {
        if let Some(path) = &cli.map {
            Self::File(path.clone())
        } else if let Some((width, height)) = cli.generate {
            Self::Generated { width, height }
        } else {
            Self::Builtin(cli.level.unwrap_or(1))
        }
    }

    /// Level number used to size the roster when the layout has no starts.
    fn roster_level(&self) -> usize {
        match self {
            Self::Builtin(number) => *number,
            Self::File(_) | Self::Generated { .. } => 1,
        }
    }

    pub fn load(&self, config: &AiConfig, seed: u64) -> Result<LevelLayout> {
        let layout = match self {
            Self::Builtin(number) => builtin_level(*number, config)?,
            Self::File(path) => LevelLoader::load(path, config.tile_size)?,
            Self::Generated { width, height } => {
                LevelGenerator::new(*width, *height, config.tile_size).generate(seed)?
            }
        };
        Ok(layout)
    }
}

/// Everything a run needs, resolved from the command line.
pub struct Scenario {
    pub world: World,
    pub target: Point,
    pub settings: RunSettings,
}

impl Scenario {
    pub fn from_cli(cli: &Cli, settings: RunSettings) -> Result<Self> {
        let config = match &cli.config {
            Some(path) => ConfigLoader::load(path)?,
            None => AiConfig::default(),
        };
        let source = LevelSource::from_cli(cli);
        let layout = source.load(&config, settings.seed)?;
        let target = cli.target.unwrap_or_else(|| layout.player_center());
        debug!(?source, x = target.x, y = target.y, "scenario resolved");

        let roster = Roster::for_level(source.roster_level());
        let world = World::from_layout(layout, roster, config, settings.seed)?;
        info!(agents = world.agents().len(), seed = settings.seed, "enemies placed");

        Ok(Self {
            world,
            target,
            settings,
        })
    }

    /// Runs every tick and returns the last report.
    pub fn run(&mut self) -> TickReport {
        let mut last = TickReport::default();
        for _ in 0..self.settings.ticks {
            last = self.world.tick(self.target);
            if self.settings.summary_every > 0 && last.tick % self.settings.summary_every == 0 {
                log_summary(&self.world, &last);
            }
        }
        last
    }
}

fn log_summary(world: &World, report: &TickReport) {
    info!(
        tick = report.tick,
        agents = report.agents,
        visible = report.visible,
        chasing = report.chasing,
        following = report.following,
        wandering = report.wandering,
        patrolling = report.patrolling,
        "tick summary"
    );
    for snapshot in world.snapshots() {
        debug!(
            agent = %snapshot.id,
            kind = %snapshot.kind,
            x = snapshot.position.x,
            y = snapshot.position.y,
            facing = ?snapshot.facing,
            moving = snapshot.moving,
            strategy = snapshot.strategy.as_ref().map_or("idle", |s| s.as_ref()),
            "agent"
        );
    }
}

/// First core construction error in the chain of a failed setup.
pub fn core_failure(err: &anyhow::Error) -> Option<&dyn CoreError> {
    err.chain().find_map(|cause| {
        if let Some(grid) = cause.downcast_ref::<GridError>() {
            Some(grid as &dyn CoreError)
        } else if let Some(spawn) = cause.downcast_ref::<SpawnError>() {
            Some(spawn as &dyn CoreError)
        } else {
            cause
                .downcast_ref::<ConfigError>()
                .map(|config| config as &dyn CoreError)
        }
    })
}

/// Logs a setup failure, tagged with its error code when the core raised it.
pub fn log_failure(err: &anyhow::Error) {
    match core_failure(err) {
        Some(cause) => error!(
            code = cause.error_code(),
            severity = cause.severity().as_str(),
            "setup failed: {err:#}"
        ),
        None => error!("setup failed: {err:#}"),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use clap::Parser;
    use undead_core::{ErrorSeverity, LevelOracle};

    use super::*;

    fn try_scenario(args: &[&str]) -> Result<Scenario> {
        let cli = Cli::try_parse_from(args).unwrap();
        let settings = RunSettings::default().with_cli(&cli);
        Scenario::from_cli(&cli, settings)
    }

    fn scenario(args: &[&str]) -> Scenario {
        try_scenario(args).unwrap()
    }

    fn setup_error(args: &[&str]) -> anyhow::Error {
        match try_scenario(args) {
            Ok(_) => panic!("setup unexpectedly succeeded for {args:?}"),
            Err(err) => err,
        }
    }

    #[test]
    fn builtin_level_is_the_default() {
        let scenario = scenario(&["undead"]);
        assert_eq!(scenario.world.agents().len(), 5);
        assert_eq!(scenario.target, Point::new(12.0 * 32.0 + 16.0, 15.0 * 32.0 + 16.0));
    }

    #[test]
    fn generated_level_runs() {
        let mut scenario =
            scenario(&["undead", "--generate", "25x20", "--seed", "4", "--ticks", "120"]);
        let report = scenario.run();
        assert_eq!(report.tick, 120);
        assert_eq!(report.agents, Roster::for_level(1).total());
    }

    #[test]
    fn map_and_config_files_are_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let map = dir.path().join("arena.ron");
        let config = dir.path().join("ai.toml");
        std::fs::File::create(&map)
            .unwrap()
            .write_all(
                br########"(rows: ["#######", "#.....#", "#.....#", "#######"], player_start: (1, 1), zombies: [(5, 2)])"########,
            )
            .unwrap();
        std::fs::File::create(&config)
            .unwrap()
            .write_all(b"tile_size = 16.0\n")
            .unwrap();

        let mut scenario = scenario(&[
            "undead",
            "--map",
            map.to_str().unwrap(),
            "--config",
            config.to_str().unwrap(),
            "--ticks",
            "3",
        ]);
        assert_eq!(scenario.world.level().tile_size(), 16.0);
        assert_eq!(scenario.target, Point::new(24.0, 24.0));
        assert_eq!(scenario.run().chasing, 1);
    }

    #[test]
    fn explicit_target_overrides_player_start() {
        let scenario = scenario(&["undead", "--level", "2", "--target", "100,120"]);
        assert_eq!(scenario.target, Point::new(100.0, 120.0));
        assert_eq!(scenario.world.agents().len(), 8);
    }

    #[test]
    fn undersized_generated_level_reports_grid_code() {
        let err = setup_error(&["undead", "--generate", "3x3"]);
        let cause = core_failure(&err).unwrap();
        assert_eq!(cause.error_code(), "GRID_TOO_SMALL");
        assert_eq!(cause.severity(), ErrorSeverity::Validation);
    }

    #[test]
    fn invalid_config_file_reports_config_code() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("ai.toml");
        std::fs::write(&config, "sight_sample_step = -1.0\n").unwrap();

        let err = setup_error(&["undead", "--config", config.to_str().unwrap()]);
        assert!(format!("{err:#}").contains("ai.toml"));
        assert_eq!(core_failure(&err).unwrap().error_code(), "CONFIG_NON_POSITIVE");
    }

    #[test]
    fn io_failures_carry_no_core_code() {
        let err = setup_error(&["undead", "--map", "/nonexistent/level.ron"]);
        assert!(core_failure(&err).is_none());
    }
}
