//! Command-line surface of the headless driver.

use std::path::PathBuf;

use clap::{ArgGroup, Parser};
use undead_core::Point;

/// Run the enemy AI headless against a fixed target.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "undead")]
#[command(about = "Headless driver for the zombie/mummy AI", long_about = None)]
#[command(version)]
#[command(group(ArgGroup::new("source").args(["level", "map", "generate"])))]
pub struct Cli {
    /// Built-in level number (1-3; anything else loads level 1)
    #[arg(long)]
    pub level: Option<usize>,

    /// Level layout RON file
    #[arg(long, value_name = "FILE.ron")]
    pub map: Option<PathBuf>,

    /// Generate a random level of the given size, e.g. `25x20`
    #[arg(long, value_name = "WxH", value_parser = parse_size)]
    pub generate: Option<(u32, u32)>,

    /// AI configuration TOML file
    #[arg(long, value_name = "FILE.toml")]
    pub config: Option<PathBuf>,

    /// World seed [env: UNDEAD_SEED]
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of ticks to run [env: UNDEAD_TICKS]
    #[arg(long)]
    pub ticks: Option<u64>,

    /// Target centre in world units, e.g. `400,320` (defaults to the player start)
    #[arg(long, value_name = "X,Y", value_parser = parse_point)]
    pub target: Option<Point>,

    /// Also write logs to `undead.log` in this directory
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,
}

pub fn parse_size(value: &str) -> Result<(u32, u32), String> {
    let (width, height) = value
        .split_once(['x', 'X', '×'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got `{value}`"))?;
    let parse = |part: &str| {
        part.trim()
            .parse::<u32>()
            .map_err(|e| format!("invalid dimension `{part}`: {e}"))
    };
    Ok((parse(width)?, parse(height)?))
}

pub fn parse_point(value: &str) -> Result<Point, String> {
    let (x, y) = value
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got `{value}`"))?;
    let parse = |part: &str| {
        part.trim()
            .parse::<f32>()
            .map_err(|e| format!("invalid coordinate `{part}`: {e}"))
    };
    Ok(Point::new(parse(x)?, parse(y)?))
}
