//! Levels embedded in the crate.

use anyhow::Context;
use undead_core::AiConfig;

use crate::layout::LevelLayout;
use crate::loaders::{LoadResult, LevelLoader};

const LEVELS: [&str; 3] = [
    include_str!("../../levels/level_1.ron"),
    include_str!("../../levels/level_2.ron"),
    include_str!("../../levels/level_3.ron"),
];

pub const BUILTIN_LEVEL_COUNT: usize = LEVELS.len();

/// Built-in level `number` (1-based). Any number outside `1..=3` falls back
/// to level 1.
pub fn builtin_level(number: usize, config: &AiConfig) -> LoadResult<LevelLayout> {
    let index = if (1..=BUILTIN_LEVEL_COUNT).contains(&number) {
        number - 1
    } else {
        0
    };
    LevelLoader::parse(LEVELS[index], config.tile_size)
        .with_context(|| format!("Built-in level {}", index + 1))
}
