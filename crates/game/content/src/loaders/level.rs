//! Level layout loader.
//!
//! A layout file names its tiles as ASCII rows and its starts as tile
//! coordinates:
//!
//! ```ron
//! (
//!     rows: ["#####", "#...#", "#####"],
//!     player_start: (1, 1),
//!     zombies: [(3, 1)],
//!     mummies: [],
//! )
//! ```

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use undead_core::{TileGrid, TilePos};

use crate::layout::LevelLayout;
use crate::loaders::{LoadResult, read_file};

/// Layout structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct LevelLayoutRon {
    rows: Vec<String>,
    player_start: (i32, i32),
    #[serde(default)]
    zombies: Vec<(i32, i32)>,
    #[serde(default)]
    mummies: Vec<(i32, i32)>,
}

fn tiles(pairs: &[(i32, i32)]) -> Vec<TilePos> {
    pairs.iter().map(|&(x, y)| TilePos::new(x, y)).collect()
}

/// Loader for level layouts from RON files.
pub struct LevelLoader;

impl LevelLoader {
    /// Load a layout from a RON file, building its grid with `tile_size`.
    pub fn load(path: &Path, tile_size: f32) -> LoadResult<LevelLayout> {
        let content = read_file(path)?;
        Self::parse(&content, tile_size)
            .with_context(|| format!("Invalid level {}", path.display()))
    }

    /// Parse a layout from RON text.
    ///
    /// Every start must sit on a walkable tile.
    pub fn parse(content: &str, tile_size: f32) -> LoadResult<LevelLayout> {
        let data: LevelLayoutRon = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse level RON: {}", e))?;

        let grid = TileGrid::from_rows(&data.rows, tile_size)?;
        let layout = LevelLayout {
            grid,
            player_start: TilePos::new(data.player_start.0, data.player_start.1),
            zombies: tiles(&data.zombies),
            mummies: tiles(&data.mummies),
        };

        if let Some(tile) = layout.first_blocked_start() {
            anyhow::bail!("start tile ({}, {}) is not walkable", tile.x, tile.y);
        }
        Ok(layout)
    }

    /// Render a layout back into RON text.
    pub fn to_ron(layout: &LevelLayout) -> LoadResult<String> {
        let pairs = |tiles: &[TilePos]| tiles.iter().map(|t| (t.x, t.y)).collect::<Vec<_>>();
        let data = LevelLayoutRon {
            rows: layout.grid.to_rows(),
            player_start: (layout.player_start.x, layout.player_start.y),
            zombies: pairs(&layout.zombies),
            mummies: pairs(&layout.mummies),
        };
        ron::ser::to_string_pretty(&data, ron::ser::PrettyConfig::default())
            .map_err(|e| anyhow::anyhow!("Failed to serialize level RON: {}", e))
    }
}
