//! Seeded procedural levels.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;
use undead_core::{GridError, TileGrid, TileKind, TilePos};

use crate::layout::LevelLayout;

/// Scatters walls over a bordered room and clears a 3×3 pocket around the
/// player start at tile (2, 2). Generated layouts carry no enemy starts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LevelGenerator {
    pub width: u32,
    pub height: u32,
    pub tile_size: f32,
    /// Probability that an interior tile becomes a wall. Clamped to `[0, 1]`.
    pub wall_chance: f64,
}

impl LevelGenerator {
    pub const DEFAULT_WALL_CHANCE: f64 = 0.2;
    /// Smallest size that keeps the cleared pocket inside the border.
    pub const MIN_SIDE: u32 = 5;
    pub const PLAYER_START: TilePos = TilePos::new(2, 2);

    pub fn new(width: u32, height: u32, tile_size: f32) -> Self {
        Self {
            width,
            height,
            tile_size,
            wall_chance: Self::DEFAULT_WALL_CHANCE,
        }
    }

    pub fn with_wall_chance(mut self, wall_chance: f64) -> Self {
        self.wall_chance = wall_chance;
        self
    }

    pub fn generate(&self, seed: u64) -> Result<LevelLayout, GridError> {
        if self.width < Self::MIN_SIDE || self.height < Self::MIN_SIDE {
            return Err(GridError::TooSmall {
                width: self.width,
                height: self.height,
                minimum: Self::MIN_SIDE,
            });
        }

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let chance = self.wall_chance.clamp(0.0, 1.0);
        let mut grid = TileGrid::filled(self.width, self.height, self.tile_size, TileKind::Floor)?;
        let (last_x, last_y) = (self.width as i32 - 1, self.height as i32 - 1);

        let mut walls = 0usize;
        for y in 0..=last_y {
            for x in 0..=last_x {
                let border = x == 0 || y == 0 || x == last_x || y == last_y;
                if border || rng.gen_bool(chance) {
                    grid.set_tile(TilePos::new(x, y), TileKind::Wall);
                    walls += 1;
                }
            }
        }

        let start = Self::PLAYER_START;
        for y in start.y - 1..=start.y + 1 {
            for x in start.x - 1..=start.x + 1 {
                grid.set_tile(TilePos::new(x, y), TileKind::Floor);
            }
        }

        debug!(seed, width = self.width, height = self.height, walls, "level generated");
        Ok(LevelLayout::open(grid, start))
    }
}
