//! Random enemy placement for layouts without fixed starts.

use rand::Rng;
use tracing::{debug, warn};
use undead_core::{LevelOracle, Rect, Size, TilePos};

/// Rejection sampler for enemy start tiles.
///
/// Candidates are drawn from the interior `[margin, w-1-margin]` on both
/// axes and accepted when a one-tile box fits, the tile is far enough from
/// the player, and it keeps its distance from earlier picks. Distances are
/// Euclidean in tiles. When sampling runs out, the four inner corners pad
/// the result.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpawnPlanner {
    pub margin: i32,
    pub min_player_distance: f32,
    pub min_spacing: f32,
    pub max_attempts: usize,
}

impl Default for SpawnPlanner {
    fn default() -> Self {
        Self {
            margin: 2,
            min_player_distance: 5.0,
            min_spacing: 3.0,
            max_attempts: 1000,
        }
    }
}

impl SpawnPlanner {
    pub fn plan<L, R>(&self, level: &L, player: TilePos, count: usize, rng: &mut R) -> Vec<TilePos>
    where
        L: LevelOracle + ?Sized,
        R: Rng,
    {
        let dims = level.dimensions();
        let (low, high_x, high_y) = (
            self.margin,
            dims.width as i32 - 1 - self.margin,
            dims.height as i32 - 1 - self.margin,
        );
        let size = Size::square(level.tile_size());
        let fits = |tile: TilePos| {
            !level.is_region_blocked(Rect::from_origin(level.tile_origin(tile), size))
        };

        let mut chosen: Vec<TilePos> = Vec::with_capacity(count);
        let mut attempts = 0;
        if low <= high_x && low <= high_y {
            while chosen.len() < count && attempts < self.max_attempts {
                attempts += 1;
                let tile = TilePos::new(rng.gen_range(low..=high_x), rng.gen_range(low..=high_y));
                if !fits(tile) || tile_distance(tile, player) < self.min_player_distance {
                    continue;
                }
                if chosen.iter().any(|other| tile_distance(tile, *other) < self.min_spacing) {
                    continue;
                }
                chosen.push(tile);
            }
        }

        if chosen.len() < count {
            warn!(
                found = chosen.len(),
                wanted = count,
                attempts,
                "spawn sampling fell short, padding with corners"
            );
            let corners = [
                TilePos::new(low, low),
                TilePos::new(high_x, low),
                TilePos::new(low, high_y),
                TilePos::new(high_x, high_y),
            ];
            for corner in corners {
                if chosen.len() == count {
                    break;
                }
                if !chosen.contains(&corner) && fits(corner) {
                    chosen.push(corner);
                }
            }
        }

        debug!(placed = chosen.len(), attempts, "spawn plan ready");
        chosen
    }
}

fn tile_distance(a: TilePos, b: TilePos) -> f32 {
    let (dx, dy) = ((a.x - b.x) as f32, (a.y - b.y) as f32);
    (dx * dx + dy * dy).sqrt()
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use undead_core::{TileGrid, TileKind};

    use super::*;

    #[test]
    fn picks_respect_distances() {
        let grid = TileGrid::filled(25, 20, 32.0, TileKind::Floor).unwrap();
        let player = TilePos::new(12, 10);
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        let picks = SpawnPlanner::default().plan(&grid, player, 6, &mut rng);

        assert_eq!(picks.len(), 6);
        for (i, tile) in picks.iter().enumerate() {
            assert!((2..=22).contains(&tile.x) && (2..=17).contains(&tile.y));
            assert!(tile_distance(*tile, player) >= 5.0);
            for other in &picks[i + 1..] {
                assert!(tile_distance(*tile, *other) >= 3.0);
            }
        }
    }

    #[test]
    fn crowded_level_pads_with_corners() {
        // 7x7: the interior sample range is a 3x3 block that is all within
        // five tiles of a centred player.
        let grid = TileGrid::filled(7, 7, 32.0, TileKind::Floor).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(8);

        let picks = SpawnPlanner::default().plan(&grid, TilePos::new(3, 3), 3, &mut rng);

        assert_eq!(
            picks,
            vec![TilePos::new(2, 2), TilePos::new(4, 2), TilePos::new(2, 4)]
        );
    }

    #[test]
    fn blocked_corners_are_skipped() {
        let mut grid = TileGrid::filled(7, 7, 32.0, TileKind::Floor).unwrap();
        grid.set_tile(TilePos::new(2, 2), TileKind::Wall);
        let mut rng = ChaCha8Rng::seed_from_u64(8);

        let picks = SpawnPlanner::default().plan(&grid, TilePos::new(3, 3), 4, &mut rng);

        assert_eq!(picks.len(), 3);
        assert!(!picks.contains(&TilePos::new(2, 2)));
    }
}
