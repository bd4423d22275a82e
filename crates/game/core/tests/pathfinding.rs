use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use undead_core::{LevelOracle, Point, TileGrid, TileKind, TilePos, find_path};

const TILE: f32 = 32.0;

fn bordered(width: u32, height: u32) -> TileGrid {
    let mut grid = TileGrid::filled(width, height, TILE, TileKind::Floor).unwrap();
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

fn scattered(seed: u64, width: u32, height: u32) -> TileGrid {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut grid = TileGrid::filled(width, height, TILE, TileKind::Floor).unwrap();
    for y in 0..height as i32 {
        for x in 0..width as i32 {
            if rng.gen_bool(0.3) {
                grid.set_tile(TilePos::new(x, y), TileKind::Wall);
            }
        }
    }
    grid
}

/// Reference shortest distance in steps, `None` when unreachable.
fn bfs_distance(grid: &TileGrid, start: TilePos, end: TilePos) -> Option<u32> {
    if grid.is_tile_blocked(start) || grid.is_tile_blocked(end) {
        return None;
    }
    let dims = grid.dimensions();
    let mut dist = vec![None; dims.area()];
    let index = |t: TilePos| t.y as usize * dims.width as usize + t.x as usize;
    dist[index(start)] = Some(0u32);
    let mut queue = VecDeque::from([start]);
    while let Some(tile) = queue.pop_front() {
        let d = dist[index(tile)].unwrap();
        if tile == end {
            return Some(d);
        }
        for facing in undead_core::Facing::ALL {
            let next = tile.step(facing);
            if !grid.is_tile_blocked(next) && dist[index(next)].is_none() {
                dist[index(next)] = Some(d + 1);
                queue.push_back(next);
            }
        }
    }
    None
}

fn floor_tiles(grid: &TileGrid) -> Vec<TilePos> {
    let dims = grid.dimensions();
    (0..dims.height as i32)
        .flat_map(|y| (0..dims.width as i32).map(move |x| TilePos::new(x, y)))
        .filter(|tile| !grid.is_tile_blocked(*tile))
        .collect()
}

#[test]
fn scenario_a_open_room_corner_to_corner() {
    let grid = bordered(5, 5);
    let path = find_path(
        &grid,
        grid.tile_center(TilePos::new(1, 1)),
        grid.tile_center(TilePos::new(3, 3)),
    );

    assert_eq!(path.len(), 5);
    assert_eq!(path.head(), Some(Point::new(48.0, 48.0)));
    assert_eq!(path.waypoints().last(), Some(&Point::new(112.0, 112.0)));
}

#[test]
fn scenario_b_walled_off_goal_is_unreachable() {
    let mut grid = bordered(5, 5);
    grid.set_tile(TilePos::new(2, 3), TileKind::Wall);
    grid.set_tile(TilePos::new(3, 2), TileKind::Wall);

    let path = find_path(
        &grid,
        grid.tile_center(TilePos::new(1, 1)),
        grid.tile_center(TilePos::new(3, 3)),
    );
    assert!(path.is_empty());
}

#[test]
fn blocked_endpoints_yield_empty_path() {
    let grid = bordered(6, 6);
    let inside = grid.tile_center(TilePos::new(2, 2));
    let wall = grid.tile_center(TilePos::new(0, 3));
    let outside = Point::new(-100.0, 40.0);

    assert!(find_path(&grid, wall, inside).is_empty());
    assert!(find_path(&grid, inside, wall).is_empty());
    assert!(find_path(&grid, inside, outside).is_empty());
}

#[test]
fn paths_are_valid_and_shortest_on_random_grids() {
    let mut checked_reachable = 0;
    let mut checked_unreachable = 0;

    for seed in 0..12 {
        let grid = scattered(seed, 14, 11);
        let floor = floor_tiles(&grid);
        let mut rng = ChaCha8Rng::seed_from_u64(seed + 1000);

        for _ in 0..40 {
            let start = floor[rng.gen_range(0..floor.len())];
            let end = floor[rng.gen_range(0..floor.len())];
            let path = find_path(&grid, grid.tile_center(start), grid.tile_center(end));

            match bfs_distance(&grid, start, end) {
                Some(distance) => {
                    checked_reachable += 1;
                    let tiles: Vec<TilePos> =
                        path.waypoints().map(|point| grid.tile_of(*point)).collect();

                    assert_eq!(tiles.len() as u32, distance + 1, "seed {seed}: {start:?} -> {end:?}");
                    assert_eq!(tiles.first(), Some(&start));
                    assert_eq!(tiles.last(), Some(&end));
                    for pair in tiles.windows(2) {
                        assert!(pair[0].is_adjacent(pair[1]), "seed {seed}: {pair:?}");
                    }
                    for (point, tile) in path.waypoints().zip(&tiles) {
                        assert!(!grid.is_tile_blocked(*tile));
                        assert_eq!(*point, grid.tile_center(*tile));
                    }
                }
                None => {
                    checked_unreachable += 1;
                    assert!(path.is_empty(), "seed {seed}: {start:?} -> {end:?}");
                }
            }
        }
    }

    assert!(checked_reachable > 100);
    assert!(checked_unreachable > 0);
}

#[test]
fn off_centre_endpoints_use_containing_tiles() {
    let grid = bordered(6, 6);
    let path = find_path(&grid, Point::new(33.0, 63.0), Point::new(159.0, 64.0));

    let tiles: Vec<TilePos> = path.waypoints().map(|point| grid.tile_of(*point)).collect();
    assert_eq!(tiles.first(), Some(&TilePos::new(1, 1)));
    assert_eq!(tiles.last(), Some(&TilePos::new(4, 2)));
    assert_eq!(tiles.len(), 5);
}
