//! Tile-granularity A* search over a [`LevelOracle`].
//!
//! Searches are 4-connected with unit edge cost and a Manhattan heuristic,
//! which is admissible and consistent for this graph, so the first time the
//! goal is popped the path is a shortest one. Nothing is cached between
//! calls; the caller decides how often to search.
//!
//! Equal f-scores are ordered by the smaller heuristic first, then by
//! insertion order, so identical queries always return identical paths.

use core::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

use tracing::{debug, trace};

use crate::env::LevelOracle;
use crate::geometry::{Facing, Point, TilePos};

/// Ordered waypoints (tile centres in world space), consumed front to back.
///
/// An empty path means "no path currently known", never "arrived".
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    waypoints: VecDeque<Point>,
}

impl Path {
    pub fn new(waypoints: Vec<Point>) -> Self {
        Self {
            waypoints: waypoints.into(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    /// The waypoint currently being approached.
    pub fn head(&self) -> Option<Point> {
        self.waypoints.front().copied()
    }

    /// Drops the head waypoint and returns it.
    pub fn pop_head(&mut self) -> Option<Point> {
        self.waypoints.pop_front()
    }

    pub fn waypoints(&self) -> impl ExactSizeIterator<Item = &Point> {
        self.waypoints.iter()
    }
}

#[derive(Debug)]
struct OpenNode {
    f: u32,
    h: u32,
    order: u64,
    index: usize,
}

impl OpenNode {
    fn key(&self) -> (u32, u32, u64) {
        (self.f, self.h, self.order)
    }
}

impl PartialEq for OpenNode {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for OpenNode {}

impl PartialOrd for OpenNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering to make BinaryHeap behave like a min-heap.
        other.key().cmp(&self.key())
    }
}

/// A* pathfinder bound to one level.
pub struct Pathfinder<'a, L: LevelOracle + ?Sized> {
    level: &'a L,
    max_expansions: Option<usize>,
}

impl<'a, L: LevelOracle + ?Sized> Pathfinder<'a, L> {
    pub fn new(level: &'a L) -> Self {
        Self {
            level,
            max_expansions: None,
        }
    }

    /// Caps node expansions per search; a capped search that has not reached
    /// the goal returns an empty path.
    pub fn with_expansion_limit(mut self, limit: Option<usize>) -> Self {
        self.max_expansions = limit;
        self
    }

    /// Shortest path between two world points as tile-centre waypoints.
    ///
    /// The first waypoint is the centre of the tile containing `start` and
    /// the last is the centre of the tile containing `end`. Returns an empty
    /// path when either endpoint tile is blocked or no route exists.
    pub fn find_path(&self, start: Point, end: Point) -> Path {
        let start_tile = self.level.tile_of(start);
        let end_tile = self.level.tile_of(end);
        match self.find_tile_path(start_tile, end_tile) {
            Some(tiles) => Path::new(
                tiles
                    .into_iter()
                    .map(|tile| self.level.tile_center(tile))
                    .collect(),
            ),
            None => Path::empty(),
        }
    }

    /// Shortest 4-connected tile route, `start` and `end` inclusive.
    pub fn find_tile_path(&self, start: TilePos, end: TilePos) -> Option<Vec<TilePos>> {
        // Off-grid tiles never reach the score tables.
        let impassable =
            |tile: TilePos| !self.level.contains(tile) || self.level.is_tile_blocked(tile);

        if impassable(start) || impassable(end) {
            trace!(?start, ?end, "path endpoint blocked");
            return None;
        }

        let dims = self.level.dimensions();
        let width = dims.width as usize;
        let index_of = |tile: TilePos| tile.y as usize * width + tile.x as usize;
        let tile_at = |index: usize| TilePos::new((index % width) as i32, (index / width) as i32);

        let start_idx = index_of(start);
        let goal_idx = index_of(end);

        let mut open = BinaryHeap::new();
        let mut closed = vec![false; dims.area()];
        let mut g_score = vec![u32::MAX; dims.area()];
        let mut came_from: Vec<Option<usize>> = vec![None; dims.area()];
        let mut order: u64 = 0;
        let mut expansions = 0usize;

        g_score[start_idx] = 0;
        let h0 = start.manhattan(end);
        open.push(OpenNode {
            f: h0,
            h: h0,
            order,
            index: start_idx,
        });

        while let Some(node) = open.pop() {
            if closed[node.index] {
                // Stale heap entry.
                continue;
            }

            if node.index == goal_idx {
                let path: Vec<TilePos> = reconstruct(&came_from, goal_idx)
                    .into_iter()
                    .map(tile_at)
                    .collect();
                trace!(?start, ?end, expansions, len = path.len(), "path found");
                return Some(path);
            }

            if let Some(limit) = self.max_expansions
                && expansions >= limit
            {
                debug!(?start, ?end, limit, "path search hit expansion limit");
                return None;
            }

            closed[node.index] = true;
            expansions += 1;

            let current = tile_at(node.index);
            let tentative_g = g_score[node.index].saturating_add(1);
            for facing in Facing::ALL {
                let neighbor = current.step(facing);
                if impassable(neighbor) {
                    continue;
                }

                let n_idx = index_of(neighbor);
                if closed[n_idx] || tentative_g >= g_score[n_idx] {
                    continue;
                }

                came_from[n_idx] = Some(node.index);
                g_score[n_idx] = tentative_g;
                let h = neighbor.manhattan(end);
                order += 1;
                open.push(OpenNode {
                    f: tentative_g.saturating_add(h),
                    h,
                    order,
                    index: n_idx,
                });
            }
        }

        trace!(?start, ?end, expansions, "no path");
        None
    }
}

/// Standalone convenience for collaborators that do not keep a [`Pathfinder`].
pub fn find_path<L: LevelOracle + ?Sized>(level: &L, start: Point, end: Point) -> Path {
    Pathfinder::new(level).find_path(start, end)
}

fn reconstruct(came_from: &[Option<usize>], mut current: usize) -> Vec<usize> {
    let mut out = vec![current];
    while let Some(prev) = came_from[current] {
        current = prev;
        out.push(current);
    }
    out.reverse();
    out
}
