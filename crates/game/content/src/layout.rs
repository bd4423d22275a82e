//! Level layouts: a tile grid plus where everyone starts.

use undead_core::{AgentKind, LevelOracle, Point, TileGrid, TilePos};

/// A playable level.
///
/// Start positions are tiles; agents spawn with their box on the tile's
/// origin and the player target sits on the tile's centre.
#[derive(Clone, Debug, PartialEq)]
pub struct LevelLayout {
    pub grid: TileGrid,
    pub player_start: TilePos,
    pub zombies: Vec<TilePos>,
    pub mummies: Vec<TilePos>,
}

impl LevelLayout {
    /// A layout with no fixed enemy starts.
    pub fn open(grid: TileGrid, player_start: TilePos) -> Self {
        Self {
            grid,
            player_start,
            zombies: Vec::new(),
            mummies: Vec::new(),
        }
    }

    pub fn player_center(&self) -> Point {
        self.grid.tile_center(self.player_start)
    }

    pub fn has_enemy_starts(&self) -> bool {
        !self.zombies.is_empty() || !self.mummies.is_empty()
    }

    /// Enemy starts as `(kind, tile)`, zombies first.
    pub fn enemy_starts(&self) -> impl Iterator<Item = (AgentKind, TilePos)> + '_ {
        let zombies = self.zombies.iter().map(|tile| (AgentKind::Zombie, *tile));
        let mummies = self.mummies.iter().map(|tile| (AgentKind::Mummy, *tile));
        zombies.chain(mummies)
    }

    /// First start tile that is out of bounds or not walkable.
    pub fn first_blocked_start(&self) -> Option<TilePos> {
        std::iter::once(self.player_start)
            .chain(self.enemy_starts().map(|(_, tile)| tile))
            .find(|tile| self.grid.is_tile_blocked(*tile))
    }
}
