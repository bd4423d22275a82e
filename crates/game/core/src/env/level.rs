use crate::error::GridError;
use crate::geometry::{Point, Rect, TilePos};

/// Level handle the behavior tree reads during a tick.
pub type DynLevel = dyn LevelOracle;

/// Static level oracle exposing the blocked/unblocked layout to the AI core.
///
/// The core only ever reads through this trait. Out-of-bounds tiles are
/// blocked, so callers never need a separate bounds check.
pub trait LevelOracle: Send + Sync {
    fn dimensions(&self) -> LevelDimensions;

    /// Side length of one tile in world units.
    fn tile_size(&self) -> f32;

    /// Whether the tile is impassable. Out-of-bounds tiles are blocked.
    fn is_tile_blocked(&self, tile: TilePos) -> bool;

    fn contains(&self, tile: TilePos) -> bool {
        self.dimensions().contains(tile)
    }

    /// Tile containing a world point (floor division by tile size).
    fn tile_of(&self, point: Point) -> TilePos {
        let size = self.tile_size();
        TilePos::new(
            (point.x / size).floor() as i32,
            (point.y / size).floor() as i32,
        )
    }

    /// World-space centre of a tile.
    fn tile_center(&self, tile: TilePos) -> Point {
        let size = self.tile_size();
        Point::new(
            tile.x as f32 * size + size / 2.0,
            tile.y as f32 * size + size / 2.0,
        )
    }

    /// World-space top-left corner of a tile.
    fn tile_origin(&self, tile: TilePos) -> Point {
        let size = self.tile_size();
        Point::new(tile.x as f32 * size, tile.y as f32 * size)
    }

    /// Whether the half-open rectangle overlaps any blocked tile.
    ///
    /// A degenerate rectangle (zero or negative extent) is tested as the
    /// single point at its origin.
    fn is_region_blocked(&self, region: Rect) -> bool {
        let size = self.tile_size();
        let first = self.tile_of(Point::new(region.x, region.y));
        if region.width <= 0.0 || region.height <= 0.0 {
            return self.is_tile_blocked(first);
        }

        let last_x = ((region.x + region.width) / size).ceil() as i32 - 1;
        let last_y = ((region.y + region.height) / size).ceil() as i32 - 1;
        for ty in first.y..=last_y {
            for tx in first.x..=last_x {
                if self.is_tile_blocked(TilePos::new(tx, ty)) {
                    return true;
                }
            }
        }
        false
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LevelDimensions {
    pub width: u32,
    pub height: u32,
}

impl LevelDimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, tile: TilePos) -> bool {
        tile.x >= 0 && tile.y >= 0 && tile.x < self.width as i32 && tile.y < self.height as i32
    }

    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Canonical tile categories. Only floor is walkable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TileKind {
    #[default]
    Floor,
    Wall,
    Bush,
    Water,
}

impl TileKind {
    pub fn is_walkable(self) -> bool {
        matches!(self, TileKind::Floor)
    }

    /// ASCII glyph used by level files.
    pub fn glyph(self) -> char {
        match self {
            TileKind::Floor => '.',
            TileKind::Wall => '#',
            TileKind::Bush => '*',
            TileKind::Water => '~',
        }
    }

    pub fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            '.' => Some(TileKind::Floor),
            '#' => Some(TileKind::Wall),
            '*' => Some(TileKind::Bush),
            '~' => Some(TileKind::Water),
            _ => None,
        }
    }
}

/// Row-major tile grid; the standard [`LevelOracle`] implementation.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileGrid {
    dimensions: LevelDimensions,
    tile_size: f32,
    tiles: Vec<TileKind>,
}

impl TileGrid {
    pub fn new(
        width: u32,
        height: u32,
        tile_size: f32,
        tiles: Vec<TileKind>,
    ) -> Result<Self, GridError> {
        if !(tile_size.is_finite() && tile_size > 0.0) {
            return Err(GridError::InvalidTileSize(tile_size));
        }
        if width == 0 || height == 0 {
            return Err(GridError::EmptyGrid { width, height });
        }
        let dimensions = LevelDimensions::new(width, height);
        if tiles.len() != dimensions.area() {
            return Err(GridError::TileCountMismatch {
                expected: dimensions.area(),
                actual: tiles.len(),
            });
        }
        Ok(Self {
            dimensions,
            tile_size,
            tiles,
        })
    }

    /// Grid of a single tile kind.
    pub fn filled(
        width: u32,
        height: u32,
        tile_size: f32,
        kind: TileKind,
    ) -> Result<Self, GridError> {
        let count = width as usize * height as usize;
        Self::new(width, height, tile_size, vec![kind; count])
    }

    /// Parses ASCII rows (`.` floor, `#` wall, `*` bush, `~` water).
    pub fn from_rows<S: AsRef<str>>(rows: &[S], tile_size: f32) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map(|row| row.as_ref().chars().count()).unwrap_or(0);

        let mut tiles = Vec::with_capacity(width * height);
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let actual = row.chars().count();
            if actual != width {
                return Err(GridError::RaggedRow {
                    row: y,
                    expected: width,
                    actual,
                });
            }
            for (x, glyph) in row.chars().enumerate() {
                let kind = TileKind::from_glyph(glyph).ok_or(GridError::UnknownGlyph {
                    glyph,
                    position: TilePos::new(x as i32, y as i32),
                })?;
                tiles.push(kind);
            }
        }

        Self::new(width as u32, height as u32, tile_size, tiles)
    }

    pub fn tile(&self, tile: TilePos) -> Option<TileKind> {
        self.index(tile).map(|idx| self.tiles[idx])
    }

    /// Overwrites a tile while a level is being assembled. Returns `false`
    /// for out-of-bounds positions.
    pub fn set_tile(&mut self, tile: TilePos, kind: TileKind) -> bool {
        match self.index(tile) {
            Some(idx) => {
                self.tiles[idx] = kind;
                true
            }
            None => false,
        }
    }

    /// ASCII rendering, one string per row.
    pub fn to_rows(&self) -> Vec<String> {
        self.tiles
            .chunks(self.dimensions.width as usize)
            .map(|row| row.iter().map(|kind| kind.glyph()).collect())
            .collect()
    }

    fn index(&self, tile: TilePos) -> Option<usize> {
        if !self.dimensions.contains(tile) {
            return None;
        }
        Some(tile.y as usize * self.dimensions.width as usize + tile.x as usize)
    }
}

impl LevelOracle for TileGrid {
    fn dimensions(&self) -> LevelDimensions {
        self.dimensions
    }

    fn tile_size(&self) -> f32 {
        self.tile_size
    }

    fn is_tile_blocked(&self, tile: TilePos) -> bool {
        self.tile(tile).is_none_or(|kind| !kind.is_walkable())
    }
}
