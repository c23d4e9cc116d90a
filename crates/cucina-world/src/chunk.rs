use cucina_core::constants::{CHUNK_TILES, PICKUP_RADIUS, TILE_SIZE};
use cucina_core::math::{chunk_origin, Rect};
use cucina_core::types::{ChunkCoord, FeatureKind, PickupKind, TileKind};
use glam::Vec2;

/// Tiles per chunk (row-major).
pub const TILES_PER_CHUNK: usize = CHUNK_TILES * CHUNK_TILES;

/// A decorative generation feature. Never collides.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Feature {
    pub kind: FeatureKind,
    pub pos: Vec2,
}

/// A world-placed collectable item. Owned by exactly one chunk until it is
/// collected, at which point ownership moves to a respawn ticket or an
/// actor's inventory.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pickup {
    pub pos: Vec2,
    pub kind: PickupKind,
    pub radius: f32,
}

impl Pickup {
    pub fn new(pos: Vec2, kind: PickupKind) -> Self {
        Self {
            pos,
            kind,
            radius: PICKUP_RADIUS,
        }
    }

    /// Whether this pickup's bounding circle intersects `rect` (rect test
    /// expanded by the pickup radius, inclusive).
    pub fn intersects(&self, rect: &Rect) -> bool {
        rect.expanded(self.radius).contains_point(self.pos)
    }
}

/// One generated chunk: a fixed tile grid plus its features and pickups.
/// Regenerating the same coordinate reproduces identical content.
#[derive(Debug, Clone)]
pub struct Chunk {
    pub coord: ChunkCoord,
    /// Row-major tile grid, `tiles[ty * CHUNK_TILES + tx]`.
    pub tiles: [TileKind; TILES_PER_CHUNK],
    pub features: Vec<Feature>,
    pub pickups: Vec<Pickup>,
    pub generated: bool,
}

impl Chunk {
    /// A blank, not-yet-generated chunk.
    pub fn blank(coord: ChunkCoord) -> Self {
        Self {
            coord,
            tiles: [TileKind::Grass; TILES_PER_CHUNK],
            features: Vec::new(),
            pickups: Vec::new(),
            generated: false,
        }
    }

    pub fn tile(&self, tx: usize, ty: usize) -> TileKind {
        self.tiles[ty * CHUNK_TILES + tx]
    }

    pub fn set_tile(&mut self, tx: usize, ty: usize, kind: TileKind) {
        self.tiles[ty * CHUNK_TILES + tx] = kind;
    }

    /// World-space top-left corner of this chunk.
    pub fn origin(&self) -> Vec2 {
        chunk_origin(self.coord)
    }

    /// World-space center of tile (tx, ty) in this chunk.
    pub fn tile_center(&self, tx: usize, ty: usize) -> Vec2 {
        tile_center(self.coord, tx, ty)
    }
}

/// World-space center of tile (tx, ty) inside chunk `coord`.
pub fn tile_center(coord: ChunkCoord, tx: usize, ty: usize) -> Vec2 {
    chunk_origin(coord) + Vec2::new((tx as f32 + 0.5) * TILE_SIZE, (ty as f32 + 0.5) * TILE_SIZE)
}
