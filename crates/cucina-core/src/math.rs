use crate::constants::CHUNK_SIZE_PX;
use crate::types::ChunkCoord;
use glam::Vec2;

/// Axis-aligned rectangle with half-open extent semantics: a point on the
/// min edge is inside, a point on the max edge is not. Using [min, max) for
/// every overlap test keeps shared edges from double-counting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_center_half_extents(center: Vec2, half: Vec2) -> Self {
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Half-open overlap test: inclusive min, exclusive max on both axes.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }

    /// Half-open containment: min edge inside, max edge outside.
    pub fn contains_point(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x < self.max.x && p.y >= self.min.y && p.y < self.max.y
    }

    /// Rectangle grown by `r` on every side. Testing a circle center against
    /// the expanded rect approximates circle-vs-rect intersection (exact on
    /// the edges, slightly generous at corners), matching pickup collection.
    pub fn expanded(&self, r: f32) -> Rect {
        Rect {
            min: self.min - Vec2::splat(r),
            max: self.max + Vec2::splat(r),
        }
    }
}

/// Convert a world-space position to its containing chunk coordinate.
/// Floor division so negative positions map to negative chunks.
pub fn world_to_chunk(pos: Vec2) -> ChunkCoord {
    ChunkCoord::new(
        (pos.x / CHUNK_SIZE_PX).floor() as i32,
        (pos.y / CHUNK_SIZE_PX).floor() as i32,
    )
}

/// World-space origin (top-left corner) of a chunk.
pub fn chunk_origin(coord: ChunkCoord) -> Vec2 {
    Vec2::new(coord.x as f32 * CHUNK_SIZE_PX, coord.y as f32 * CHUNK_SIZE_PX)
}
