use crate::chunk::{Chunk, Pickup};
use crate::generator::ChunkGenerator;
use cucina_core::math::Rect;
use cucina_core::types::ChunkCoord;
use std::collections::HashMap;

/// Spatial container for all loaded chunks, populated lazily as the player
/// moves. Chunks are never evicted during a session; unbounded growth is an
/// accepted tradeoff at session scale.
#[derive(Default)]
pub struct ChunkMap {
    chunks: HashMap<ChunkCoord, Chunk>,
}

impl ChunkMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate and insert every chunk within Chebyshev distance `radius` of
    /// `center` that is not already loaded. Idempotent: once a neighborhood
    /// is loaded, repeated calls are no-ops.
    pub fn ensure_loaded(&mut self, gen: &ChunkGenerator, center: ChunkCoord, radius: i32) {
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                let coord = ChunkCoord::new(center.x + dx, center.y + dy);
                self.chunks
                    .entry(coord)
                    .or_insert_with(|| gen.generate(coord));
            }
        }
    }

    /// Loaded chunks within Chebyshev distance `radius` of `center`, in
    /// row-major offset order (stable for the rendering collaborator).
    pub fn chunks_in_radius(&self, center: ChunkCoord, radius: i32) -> Vec<&Chunk> {
        let mut out = Vec::new();
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                if let Some(chunk) = self.chunks.get(&ChunkCoord::new(center.x + dx, center.y + dy))
                {
                    out.push(chunk);
                }
            }
        }
        out
    }

    pub fn get(&self, coord: &ChunkCoord) -> Option<&Chunk> {
        self.chunks.get(coord)
    }

    pub fn get_mut(&mut self, coord: &ChunkCoord) -> Option<&mut Chunk> {
        self.chunks.get_mut(coord)
    }

    pub fn contains(&self, coord: &ChunkCoord) -> bool {
        self.chunks.contains_key(coord)
    }

    /// Remove a chunk entirely. Not used by streaming (no eviction); exists
    /// for orphaned-ticket handling tests and future eviction policies.
    pub fn unload_chunk(&mut self, coord: &ChunkCoord) {
        self.chunks.remove(coord);
    }

    pub fn loaded_count(&self) -> usize {
        self.chunks.len()
    }

    /// Every pickup in a loaded chunk whose bounding circle intersects
    /// `rect`, with its owning chunk key. Sorted by chunk coordinate so the
    /// result does not depend on hash iteration order.
    pub fn pickups_intersecting(&self, rect: &Rect) -> Vec<(ChunkCoord, Pickup)> {
        let mut found = Vec::new();
        for (coord, chunk) in &self.chunks {
            for p in &chunk.pickups {
                if p.intersects(rect) {
                    found.push((*coord, *p));
                }
            }
        }
        found.sort_by_key(|(coord, _)| (coord.y, coord.x));
        found
    }

    /// Remove `pickup` from chunk `coord`, matching by kind and position.
    /// Returns false (a no-op, not an error) when the chunk is not loaded or
    /// the pickup was already removed.
    pub fn remove_pickup(&mut self, coord: ChunkCoord, pickup: &Pickup) -> bool {
        let Some(chunk) = self.chunks.get_mut(&coord) else {
            return false;
        };
        match chunk
            .pickups
            .iter()
            .position(|p| p.kind == pickup.kind && p.pos == pickup.pos)
        {
            Some(idx) => {
                chunk.pickups.swap_remove(idx);
                true
            }
            None => false,
        }
    }

    /// Insert a pickup into a loaded chunk (respawn path). Returns false if
    /// the chunk is not loaded.
    pub fn insert_pickup(&mut self, coord: ChunkCoord, pickup: Pickup) -> bool {
        match self.chunks.get_mut(&coord) {
            Some(chunk) => {
                chunk.pickups.push(pickup);
                true
            }
            None => false,
        }
    }
}
