//! Procedural streamed world: deterministic chunk generation, a lazily
//! populated chunk map, and the pickup respawn scheduler.

pub mod chunk;
pub mod chunk_map;
pub mod generator;
pub mod respawn;

use chunk::Chunk;
use chunk_map::ChunkMap;
use cucina_catalog::biome::BiomeTable;
use cucina_core::constants::{RESPAWN_MAX_MS, RESPAWN_MIN_MS};
use cucina_core::math::{world_to_chunk, Rect};
use cucina_core::types::PickupKind;
use generator::ChunkGenerator;
use glam::Vec2;
use respawn::RespawnScheduler;

/// Facade over generation, streaming and respawn. The simulation talks to
/// this type; the pieces stay independently testable underneath.
pub struct World {
    map: ChunkMap,
    generator: ChunkGenerator,
    respawn: RespawnScheduler,
}

impl World {
    pub fn new(biomes: BiomeTable, seed: u64) -> Self {
        Self {
            map: ChunkMap::new(),
            generator: ChunkGenerator::new(biomes),
            respawn: RespawnScheduler::new(RESPAWN_MIN_MS, RESPAWN_MAX_MS, seed),
        }
    }

    /// Load every chunk within Chebyshev distance `radius` of the chunk
    /// containing `pos`. Call once per frame before anything reads the map.
    pub fn stream_around(&mut self, pos: Vec2, radius: i32) {
        self.map
            .ensure_loaded(&self.generator, world_to_chunk(pos), radius);
    }

    /// Loaded chunks around `pos` in stable row-major order.
    pub fn visible_chunks(&self, pos: Vec2, radius: i32) -> Vec<&Chunk> {
        self.map.chunks_in_radius(world_to_chunk(pos), radius)
    }

    /// Collect the first pickup whose circle intersects `rect`, scheduling
    /// its respawn. Returns what was picked up, if anything.
    pub fn collect_pickup_in(&mut self, rect: &Rect, now_ms: u64) -> Option<PickupKind> {
        let (coord, pickup) = self.map.pickups_intersecting(rect).into_iter().next()?;
        self.respawn.collect(&mut self.map, coord, &pickup, now_ms)
    }

    /// Fire due respawn tickets.
    pub fn process_respawns(&mut self, now_ms: u64) {
        self.respawn.tick(&mut self.map, now_ms);
    }

    pub fn pending_respawns(&self) -> usize {
        self.respawn.pending_count()
    }

    pub fn map(&self) -> &ChunkMap {
        &self.map
    }
}
