use crate::chunk::{tile_center, Chunk, Feature, Pickup};
use cucina_catalog::biome::{BiomeDef, BiomeLayout, BiomeTable};
use cucina_core::constants::CHUNK_TILES;
use cucina_core::rng::{chunk_seed, Lcg64};
use cucina_core::types::{ChunkCoord, FeatureKind, PickupKind, TileKind};

/// Probability each fence post along a yard edge is actually placed,
/// leaving occasional gaps.
const FENCE_POST_CHANCE: f32 = 0.9;

/// Pure chunk generator. `generate` depends only on the chunk coordinate and
/// the biome table: identical inputs produce identical chunks regardless of
/// call order or how many chunks were generated before.
pub struct ChunkGenerator {
    biomes: BiomeTable,
}

impl ChunkGenerator {
    pub fn new(biomes: BiomeTable) -> Self {
        Self { biomes }
    }

    /// Generate the chunk at `coord`.
    ///
    /// Draw order is fixed and must not be reordered, or regeneration stops
    /// being bit-for-bit reproducible:
    ///   1. biome selection (one f32)
    ///   2. tile fill, row-major (one f32 per tile, only if the biome has an
    ///      alternate tile)
    ///   3. feature placement per layout:
    ///      - Scatter: count (one u32 in [min, max]), then tx, ty per feature
    ///      - PondCluster: no draws
    ///      - FenceRing: one f32 per edge tile; top/bottom interleaved per
    ///        column, then left/right interleaved per row
    ///   4. pickup chance (one f32); on success tx, ty, then pool index
    ///
    /// The origin chunk (0, 0) is the fixed home base and consumes no draws.
    pub fn generate(&self, coord: ChunkCoord) -> Chunk {
        if coord == ChunkCoord::new(0, 0) {
            return home_base();
        }

        let mut rng = Lcg64::new(chunk_seed(coord.x, coord.y));
        let mut chunk = Chunk::blank(coord);

        // 1. biome
        let biome = self.biomes.select(rng.next_f32());

        // 2. tiles
        fill_tiles(&mut chunk, biome, &mut rng);

        // 3. features
        match biome.layout {
            BiomeLayout::Scatter => scatter_features(&mut chunk, biome, &mut rng),
            BiomeLayout::PondCluster => pond_cluster(&mut chunk, biome),
            BiomeLayout::FenceRing => fence_ring(&mut chunk, biome, &mut rng),
        }

        // 4. pickup
        if rng.next_f32() < biome.pickup_chance {
            let tx = rng.next_range_u32(0, CHUNK_TILES as u32 - 1) as usize;
            let ty = rng.next_range_u32(0, CHUNK_TILES as u32 - 1) as usize;
            let idx = rng.next_range_u32(0, biome.pickup_pool.len() as u32 - 1) as usize;
            chunk
                .pickups
                .push(Pickup::new(tile_center(coord, tx, ty), biome.pickup_pool[idx]));
        }

        chunk.generated = true;
        log::trace!(
            "generated chunk ({}, {}): biome {}, {} features, {} pickups",
            coord.x,
            coord.y,
            biome.name,
            chunk.features.len(),
            chunk.pickups.len()
        );
        chunk
    }
}

fn fill_tiles(chunk: &mut Chunk, biome: &BiomeDef, rng: &mut Lcg64) {
    match biome.alt_tile {
        Some(alt) => {
            for ty in 0..CHUNK_TILES {
                for tx in 0..CHUNK_TILES {
                    let tile = if rng.next_f32() < biome.alt_tile_chance {
                        alt
                    } else {
                        biome.base_tile
                    };
                    chunk.set_tile(tx, ty, tile);
                }
            }
        }
        None => chunk.tiles.fill(biome.base_tile),
    }
}

fn scatter_features(chunk: &mut Chunk, biome: &BiomeDef, rng: &mut Lcg64) {
    let count = rng.next_range_u32(biome.feature_min, biome.feature_max);
    for _ in 0..count {
        let tx = rng.next_range_u32(0, CHUNK_TILES as u32 - 1) as usize;
        let ty = rng.next_range_u32(0, CHUNK_TILES as u32 - 1) as usize;
        chunk.features.push(Feature {
            kind: biome.feature,
            pos: tile_center(chunk.coord, tx, ty),
        });
    }
}

fn pond_cluster(chunk: &mut Chunk, biome: &BiomeDef) {
    let mid = CHUNK_TILES / 2;
    for dy in -1i32..=1 {
        for dx in -1i32..=1 {
            let tx = (mid as i32 + dx) as usize;
            let ty = (mid as i32 + dy) as usize;
            chunk.features.push(Feature {
                kind: biome.feature,
                pos: tile_center(chunk.coord, tx, ty),
            });
        }
    }
}

fn fence_ring(chunk: &mut Chunk, biome: &BiomeDef, rng: &mut Lcg64) {
    let last = CHUNK_TILES - 1;
    let post = |chunk: &mut Chunk, rng: &mut Lcg64, tx: usize, ty: usize| {
        if rng.next_f32() < FENCE_POST_CHANCE {
            chunk.features.push(Feature {
                kind: biome.feature,
                pos: tile_center(chunk.coord, tx, ty),
            });
        }
    };
    for i in 0..CHUNK_TILES {
        post(chunk, rng, i, 0);
        post(chunk, rng, i, last);
    }
    for i in 0..CHUNK_TILES {
        post(chunk, rng, 0, i);
        post(chunk, rng, last, i);
    }
}

/// The fixed home-base layout at (0, 0): kitchen floor, an interior wall
/// column making a small side room, and one of each starter pickup. No
/// random draws at all, so the spawn chunk never varies.
fn home_base() -> Chunk {
    let coord = ChunkCoord::new(0, 0);
    let mut chunk = Chunk::blank(coord);
    chunk.tiles.fill(TileKind::KitchenFloor);

    for ty in 1..CHUNK_TILES - 1 {
        chunk.features.push(Feature {
            kind: FeatureKind::Wall,
            pos: tile_center(coord, 2, ty),
        });
    }

    let starters = [
        (1, 1, PickupKind::FryingPan),
        (4, 1, PickupKind::Broom),
        (1, 4, PickupKind::Chair),
        (4, 4, PickupKind::Tomato),
    ];
    for (tx, ty, kind) in starters {
        chunk
            .pickups
            .push(Pickup::new(tile_center(coord, tx, ty), kind));
    }

    chunk.generated = true;
    chunk
}
