use cucina_core::types::{FeatureKind, PickupKind, TileKind};
use serde::{Deserialize, Serialize};

/// How a biome arranges its features inside a chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BiomeLayout {
    /// A random count of features at random tile centers.
    Scatter,
    /// A fixed 3x3 cluster centered on the chunk (ponds). Consumes no draws.
    PondCluster,
    /// Posts along all four chunk edges, each present with 90% probability
    /// (one draw per edge tile, in documented edge order).
    FenceRing,
}

/// A single biome generation profile loaded from RON data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BiomeDef {
    /// Human-readable name for debug display.
    pub name: String,
    /// Selection weight. All weights in the table must sum to 1.0.
    pub weight: f32,
    /// Tile applied to the whole chunk (or where the alt roll fails).
    pub base_tile: TileKind,
    /// Optional per-tile alternate, rolled per tile in row-major order.
    #[serde(default)]
    pub alt_tile: Option<TileKind>,
    /// Probability a tile becomes `alt_tile` instead of `base_tile`.
    #[serde(default)]
    pub alt_tile_chance: f32,
    pub layout: BiomeLayout,
    /// Feature kind placed by the layout.
    pub feature: FeatureKind,
    /// Scatter count range, inclusive. Ignored by fixed layouts.
    #[serde(default)]
    pub feature_min: u32,
    #[serde(default)]
    pub feature_max: u32,
    /// Probability of placing one pickup in the chunk.
    #[serde(default)]
    pub pickup_chance: f32,
    /// Types the pickup is drawn from, uniformly.
    #[serde(default)]
    pub pickup_pool: Vec<PickupKind>,
}

/// Biome profiles plus the cumulative-weight selection table, built once in
/// declaration order. Selection is a single f32 draw and a linear scan.
#[derive(Debug, Clone, Default)]
pub struct BiomeTable {
    biomes: Vec<BiomeDef>,
    cumulative: Vec<f32>,
}

impl BiomeTable {
    pub fn new(biomes: Vec<BiomeDef>) -> Self {
        let mut cumulative = Vec::with_capacity(biomes.len());
        let mut acc = 0.0f32;
        for b in &biomes {
            acc += b.weight;
            cumulative.push(acc);
        }
        Self { biomes, cumulative }
    }

    /// Select a biome from a roll in [0, 1). Rolls at or past the final
    /// threshold (float accumulation slack) clamp to the last biome.
    pub fn select(&self, roll: f32) -> &BiomeDef {
        for (i, threshold) in self.cumulative.iter().enumerate() {
            if roll < *threshold {
                return &self.biomes[i];
            }
        }
        &self.biomes[self.biomes.len() - 1]
    }

    pub fn biomes(&self) -> &[BiomeDef] {
        &self.biomes
    }

    pub fn len(&self) -> usize {
        self.biomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.biomes.is_empty()
    }

    /// Sum of all weights (the validator requires this to be ~1.0).
    pub fn total_weight(&self) -> f32 {
        self.cumulative.last().copied().unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_biomes() -> BiomeTable {
        BiomeTable::new(vec![
            BiomeDef {
                name: "A".into(),
                weight: 0.25,
                base_tile: TileKind::Soil,
                alt_tile: None,
                alt_tile_chance: 0.0,
                layout: BiomeLayout::Scatter,
                feature: FeatureKind::Plant,
                feature_min: 0,
                feature_max: 0,
                pickup_chance: 0.0,
                pickup_pool: vec![],
            },
            BiomeDef {
                name: "B".into(),
                weight: 0.75,
                base_tile: TileKind::Grass,
                alt_tile: None,
                alt_tile_chance: 0.0,
                layout: BiomeLayout::Scatter,
                feature: FeatureKind::Tree,
                feature_min: 0,
                feature_max: 0,
                pickup_chance: 0.0,
                pickup_pool: vec![],
            },
        ])
    }

    #[test]
    fn test_select_by_threshold() {
        let table = two_biomes();
        assert_eq!(table.select(0.0).name, "A");
        assert_eq!(table.select(0.249).name, "A");
        assert_eq!(table.select(0.25).name, "B");
        assert_eq!(table.select(0.999).name, "B");
    }

    #[test]
    fn test_select_clamps_past_end() {
        let table = two_biomes();
        // Accumulated float error can leave the last threshold below 1.0.
        assert_eq!(table.select(1.0).name, "B");
    }

    #[test]
    fn test_total_weight() {
        let table = two_biomes();
        assert!((table.total_weight() - 1.0).abs() < 1e-6);
    }
}
