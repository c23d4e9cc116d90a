pub mod biome;
pub mod loader;
pub mod validator;
pub mod weapon;

use biome::BiomeTable;
use thiserror::Error;
use weapon::WeaponTable;

/// Default catalog data, embedded at compile time.
const WEAPONS_RON: &str = include_str!("../../../data/weapons.ron");
const BIOMES_RON: &str = include_str!("../../../data/biomes.ron");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error(transparent)]
    Load(#[from] loader::LoadError),
    #[error("Catalog validation failed: {0:?}")]
    Invalid(Vec<validator::ValidationError>),
}

/// The validated static catalog: weapon definitions and biome profiles.
/// Constructed once at startup; identifiers outside the catalog are a
/// programming error, caught here rather than at runtime.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub weapons: WeaponTable,
    pub biomes: BiomeTable,
}

impl Catalog {
    /// Load and validate the embedded default data. Fails fast on malformed
    /// or inconsistent definitions.
    pub fn load_default() -> Result<Self, CatalogError> {
        Self::from_sources(WEAPONS_RON, BIOMES_RON)
    }

    /// Load and validate from explicit RON sources (tests, mods).
    pub fn from_sources(weapons_ron: &str, biomes_ron: &str) -> Result<Self, CatalogError> {
        let weapons = loader::load_weapons_from_str(weapons_ron)?;
        let biomes = loader::load_biomes_from_str(biomes_ron)?;
        validator::validate_weapons(&weapons).map_err(CatalogError::Invalid)?;
        validator::validate_biomes(&biomes).map_err(CatalogError::Invalid)?;
        log::debug!(
            "catalog loaded: {} weapons, {} biomes",
            weapons.len(),
            biomes.len()
        );
        Ok(Self { weapons, biomes })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cucina_core::types::WeaponKind;

    #[test]
    fn test_default_catalog_loads_and_validates() {
        let catalog = Catalog::load_default().expect("default data should validate");
        assert_eq!(catalog.weapons.len(), WeaponKind::ALL.len());
        assert_eq!(catalog.biomes.len(), 5);
        assert!((catalog.biomes.total_weight() - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_default_weapons_cover_every_kind() {
        let catalog = Catalog::load_default().expect("default data should validate");
        for kind in WeaponKind::ALL {
            assert!(catalog.weapons.get(kind).is_some(), "{kind:?} missing");
        }
    }

    #[test]
    fn test_invalid_sources_rejected() {
        // Weight sum off by 0.5 must fail fast.
        let biomes = r#"[
            (name: "Only", weight: 0.5, base_tile: Grass, layout: Scatter,
             feature: Tree, feature_max: 1, pickup_chance: 0.0),
        ]"#;
        let result = Catalog::from_sources(super::WEAPONS_RON, biomes);
        assert!(matches!(result, Err(CatalogError::Invalid(_))));
    }
}
