use crate::biome::{BiomeDef, BiomeTable};
use crate::weapon::{WeaponDef, WeaponTable};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to parse weapons RON: {0}")]
    WeaponParseError(String),
    #[error("Failed to parse biomes RON: {0}")]
    BiomeParseError(String),
}

/// Parse a weapons RON string into a WeaponTable.
pub fn load_weapons_from_str(ron_str: &str) -> Result<WeaponTable, LoadError> {
    let options = ron::Options::default();
    let weapons: Vec<WeaponDef> = options
        .from_str(ron_str)
        .map_err(|e| LoadError::WeaponParseError(e.to_string()))?;
    Ok(WeaponTable { weapons })
}

/// Parse a biomes RON string into a BiomeTable (cumulative table included).
pub fn load_biomes_from_str(ron_str: &str) -> Result<BiomeTable, LoadError> {
    let options = ron::Options::default();
    let biomes: Vec<BiomeDef> = options
        .from_str(ron_str)
        .map_err(|e| LoadError::BiomeParseError(e.to_string()))?;
    Ok(BiomeTable::new(biomes))
}
