use crate::biome::{BiomeLayout, BiomeTable};
use crate::weapon::{WeaponClass, WeaponTable};
use cucina_core::types::WeaponKind;
use std::collections::HashSet;
use thiserror::Error;

/// Tolerance for the biome weight sum check.
const WEIGHT_SUM_EPSILON: f32 = 1e-3;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Duplicate weapon definition for {0:?}")]
    DuplicateWeapon(WeaponKind),
    #[error("Missing weapon definition for {0:?}")]
    MissingWeapon(WeaponKind),
    #[error("Weapon '{name}' has non-positive damage {value}")]
    NonPositiveDamage { name: String, value: i32 },
    #[error("Weapon '{name}' has zero cooldown")]
    ZeroCooldown { name: String },
    #[error("Melee weapon '{name}' has non-positive range {value}")]
    NonPositiveRange { name: String, value: f32 },
    #[error("Thrown weapon '{name}' has non-positive launch speed {value}")]
    NonPositiveThrowSpeed { name: String, value: f32 },
    #[error("Area weapon '{name}' has zero fuse or non-positive blast radius")]
    InvalidAreaWeapon { name: String },
    #[error("Biome table is empty")]
    NoBiomes,
    #[error("Biome '{name}' has non-positive weight {value}")]
    NonPositiveWeight { name: String, value: f32 },
    #[error("Biome weights sum to {sum}, expected 1.0")]
    WeightSumMismatch { sum: f32 },
    #[error("Biome '{name}' chance {value} outside [0, 1]")]
    ChanceOutOfRange { name: String, value: f32 },
    #[error("Biome '{name}' has pickup_chance > 0 but an empty pickup pool")]
    EmptyPickupPool { name: String },
    #[error("Biome '{name}' scatter range inverted ({min} > {max})")]
    InvertedFeatureRange { name: String, min: u32, max: u32 },
}

/// Validate the weapon catalog: every kind defined exactly once, with sane
/// per-class numbers. Unknown kinds cannot occur (the enum is closed), so
/// coverage plus uniqueness makes later `get` lookups infallible.
pub fn validate_weapons(table: &WeaponTable) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let mut seen = HashSet::new();
    for w in &table.weapons {
        if !seen.insert(w.kind) {
            errors.push(ValidationError::DuplicateWeapon(w.kind));
        }
    }
    for kind in WeaponKind::ALL {
        if !seen.contains(&kind) {
            errors.push(ValidationError::MissingWeapon(kind));
        }
    }

    for w in &table.weapons {
        if w.damage <= 0 {
            errors.push(ValidationError::NonPositiveDamage {
                name: w.name.clone(),
                value: w.damage,
            });
        }
        if w.cooldown_ms == 0 {
            errors.push(ValidationError::ZeroCooldown {
                name: w.name.clone(),
            });
        }
        match w.class {
            WeaponClass::Melee => {
                if w.range <= 0.0 {
                    errors.push(ValidationError::NonPositiveRange {
                        name: w.name.clone(),
                        value: w.range,
                    });
                }
            }
            WeaponClass::Thrown => {
                if w.throw_speed <= 0.0 {
                    errors.push(ValidationError::NonPositiveThrowSpeed {
                        name: w.name.clone(),
                        value: w.throw_speed,
                    });
                }
            }
            WeaponClass::Area => {
                if w.throw_speed <= 0.0 {
                    errors.push(ValidationError::NonPositiveThrowSpeed {
                        name: w.name.clone(),
                        value: w.throw_speed,
                    });
                }
                if w.fuse_ms == 0 || w.blast_radius <= 0.0 {
                    errors.push(ValidationError::InvalidAreaWeapon {
                        name: w.name.clone(),
                    });
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validate the biome table: weights positive and summing to 1.0, chances in
/// range, pickup pools consistent with their chances.
pub fn validate_biomes(table: &BiomeTable) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if table.is_empty() {
        errors.push(ValidationError::NoBiomes);
        return Err(errors);
    }

    for b in table.biomes() {
        if b.weight <= 0.0 {
            errors.push(ValidationError::NonPositiveWeight {
                name: b.name.clone(),
                value: b.weight,
            });
        }
        for chance in [b.pickup_chance, b.alt_tile_chance] {
            if !(0.0..=1.0).contains(&chance) {
                errors.push(ValidationError::ChanceOutOfRange {
                    name: b.name.clone(),
                    value: chance,
                });
            }
        }
        if b.pickup_chance > 0.0 && b.pickup_pool.is_empty() {
            errors.push(ValidationError::EmptyPickupPool {
                name: b.name.clone(),
            });
        }
        if b.layout == BiomeLayout::Scatter && b.feature_min > b.feature_max {
            errors.push(ValidationError::InvertedFeatureRange {
                name: b.name.clone(),
                min: b.feature_min,
                max: b.feature_max,
            });
        }
    }

    let sum = table.total_weight();
    if (sum - 1.0).abs() > WEIGHT_SUM_EPSILON {
        errors.push(ValidationError::WeightSumMismatch { sum });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::biome::BiomeDef;
    use crate::weapon::WeaponDef;
    use cucina_core::types::{FeatureKind, PickupKind, TileKind};

    fn melee(kind: WeaponKind, name: &str) -> WeaponDef {
        WeaponDef {
            kind,
            name: name.into(),
            damage: 1,
            range: 78.0,
            cooldown_ms: 520,
            class: WeaponClass::Melee,
            throw_speed: 0.0,
            throw_lift: 0.0,
            gravity: 0.0,
            fuse_ms: 0,
            blast_radius: 0.0,
        }
    }

    fn full_weapon_table() -> WeaponTable {
        let mut weapons = vec![
            melee(WeaponKind::Fist, "Fist"),
            melee(WeaponKind::FryingPan, "Frying Pan"),
            melee(WeaponKind::Broom, "Broom"),
            melee(WeaponKind::Chair, "Chair"),
        ];
        let mut tomato = melee(WeaponKind::Tomato, "Tomato");
        tomato.class = WeaponClass::Thrown;
        tomato.throw_speed = 280.0;
        weapons.push(tomato);
        let mut grenade = melee(WeaponKind::Grenade, "Grenade");
        grenade.class = WeaponClass::Area;
        grenade.throw_speed = 220.0;
        grenade.fuse_ms = 1100;
        grenade.blast_radius = 90.0;
        weapons.push(grenade);
        let mut gun = melee(WeaponKind::Gun, "Gun");
        gun.class = WeaponClass::Thrown;
        gun.throw_speed = 480.0;
        weapons.push(gun);
        WeaponTable { weapons }
    }

    fn grass_biome(name: &str, weight: f32) -> BiomeDef {
        BiomeDef {
            name: name.into(),
            weight,
            base_tile: TileKind::Grass,
            alt_tile: None,
            alt_tile_chance: 0.0,
            layout: BiomeLayout::Scatter,
            feature: FeatureKind::Tree,
            feature_min: 0,
            feature_max: 2,
            pickup_chance: 0.18,
            pickup_pool: vec![PickupKind::Tomato],
        }
    }

    #[test]
    fn test_full_table_validates() {
        assert!(validate_weapons(&full_weapon_table()).is_ok());
    }

    #[test]
    fn test_missing_weapon_rejected() {
        let mut table = full_weapon_table();
        table.weapons.retain(|w| w.kind != WeaponKind::Broom);
        let errors = validate_weapons(&table).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, ValidationError::MissingWeapon(WeaponKind::Broom))));
    }

    #[test]
    fn test_duplicate_weapon_rejected() {
        let mut table = full_weapon_table();
        table.weapons.push(melee(WeaponKind::Fist, "Fist Again"));
        let errors = validate_weapons(&table).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, ValidationError::DuplicateWeapon(WeaponKind::Fist))));
    }

    #[test]
    fn test_area_weapon_without_fuse_rejected() {
        let mut table = full_weapon_table();
        for w in &mut table.weapons {
            if w.kind == WeaponKind::Grenade {
                w.fuse_ms = 0;
            }
        }
        let errors = validate_weapons(&table).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, ValidationError::InvalidAreaWeapon { .. })));
    }

    #[test]
    fn test_weights_must_sum_to_one() {
        let table = BiomeTable::new(vec![grass_biome("A", 0.5), grass_biome("B", 0.4)]);
        let errors = validate_biomes(&table).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, ValidationError::WeightSumMismatch { .. })));
    }

    #[test]
    fn test_valid_weights_pass() {
        let table = BiomeTable::new(vec![grass_biome("A", 0.5), grass_biome("B", 0.5)]);
        assert!(validate_biomes(&table).is_ok());
    }

    #[test]
    fn test_empty_pool_with_chance_rejected() {
        let mut b = grass_biome("A", 1.0);
        b.pickup_pool.clear();
        let table = BiomeTable::new(vec![b]);
        let errors = validate_biomes(&table).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, ValidationError::EmptyPickupPool { .. })));
    }
}
