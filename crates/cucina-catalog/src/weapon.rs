use cucina_core::types::WeaponKind;
use serde::{Deserialize, Serialize};

/// How a weapon resolves when used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeaponClass {
    /// Directional hit rectangle in front of the attacker.
    Melee,
    /// Single-use projectile launched along the facing direction.
    Thrown,
    /// Single-use fused charge that detonates in a radius.
    Area,
}

/// A single weapon definition loaded from RON data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeaponDef {
    /// Stable enum tag. Each kind appears exactly once in the catalog.
    pub kind: WeaponKind,
    /// Human-readable name for HUD display.
    pub name: String,
    /// Damage per landed hit.
    pub damage: i32,
    /// Melee reach in world units (near edge starts at the attacker radius).
    pub range: f32,
    /// Minimum interval between uses.
    pub cooldown_ms: u64,
    pub class: WeaponClass,
    /// Launch speed for Thrown/Area weapons, world units per second.
    #[serde(default)]
    pub throw_speed: f32,
    /// Initial vertical velocity bias for thrown arcs (negative = up).
    #[serde(default)]
    pub throw_lift: f32,
    /// Downward acceleration on the launched projectile. Zero for flat
    /// trajectories (bullets).
    #[serde(default)]
    pub gravity: f32,
    /// Fuse delay before an Area weapon detonates.
    #[serde(default)]
    pub fuse_ms: u64,
    /// Detonation radius for Area weapons.
    #[serde(default)]
    pub blast_radius: f32,
}

/// Weapon definitions indexed by kind.
#[derive(Debug, Clone, Default)]
pub struct WeaponTable {
    pub weapons: Vec<WeaponDef>,
}

impl WeaponTable {
    /// Look up a weapon by kind. The validator guarantees every kind exists,
    /// so `get` only returns None on an unvalidated table.
    pub fn get(&self, kind: WeaponKind) -> Option<&WeaponDef> {
        self.weapons.iter().find(|w| w.kind == kind)
    }

    pub fn len(&self) -> usize {
        self.weapons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weapons.is_empty()
    }
}
