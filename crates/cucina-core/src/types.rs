use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Chunk coordinate in chunk-space (each unit = CHUNK_SIZE_PX world units).
pub type ChunkCoord = glam::IVec2;

/// Ground tile variants. Purely visual; tiles never collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileKind {
    Grass,
    Soil,
    Path,
    KitchenFloor,
}

/// Decorative feature variants placed by generation. Never collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeatureKind {
    Plant,
    Tree,
    Pond,
    FencePost,
    Wall,
}

/// World-placed item types. Collecting one adds it to the actor's inventory
/// and may change the equipped weapon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PickupKind {
    FryingPan,
    Broom,
    Chair,
    Tomato,
    Grenade,
    /// Timed powerup: equips the gun for a fixed duration instead of
    /// entering the inventory.
    Gun,
}

impl PickupKind {
    pub const ALL: [PickupKind; 6] = [
        PickupKind::FryingPan,
        PickupKind::Broom,
        PickupKind::Chair,
        PickupKind::Tomato,
        PickupKind::Grenade,
        PickupKind::Gun,
    ];

    /// The weapon this pickup equips.
    pub fn weapon(self) -> WeaponKind {
        match self {
            PickupKind::FryingPan => WeaponKind::FryingPan,
            PickupKind::Broom => WeaponKind::Broom,
            PickupKind::Chair => WeaponKind::Chair,
            PickupKind::Tomato => WeaponKind::Tomato,
            PickupKind::Grenade => WeaponKind::Grenade,
            PickupKind::Gun => WeaponKind::Gun,
        }
    }
}

/// Equippable capabilities. Fist is the default unarmed fallback and is not
/// backed by a pickup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponKind {
    Fist,
    FryingPan,
    Broom,
    Chair,
    Tomato,
    Grenade,
    Gun,
}

impl WeaponKind {
    pub const ALL: [WeaponKind; 7] = [
        WeaponKind::Fist,
        WeaponKind::FryingPan,
        WeaponKind::Broom,
        WeaponKind::Chair,
        WeaponKind::Tomato,
        WeaponKind::Grenade,
        WeaponKind::Gun,
    ];

    /// The pickup backing this weapon, if any.
    pub fn pickup(self) -> Option<PickupKind> {
        match self {
            WeaponKind::Fist => None,
            WeaponKind::FryingPan => Some(PickupKind::FryingPan),
            WeaponKind::Broom => Some(PickupKind::Broom),
            WeaponKind::Chair => Some(PickupKind::Chair),
            WeaponKind::Tomato => Some(PickupKind::Tomato),
            WeaponKind::Grenade => Some(PickupKind::Grenade),
            WeaponKind::Gun => Some(PickupKind::Gun),
        }
    }
}

/// Horizontal facing. Follows the last non-zero horizontal movement intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Facing {
    Left,
    Right,
}

impl Facing {
    /// Unit vector for this facing.
    pub fn dir(self) -> Vec2 {
        match self {
            Facing::Left => Vec2::new(-1.0, 0.0),
            Facing::Right => Vec2::new(1.0, 0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_pickup_maps_to_a_weapon() {
        for kind in PickupKind::ALL {
            let weapon = kind.weapon();
            assert_eq!(weapon.pickup(), Some(kind), "{kind:?} roundtrip failed");
        }
    }

    #[test]
    fn test_fist_has_no_pickup() {
        assert_eq!(WeaponKind::Fist.pickup(), None);
    }

    #[test]
    fn test_facing_dirs_are_unit() {
        assert_eq!(Facing::Right.dir(), Vec2::new(1.0, 0.0));
        assert_eq!(Facing::Left.dir(), Vec2::new(-1.0, 0.0));
    }
}
