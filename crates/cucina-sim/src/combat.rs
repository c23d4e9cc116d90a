use crate::actor::{Hostile, Player};
use crate::projectile::{Explosion, Grenade, Projectile};
use cucina_catalog::weapon::{WeaponClass, WeaponTable};
use cucina_core::constants::{
    IMPROVISED_THROW_LIFT, IMPROVISED_THROW_SPEED, MELEE_WIDTH, PROJECTILE_GRAVITY,
    PROJECTILE_TTL_MS,
};
use cucina_core::math::Rect;
use cucina_core::types::{Facing, WeaponKind};
use glam::Vec2;

/// Directional melee hit rectangle. The near edge starts at the attacker's
/// bounding radius so the swing covers the space in front of the body, not
/// the body itself.
pub fn melee_rect(
    origin: Vec2,
    attacker_radius: f32,
    facing: Facing,
    range: f32,
    width: f32,
) -> Rect {
    let half_w = width / 2.0;
    let near = attacker_radius;
    let (min_x, max_x) = match facing {
        Facing::Right => (origin.x + near, origin.x + near + range),
        Facing::Left => (origin.x - near - range, origin.x - near),
    };
    Rect::new(
        Vec2::new(min_x, origin.y - half_w),
        Vec2::new(max_x, origin.y + half_w),
    )
}

/// Owns everything combat puts in flight and resolves hits against hostiles.
/// All damage flows through `Hostile::apply_hit`, so knockback and stagger
/// behave identically whatever the source.
#[derive(Default)]
pub struct CombatResolver {
    projectiles: Vec<Projectile>,
    grenades: Vec<Grenade>,
    explosions: Vec<Explosion>,
}

impl CombatResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the equipped weapon. Gated on its cooldown; a blocked attempt
    /// neither spends the weapon nor resets the timer. Returns total damage
    /// landed (melee only; flight damage lands in `update`).
    pub fn attack(
        &mut self,
        player: &mut Player,
        weapons: &WeaponTable,
        hostiles: &mut [Hostile],
        now_ms: u64,
    ) -> u32 {
        let Some(def) = weapons.get(player.weapon) else {
            return 0;
        };
        if !player.cooldown_ready(now_ms, def.cooldown_ms) {
            return 0;
        }
        player.last_attack_ms = Some(now_ms);

        match def.class {
            WeaponClass::Melee => {
                let rect = melee_rect(player.pos, player.radius, player.facing, def.range, MELEE_WIDTH);
                let mut dealt = 0;
                for h in hostiles.iter_mut() {
                    if rect.overlaps(&h.bounds()) {
                        let dir = (h.pos - player.pos)
                            .try_normalize()
                            .unwrap_or(player.facing.dir());
                        h.apply_hit(def.damage, dir, now_ms);
                        dealt += def.damage as u32;
                    }
                }
                dealt
            }
            WeaponClass::Thrown => {
                let dir = player.facing.dir();
                self.projectiles.push(Projectile::new(
                    player.pos + dir * player.radius,
                    dir * def.throw_speed + Vec2::new(0.0, def.throw_lift),
                    def.damage,
                    now_ms,
                    PROJECTILE_TTL_MS,
                    def.gravity,
                ));
                player.consume_equipped();
                0
            }
            WeaponClass::Area => {
                let dir = player.facing.dir();
                self.grenades.push(Grenade {
                    pos: player.pos + dir * player.radius,
                    vel: dir * def.throw_speed + Vec2::new(0.0, def.throw_lift),
                    damage: def.damage,
                    spawn_ms: now_ms,
                    detonate_at_ms: now_ms + def.fuse_ms,
                    blast_radius: def.blast_radius,
                    gravity: def.gravity,
                });
                player.consume_equipped();
                0
            }
        }
    }

    /// Fling the held melee weapon as an improvised projectile. The thrown
    /// item hits harder than a swing but the weapon is gone. No-op for Fist
    /// and for weapons that already throw.
    pub fn throw_held(&mut self, player: &mut Player, weapons: &WeaponTable, now_ms: u64) {
        if player.weapon == WeaponKind::Fist {
            return;
        }
        let Some(def) = weapons.get(player.weapon) else {
            return;
        };
        if def.class != WeaponClass::Melee || !player.cooldown_ready(now_ms, def.cooldown_ms) {
            return;
        }
        player.last_attack_ms = Some(now_ms);
        let dir = player.facing.dir();
        self.projectiles.push(Projectile::new(
            player.pos + dir * player.radius,
            dir * IMPROVISED_THROW_SPEED + Vec2::new(0.0, IMPROVISED_THROW_LIFT),
            def.damage + 1,
            now_ms,
            PROJECTILE_TTL_MS,
            PROJECTILE_GRAVITY,
        ));
        player.consume_equipped();
    }

    /// Advance everything in flight and resolve hits against post-movement
    /// hostile positions. Projectiles stop on the first hostile containing
    /// their center; grenades ignore contact and detonate on their fuse,
    /// hitting every hostile whose center is inside the blast circle.
    /// Returns total damage landed.
    pub fn update(&mut self, dt_s: f32, now_ms: u64, hostiles: &mut [Hostile]) -> u32 {
        let mut dealt = 0;

        self.projectiles.retain_mut(|p| {
            p.update(dt_s);
            for h in hostiles.iter_mut() {
                if h.bounds().contains_point(p.pos) {
                    let dir = p.vel.try_normalize().unwrap_or(Vec2::X);
                    h.apply_hit(p.damage, dir, now_ms);
                    dealt += p.damage as u32;
                    return false;
                }
            }
            true
        });

        let explosions = &mut self.explosions;
        self.grenades.retain_mut(|g| {
            g.update(dt_s);
            if !g.due(now_ms) {
                return true;
            }
            for h in hostiles.iter_mut() {
                if h.pos.distance(g.pos) <= g.blast_radius {
                    let dir = (h.pos - g.pos).try_normalize().unwrap_or(Vec2::X);
                    h.apply_hit(g.damage, dir, now_ms);
                    dealt += g.damage as u32;
                }
            }
            explosions.push(Explosion {
                pos: g.pos,
                radius: g.blast_radius,
                spawn_ms: now_ms,
            });
            false
        });

        dealt
    }

    /// Drop expired projectiles and faded explosion markers.
    pub fn expire(&mut self, now_ms: u64) {
        self.projectiles.retain(|p| !p.expired(now_ms));
        self.explosions.retain(|e| !e.expired(now_ms));
    }

    pub fn projectiles(&self) -> &[Projectile] {
        &self.projectiles
    }

    pub fn explosions(&self) -> &[Explosion] {
        &self.explosions
    }

    pub fn grenades(&self) -> &[Grenade] {
        &self.grenades
    }
}
