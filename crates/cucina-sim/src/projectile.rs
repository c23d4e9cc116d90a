use cucina_core::constants::{EXPLOSION_LINGER_MS, PROJECTILE_RADIUS};
use glam::Vec2;

/// A thrown object in flight. Hit tests are point-in-box against hostile
/// bounds; the radius is a render hint only.
#[derive(Debug, Clone)]
pub struct Projectile {
    pub pos: Vec2,
    pub vel: Vec2,
    pub damage: i32,
    pub spawn_ms: u64,
    pub ttl_ms: u64,
    /// Downward acceleration, units per second^2. Zero for light lobs.
    pub gravity: f32,
    pub radius: f32,
}

impl Projectile {
    pub fn new(pos: Vec2, vel: Vec2, damage: i32, spawn_ms: u64, ttl_ms: u64, gravity: f32) -> Self {
        Self {
            pos,
            vel,
            damage,
            spawn_ms,
            ttl_ms,
            gravity,
            radius: PROJECTILE_RADIUS,
        }
    }

    pub fn update(&mut self, dt_s: f32) {
        self.vel.y += self.gravity * dt_s;
        self.pos += self.vel * dt_s;
    }

    pub fn expired(&self, now_ms: u64) -> bool {
        now_ms >= self.spawn_ms + self.ttl_ms
    }

    /// Fraction of lifetime remaining, clamped to [0, 1]. 1.0 at spawn,
    /// 0.0 at expiry. Render-side fade.
    pub fn life_fraction(&self, now_ms: u64) -> f32 {
        let elapsed = now_ms.saturating_sub(self.spawn_ms) as f32;
        (1.0 - elapsed / self.ttl_ms as f32).clamp(0.0, 1.0)
    }
}

/// A fused charge in flight. Unlike projectiles it never detonates on
/// contact; only the fuse timer matters.
#[derive(Debug, Clone)]
pub struct Grenade {
    pub pos: Vec2,
    pub vel: Vec2,
    pub damage: i32,
    pub spawn_ms: u64,
    pub detonate_at_ms: u64,
    pub blast_radius: f32,
    pub gravity: f32,
}

impl Grenade {
    pub fn update(&mut self, dt_s: f32) {
        self.vel.y += self.gravity * dt_s;
        self.pos += self.vel * dt_s;
    }

    pub fn due(&self, now_ms: u64) -> bool {
        now_ms >= self.detonate_at_ms
    }

    /// Fraction of fuse remaining, clamped to [0, 1]. 1.0 when thrown,
    /// 0.0 at detonation.
    pub fn fuse_fraction(&self, now_ms: u64) -> f32 {
        let fuse = (self.detonate_at_ms - self.spawn_ms) as f32;
        let elapsed = now_ms.saturating_sub(self.spawn_ms) as f32;
        (1.0 - elapsed / fuse).clamp(0.0, 1.0)
    }
}

/// A detonation left behind for render fade-out. Damage was applied at the
/// instant of detonation; this is inert.
#[derive(Debug, Clone)]
pub struct Explosion {
    pub pos: Vec2,
    pub radius: f32,
    pub spawn_ms: u64,
}

impl Explosion {
    pub fn expired(&self, now_ms: u64) -> bool {
        now_ms >= self.spawn_ms + EXPLOSION_LINGER_MS
    }

    /// Fraction of the linger remaining, clamped to [0, 1].
    pub fn life_fraction(&self, now_ms: u64) -> f32 {
        let elapsed = now_ms.saturating_sub(self.spawn_ms) as f32;
        (1.0 - elapsed / EXPLOSION_LINGER_MS as f32).clamp(0.0, 1.0)
    }
}
