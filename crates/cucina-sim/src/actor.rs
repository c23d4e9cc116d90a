use cucina_core::constants::{
    GUN_DURATION_MS, HOSTILE_HEALTH, HOSTILE_RADIUS, KNOCKBACK_DAMPING, KNOCKBACK_SPEED,
    PLAYER_RADIUS, PLAYER_SPEED, STAGGER_MS, STARTING_LIVES, WOBBLE_AMPLITUDE,
    WOBBLE_COS_PERIOD_MS, WOBBLE_SIN_PERIOD_MS,
};
use cucina_core::math::Rect;
use cucina_core::types::{Facing, PickupKind, WeaponKind};
use glam::Vec2;

/// Hostile behavior state. Exactly one of these at a time; a fresh hit while
/// staggered restarts the timer rather than stacking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostileState {
    /// Homing toward the player with a sinusoidal wobble.
    Seeking,
    /// Knocked back, sliding under damping until the timer expires.
    Staggered { until_ms: u64 },
}

#[derive(Debug, Clone)]
pub struct Hostile {
    pub pos: Vec2,
    pub vel: Vec2,
    pub speed: f32,
    pub health: i32,
    pub max_health: i32,
    pub radius: f32,
    pub state: HostileState,
    /// Per-hostile wobble phase offset so a pack does not oscillate in sync.
    pub phase: f32,
}

impl Hostile {
    pub fn new(pos: Vec2, speed: f32, phase: f32) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            speed,
            health: HOSTILE_HEALTH,
            max_health: HOSTILE_HEALTH,
            radius: HOSTILE_RADIUS,
            state: HostileState::Seeking,
            phase,
        }
    }

    /// Take a hit: subtract damage, set knockback velocity along `dir`
    /// (assumed unit length), and enter Staggered. Health may go negative;
    /// the loop removes dead hostiles in its scheduled phase, never here.
    pub fn apply_hit(&mut self, damage: i32, dir: Vec2, now_ms: u64) {
        self.health -= damage;
        self.vel = dir * KNOCKBACK_SPEED;
        self.state = HostileState::Staggered {
            until_ms: now_ms + STAGGER_MS,
        };
    }

    /// Advance one tick. Staggered hostiles slide on their decaying
    /// knockback velocity; seeking hostiles home on `target` with the wobble
    /// perturbation layered on top.
    pub fn update(&mut self, dt_s: f32, now_ms: u64, target: Vec2) {
        match self.state {
            HostileState::Staggered { .. } => {
                self.pos += self.vel * dt_s;
                self.vel *= KNOCKBACK_DAMPING;
            }
            HostileState::Seeking => {
                let home = (target - self.pos).normalize_or_zero();
                let t = now_ms as f32;
                let wobble = WOBBLE_AMPLITUDE
                    * Vec2::new(
                        (self.phase + t / WOBBLE_COS_PERIOD_MS).cos(),
                        (self.phase + t / WOBBLE_SIN_PERIOD_MS).sin(),
                    );
                self.pos += (home + wobble) * self.speed * dt_s;
            }
        }
    }

    /// Return to Seeking if the stagger timer has elapsed. True when the
    /// transition happened this call.
    pub fn expire_stagger(&mut self, now_ms: u64) -> bool {
        if let HostileState::Staggered { until_ms } = self.state {
            if now_ms >= until_ms {
                self.state = HostileState::Seeking;
                self.vel = Vec2::ZERO;
                return true;
            }
        }
        false
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }

    /// Remaining health in [0, 1], for health-bar rendering.
    pub fn health_fraction(&self) -> f32 {
        self.health.max(0) as f32 / self.max_health as f32
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_center_half_extents(self.pos, Vec2::splat(self.radius))
    }
}

#[derive(Debug, Clone)]
pub struct Player {
    pub pos: Vec2,
    pub radius: f32,
    pub facing: Facing,
    pub lives: i32,
    /// Currently equipped capability. Fist whenever nothing usable is held.
    pub weapon: WeaponKind,
    pub inventory: Vec<PickupKind>,
    pub last_attack_ms: Option<u64>,
    /// Expiry of the timed gun powerup, when one is active.
    pub gun_until_ms: Option<u64>,
}

impl Player {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            radius: PLAYER_RADIUS,
            facing: Facing::Right,
            lives: STARTING_LIVES,
            weapon: WeaponKind::Fist,
            inventory: Vec::new(),
            last_attack_ms: None,
            gun_until_ms: None,
        }
    }

    /// Move along `dir` (normalized here) and update facing from the
    /// horizontal component. Vertical-only movement keeps the old facing.
    pub fn advance(&mut self, dt_s: f32, dir: Vec2) {
        let dir = dir.normalize_or_zero();
        self.pos += dir * PLAYER_SPEED * dt_s;
        if dir.x > 0.0 {
            self.facing = Facing::Right;
        } else if dir.x < 0.0 {
            self.facing = Facing::Left;
        }
    }

    /// Whether the equipped weapon's cooldown has elapsed. The cooldown is
    /// shared across weapons: swapping mid-cooldown does not reset it.
    pub fn cooldown_ready(&self, now_ms: u64, cooldown_ms: u64) -> bool {
        match self.last_attack_ms {
            Some(last) => now_ms >= last + cooldown_ms,
            None => true,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_center_half_extents(self.pos, Vec2::splat(self.radius))
    }

    /// Add a collected pickup. The gun is a timed powerup: it always equips
    /// and starts (or restarts) its expiry clock without entering the
    /// inventory. Anything else equips only when currently unarmed; a held
    /// weapon is never silently replaced.
    pub fn acquire(&mut self, kind: PickupKind, now_ms: u64) {
        if kind == PickupKind::Gun {
            self.weapon = WeaponKind::Gun;
            self.gun_until_ms = Some(now_ms + GUN_DURATION_MS);
            return;
        }
        self.inventory.push(kind);
        if self.weapon == WeaponKind::Fist {
            self.weapon = kind.weapon();
        }
    }

    /// Revert from the gun once its timer elapses, falling back to the next
    /// held item or to Fist. True when the powerup expired this call.
    pub fn expire_gun(&mut self, now_ms: u64) -> bool {
        let Some(until) = self.gun_until_ms else {
            return false;
        };
        if now_ms < until {
            return false;
        }
        self.gun_until_ms = None;
        if self.weapon == WeaponKind::Gun {
            self.weapon = self
                .inventory
                .first()
                .map(|k| k.weapon())
                .unwrap_or(WeaponKind::Fist);
        }
        true
    }

    /// Consume one inventory instance of the equipped weapon. When the last
    /// instance goes, fall back to the next held item or to Fist. The gun is
    /// not inventory-backed and expires on its own clock, so firing it never
    /// consumes anything.
    pub fn consume_equipped(&mut self) {
        if self.weapon == WeaponKind::Gun {
            return;
        }
        let Some(backing) = self.weapon.pickup() else {
            return;
        };
        if let Some(idx) = self.inventory.iter().position(|k| *k == backing) {
            self.inventory.remove(idx);
        }
        if !self.inventory.contains(&backing) {
            self.weapon = self
                .inventory
                .first()
                .map(|k| k.weapon())
                .unwrap_or(WeaponKind::Fist);
        }
    }
}
