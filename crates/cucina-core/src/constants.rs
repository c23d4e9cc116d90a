//! Single source of truth for shared tuning constants. World distances are
//! in pixels, durations in milliseconds against the session-monotonic clock.

/// Side length of one tile in world units.
pub const TILE_SIZE: f32 = 64.0;

/// Tiles per chunk side (chunks are CHUNK_TILES x CHUNK_TILES).
pub const CHUNK_TILES: usize = 6;

/// Side length of one chunk in world units.
pub const CHUNK_SIZE_PX: f32 = TILE_SIZE * CHUNK_TILES as f32;

/// Chebyshev radius (in chunks) streamed around the player each frame.
pub const VIEW_DISTANCE_CHUNKS: i32 = 2;

/// Seed mixing constants for per-chunk generation. Two distinct large odd
/// primes so neighboring coordinates on either axis decorrelate.
pub const SEED_MIX_X: i64 = 73_856_093;
pub const SEED_MIX_Y: i64 = 19_349_663;

/// Player movement speed, world units per second.
pub const PLAYER_SPEED: f32 = 160.0;

/// Player bounding radius.
pub const PLAYER_RADIUS: f32 = 18.0;

/// Lives the player starts with.
pub const STARTING_LIVES: i32 = 3;

/// Hostile bounding radius.
pub const HOSTILE_RADIUS: f32 = 16.0;

/// Hostile seek speed range, world units per second.
pub const HOSTILE_MIN_SPEED: f32 = 35.0;
pub const HOSTILE_MAX_SPEED: f32 = 80.0;

/// Starting health for hostiles.
pub const HOSTILE_HEALTH: i32 = 3;

/// Interval between hostile spawns.
pub const HOSTILE_SPAWN_INTERVAL_MS: u64 = 1400;

/// Amplitude of the sinusoidal seek perturbation.
pub const WOBBLE_AMPLITUDE: f32 = 0.4;

/// Periods (ms) of the two wobble axes. Deliberately unequal so the
/// perturbation traces an open curve rather than a circle.
pub const WOBBLE_COS_PERIOD_MS: f32 = 300.0;
pub const WOBBLE_SIN_PERIOD_MS: f32 = 500.0;

/// Perpendicular width of the melee hit rectangle.
pub const MELEE_WIDTH: f32 = 88.0;

/// Speed imparted to a hit actor, world units per second.
pub const KNOCKBACK_SPEED: f32 = 480.0;

/// Per-tick damping applied to knockback velocity while staggered.
pub const KNOCKBACK_DAMPING: f32 = 0.92;

/// Duration of the staggered state after a hit.
pub const STAGGER_MS: u64 = 220;

/// Projectile lifespan when nothing is hit.
pub const PROJECTILE_TTL_MS: u64 = 3000;

/// Downward acceleration on heavy thrown projectiles, units per second^2.
pub const PROJECTILE_GRAVITY: f32 = 28.8;

/// Projectile bounding radius (render hint only; hit tests are point-in-box).
pub const PROJECTILE_RADIUS: f32 = 6.0;

/// Velocity of an improvised throw of a held melee weapon.
pub const IMPROVISED_THROW_SPEED: f32 = 260.0;
pub const IMPROVISED_THROW_LIFT: f32 = -120.0;

/// How long the gun powerup lasts after pickup.
pub const GUN_DURATION_MS: u64 = 15_000;

/// How long a consumed explosion lingers for render fade-out.
pub const EXPLOSION_LINGER_MS: u64 = 350;

/// Pickup bounding radius used by the collection intersection test.
pub const PICKUP_RADIUS: f32 = 14.0;

/// Respawn delay window for collected pickups.
pub const RESPAWN_MIN_MS: u64 = 15_000;
pub const RESPAWN_MAX_MS: u64 = 45_000;
