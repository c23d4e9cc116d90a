use crate::actor::{Hostile, HostileState, Player};
use crate::combat::CombatResolver;
use crate::input::FrameInput;
use cucina_catalog::weapon::WeaponTable;
use cucina_catalog::{Catalog, CatalogError};
use cucina_core::constants::{
    CHUNK_SIZE_PX, HOSTILE_MAX_SPEED, HOSTILE_MIN_SPEED, HOSTILE_SPAWN_INTERVAL_MS,
    PROJECTILE_RADIUS, VIEW_DISTANCE_CHUNKS,
};
use cucina_core::rng::Lcg64;
use cucina_core::types::{Facing, WeaponKind};
use cucina_world::chunk::Chunk;
use cucina_world::World;
use glam::Vec2;
use std::f32::consts::TAU;

/// Distance from the player at which new hostiles appear: half a chunk past
/// the streamed ring, so they walk in from offscreen.
const SPAWN_RING_DISTANCE: f32 = CHUNK_SIZE_PX * (VIEW_DISTANCE_CHUNKS as f32 + 0.5);

/// Coarse actor state for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateTag {
    Player,
    Seeking,
    Staggered,
}

/// Render-facing actor snapshot. Plain data, no simulation references.
#[derive(Debug, Clone, Copy)]
pub struct ActorView {
    pub pos: Vec2,
    pub radius: f32,
    pub facing: Facing,
    pub state: StateTag,
    pub weapon: Option<WeaponKind>,
}

/// Render-facing snapshot of a projectile or explosion.
#[derive(Debug, Clone, Copy)]
pub struct EffectView {
    pub pos: Vec2,
    pub radius: f32,
    /// Remaining-life fraction in [0, 1], for fade-out. For grenades in
    /// flight this is the remaining fuse.
    pub life_fraction: f32,
}

/// The full session: streamed world, the player, hostiles, and everything in
/// flight. `step` is the only mutator and runs the frame phases in a fixed
/// order, so identical seed and input sequences replay identically.
pub struct Game {
    weapons: WeaponTable,
    world: World,
    pub player: Player,
    pub hostiles: Vec<Hostile>,
    combat: CombatResolver,
    score: u32,
    last_spawn_ms: u64,
    spawn_rng: Lcg64,
    game_over: bool,
}

impl Game {
    /// Start a session with the embedded catalog. The player spawns at the
    /// center of the home chunk.
    pub fn new(seed: u64) -> Result<Self, CatalogError> {
        let Catalog { weapons, biomes } = Catalog::load_default()?;
        let mut game = Self {
            weapons,
            world: World::new(biomes, seed),
            player: Player::new(Vec2::splat(CHUNK_SIZE_PX / 2.0)),
            hostiles: Vec::new(),
            combat: CombatResolver::new(),
            score: 0,
            last_spawn_ms: 0,
            spawn_rng: Lcg64::new(seed ^ 0x9e37_79b9_7f4a_7c15),
            game_over: false,
        };
        game.world
            .stream_around(game.player.pos, VIEW_DISTANCE_CHUNKS);
        Ok(game)
    }

    /// Advance one frame. Three phases, always in this order:
    ///   1. movement: player intent, world streaming, hostile seek/slide
    ///   2. combat: attacks and flight resolved on post-movement positions,
    ///      pickup collection
    ///   3. scheduled: respawn tickets, stagger expiry, gun expiry, TTL
    ///      expiry, contact damage, removal of dead hostiles, ring spawning
    pub fn step(&mut self, now_ms: u64, dt_ms: u64, input: &FrameInput) {
        if self.game_over {
            return;
        }
        let dt_s = dt_ms as f32 / 1000.0;

        // 1. movement
        self.player.advance(dt_s, input.move_dir);
        self.world
            .stream_around(self.player.pos, VIEW_DISTANCE_CHUNKS);
        let target = self.player.pos;
        for h in &mut self.hostiles {
            h.update(dt_s, now_ms, target);
        }

        // 2. combat
        if input.attack {
            self.score +=
                self.combat
                    .attack(&mut self.player, &self.weapons, &mut self.hostiles, now_ms);
        }
        if input.throw {
            self.combat.throw_held(&mut self.player, &self.weapons, now_ms);
        }
        self.score += self.combat.update(dt_s, now_ms, &mut self.hostiles);

        if input.pickup {
            if let Some(kind) = self.world.collect_pickup_in(&self.player.bounds(), now_ms) {
                log::debug!("picked up {kind:?}");
                self.player.acquire(kind, now_ms);
            }
        }

        // 3. scheduled
        self.world.process_respawns(now_ms);
        for h in &mut self.hostiles {
            h.expire_stagger(now_ms);
        }
        if self.player.expire_gun(now_ms) {
            log::debug!("gun expired, back to {:?}", self.player.weapon);
        }
        self.combat.expire(now_ms);
        self.resolve_contact();
        self.hostiles.retain(|h| !h.is_dead());
        if now_ms >= self.last_spawn_ms + HOSTILE_SPAWN_INTERVAL_MS {
            self.spawn_hostile();
            self.last_spawn_ms = now_ms;
        }
    }

    /// Contact damage: each seeking hostile touching the player is consumed
    /// along with one life. Staggered and already-dead hostiles never bite.
    fn resolve_contact(&mut self) {
        let player_bounds = self.player.bounds();
        let before = self.hostiles.len();
        self.hostiles.retain(|h| {
            h.state != HostileState::Seeking
                || h.is_dead()
                || !h.bounds().overlaps(&player_bounds)
        });
        self.player.lives -= (before - self.hostiles.len()) as i32;
        if self.player.lives <= 0 {
            log::info!("out of lives at score {}", self.score);
            self.game_over = true;
        }
    }

    /// Spawn a hostile on the ring just outside the streamed view, at a
    /// random angle, speed, and wobble phase.
    fn spawn_hostile(&mut self) {
        let angle = self.spawn_rng.next_f32() * TAU;
        let pos = self.player.pos + Vec2::new(angle.cos(), angle.sin()) * SPAWN_RING_DISTANCE;
        let speed = self
            .spawn_rng
            .next_f32_range(HOSTILE_MIN_SPEED, HOSTILE_MAX_SPEED);
        let phase = self.spawn_rng.next_f32() * TAU;
        self.hostiles.push(Hostile::new(pos, speed, phase));
    }

    pub fn visible_chunks(&self) -> Vec<&Chunk> {
        self.world
            .visible_chunks(self.player.pos, VIEW_DISTANCE_CHUNKS)
    }

    /// Player first, then hostiles in storage order.
    pub fn actor_views(&self) -> Vec<ActorView> {
        let mut views = Vec::with_capacity(1 + self.hostiles.len());
        views.push(ActorView {
            pos: self.player.pos,
            radius: self.player.radius,
            facing: self.player.facing,
            state: StateTag::Player,
            weapon: Some(self.player.weapon),
        });
        for h in &self.hostiles {
            views.push(ActorView {
                pos: h.pos,
                radius: h.radius,
                facing: if self.player.pos.x < h.pos.x {
                    Facing::Left
                } else {
                    Facing::Right
                },
                state: match h.state {
                    HostileState::Seeking => StateTag::Seeking,
                    HostileState::Staggered { .. } => StateTag::Staggered,
                },
                weapon: None,
            });
        }
        views
    }

    /// Everything in ballistic flight: projectiles plus unexploded grenades,
    /// so a fused throw never vanishes between launch and detonation.
    pub fn projectile_views(&self, now_ms: u64) -> Vec<EffectView> {
        let mut views: Vec<EffectView> = self
            .combat
            .projectiles()
            .iter()
            .map(|p| EffectView {
                pos: p.pos,
                radius: p.radius,
                life_fraction: p.life_fraction(now_ms),
            })
            .collect();
        views.extend(self.combat.grenades().iter().map(|g| EffectView {
            pos: g.pos,
            radius: PROJECTILE_RADIUS,
            life_fraction: g.fuse_fraction(now_ms),
        }));
        views
    }

    pub fn explosion_views(&self, now_ms: u64) -> Vec<EffectView> {
        self.combat
            .explosions()
            .iter()
            .map(|e| EffectView {
                pos: e.pos,
                radius: e.radius,
                life_fraction: e.life_fraction(now_ms),
            })
            .collect()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lives(&self) -> i32 {
        self.player.lives
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn weapons(&self) -> &WeaponTable {
        &self.weapons
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cucina_core::constants::{GUN_DURATION_MS, STAGGER_MS, STARTING_LIVES};
    use cucina_core::types::PickupKind;

    const DT_MS: u64 = 16;

    fn stepped(game: &mut Game, frames: u64, input: &FrameInput) {
        for i in 1..=frames {
            game.step(i * DT_MS, DT_MS, input);
        }
    }

    #[test]
    fn test_new_game_streams_home_neighborhood() {
        let game = Game::new(1).expect("catalog");
        assert_eq!(game.visible_chunks().len(), 25);
        assert_eq!(game.lives(), STARTING_LIVES);
        assert_eq!(game.player.weapon, WeaponKind::Fist);
    }

    #[test]
    fn test_movement_streams_new_chunks() {
        let mut game = Game::new(1).expect("catalog");
        let input = FrameInput {
            move_dir: Vec2::new(1.0, 0.0),
            ..Default::default()
        };
        // 160 units/s * 16ms * 80 frames = 204 units east, into chunk (1, 0).
        stepped(&mut game, 80, &input);
        assert!(game.player.pos.x > CHUNK_SIZE_PX);
        assert!(game.world().map().loaded_count() > 25);
        assert_eq!(game.visible_chunks().len(), 25);
    }

    #[test]
    fn test_pickup_intent_collects_and_equips() {
        let mut game = Game::new(1).expect("catalog");
        // Stand on the home frying pan.
        game.player.pos = Vec2::new(96.0, 96.0);
        let input = FrameInput {
            pickup: true,
            ..Default::default()
        };
        game.step(16, DT_MS, &input);
        assert_eq!(game.player.weapon, WeaponKind::FryingPan);
        assert_eq!(game.player.inventory, vec![PickupKind::FryingPan]);
        assert_eq!(game.world().pending_respawns(), 1);
    }

    #[test]
    fn test_contact_consumes_hostile_and_one_life() {
        let mut game = Game::new(1).expect("catalog");
        game.hostiles
            .push(Hostile::new(game.player.pos + Vec2::new(10.0, 0.0), 50.0, 0.0));
        game.step(16, DT_MS, &FrameInput::default());
        assert_eq!(game.lives(), STARTING_LIVES - 1);
        assert!(game.hostiles.is_empty(), "contact must consume the hostile");
        // Nothing left to bite: no second life lost.
        game.step(32, DT_MS, &FrameInput::default());
        assert_eq!(game.lives(), STARTING_LIVES - 1);
    }

    #[test]
    fn test_staggered_hostile_does_not_bite() {
        let mut game = Game::new(1).expect("catalog");
        let mut h = Hostile::new(game.player.pos + Vec2::new(10.0, 0.0), 50.0, 0.0);
        h.apply_hit(1, Vec2::X, 16);
        game.hostiles.push(h);
        game.step(16, DT_MS, &FrameInput::default());
        assert_eq!(game.lives(), STARTING_LIVES);
        assert_eq!(game.hostiles.len(), 1);
    }

    #[test]
    fn test_out_of_lives_freezes_the_session() {
        let mut game = Game::new(1).expect("catalog");
        game.player.lives = 1;
        game.hostiles
            .push(Hostile::new(game.player.pos, 50.0, 0.0));
        game.step(16, DT_MS, &FrameInput::default());
        assert!(game.is_game_over());

        let pos = game.player.pos;
        let input = FrameInput {
            move_dir: Vec2::new(1.0, 0.0),
            ..Default::default()
        };
        game.step(32, DT_MS, &input);
        assert_eq!(game.player.pos, pos, "frozen session must not advance");
    }

    #[test]
    fn test_hostiles_spawn_on_the_ring() {
        let mut game = Game::new(1).expect("catalog");
        stepped(&mut game, 100, &FrameInput::default());
        assert!(!game.hostiles.is_empty(), "no spawn after 1.6s");
        // Spawn distance from the player at spawn time was SPAWN_RING_DISTANCE;
        // the player has not moved, so the first hostile is near the ring
        // minus whatever it walked inward.
        let d = game.hostiles[0].pos.distance(game.player.pos);
        assert!(d > SPAWN_RING_DISTANCE - 200.0 && d <= SPAWN_RING_DISTANCE + 1.0);
    }

    #[test]
    fn test_dead_hostiles_removed_and_scored() {
        let mut game = Game::new(1).expect("catalog");
        let mut h = Hostile::new(game.player.pos + Vec2::new(50.0, 0.0), 50.0, 0.0);
        h.health = 1;
        game.hostiles.push(h);
        let input = FrameInput {
            attack: true,
            ..Default::default()
        };
        game.step(16, DT_MS, &input);
        assert!(game.hostiles.is_empty(), "dead hostile must not linger");
        assert_eq!(game.score(), 1);
        assert_eq!(game.lives(), STARTING_LIVES, "a dead hostile deals no contact damage");
    }

    #[test]
    fn test_stagger_expires_exactly_on_schedule() {
        let mut game = Game::new(1).expect("catalog");
        let mut h = Hostile::new(game.player.pos + Vec2::new(50.0, 0.0), 50.0, 0.0);
        h.apply_hit(1, Vec2::X, 1000);
        game.hostiles.push(h);

        game.step(1000 + STAGGER_MS - DT_MS, DT_MS, &FrameInput::default());
        assert!(matches!(
            game.hostiles[0].state,
            HostileState::Staggered { .. }
        ));
        game.step(1000 + STAGGER_MS, DT_MS, &FrameInput::default());
        assert_eq!(game.hostiles[0].state, HostileState::Seeking);
    }

    #[test]
    fn test_grenade_stays_visible_until_detonation() {
        let mut game = Game::new(1).expect("catalog");
        game.player.acquire(PickupKind::Grenade, 0);
        let throw = FrameInput {
            attack: true,
            ..Default::default()
        };
        // Thrown at 16ms; the 1100ms fuse runs out at 1116ms.
        game.step(16, DT_MS, &throw);
        let views = game.projectile_views(16);
        assert_eq!(views.len(), 1, "grenade must render while fused");
        assert_eq!(views[0].life_fraction, 1.0);

        let mut frame = 1;
        while (frame + 1) * DT_MS < 16 + 1100 {
            frame += 1;
            game.step(frame * DT_MS, DT_MS, &FrameInput::default());
            let now = frame * DT_MS;
            let views = game.projectile_views(now);
            assert_eq!(views.len(), 1, "grenade vanished mid-fuse at {now}ms");
            assert!(views[0].life_fraction > 0.0 && views[0].life_fraction <= 1.0);
        }

        frame += 1;
        game.step(frame * DT_MS, DT_MS, &FrameInput::default());
        assert!(game.projectile_views(frame * DT_MS).is_empty());
        assert_eq!(game.explosion_views(frame * DT_MS).len(), 1);
    }

    #[test]
    fn test_gun_powerup_runs_out_mid_session() {
        let mut game = Game::new(1).expect("catalog");
        game.player.acquire(PickupKind::Gun, 0);
        assert_eq!(game.player.weapon, WeaponKind::Gun);

        let fire = FrameInput {
            attack: true,
            ..Default::default()
        };
        game.step(16, DT_MS, &fire);
        assert_eq!(game.projectile_views(16).len(), 1);
        // Firing does not spend the powerup.
        assert_eq!(game.player.weapon, WeaponKind::Gun);

        game.step(GUN_DURATION_MS, DT_MS, &FrameInput::default());
        assert_eq!(game.player.weapon, WeaponKind::Fist);
        assert_eq!(game.player.gun_until_ms, None);
    }

    #[test]
    fn test_actor_views_tag_states() {
        let mut game = Game::new(1).expect("catalog");
        game.hostiles
            .push(Hostile::new(Vec2::new(500.0, 500.0), 50.0, 0.0));
        let views = game.actor_views();
        assert_eq!(views.len(), 2);
        assert_eq!(views[0].state, StateTag::Player);
        assert_eq!(views[0].weapon, Some(WeaponKind::Fist));
        assert_eq!(views[1].state, StateTag::Seeking);
        assert_eq!(views[1].weapon, None);
    }
}
