use crate::chunk::Pickup;
use crate::chunk_map::ChunkMap;
use cucina_core::rng::Lcg64;
use cucina_core::types::{ChunkCoord, PickupKind};
use glam::Vec2;

/// A scheduled re-insertion of a collected pickup. Holds a chunk key plus
/// coordinates (a lookup-based weak reference), never a live reference: the
/// origin chunk may be gone by the time the ticket fires. Each ticket is
/// consumed exactly once, either fired or dropped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RespawnTicket {
    pub fire_at_ms: u64,
    pub chunk: ChunkCoord,
    pub pos: Vec2,
    pub kind: PickupKind,
}

/// Tracks collected pickups and re-inserts them after a randomized delay.
pub struct RespawnScheduler {
    pending: Vec<RespawnTicket>,
    delay_min_ms: u64,
    delay_max_ms: u64,
    rng: Lcg64,
}

impl RespawnScheduler {
    pub fn new(delay_min_ms: u64, delay_max_ms: u64, seed: u64) -> Self {
        debug_assert!(delay_min_ms <= delay_max_ms);
        Self {
            pending: Vec::new(),
            delay_min_ms,
            delay_max_ms,
            rng: Lcg64::new(seed),
        }
    }

    /// Remove `pickup` from its chunk and schedule its respawn at
    /// `now + uniform(delay_min, delay_max)`. Returns the collected kind, or
    /// None if the pickup was already gone (no ticket is created).
    pub fn collect(
        &mut self,
        map: &mut ChunkMap,
        chunk: ChunkCoord,
        pickup: &Pickup,
        now_ms: u64,
    ) -> Option<PickupKind> {
        if !map.remove_pickup(chunk, pickup) {
            return None;
        }
        let delay = self.rng.next_range_u64(self.delay_min_ms, self.delay_max_ms);
        self.pending.push(RespawnTicket {
            fire_at_ms: now_ms + delay,
            chunk,
            pos: pickup.pos,
            kind: pickup.kind,
        });
        Some(pickup.kind)
    }

    /// Fire every ticket due at `now`. A due ticket whose origin chunk is
    /// still loaded re-inserts a pickup of the recorded type at the recorded
    /// position; otherwise the ticket is silently dropped, never retried.
    pub fn tick(&mut self, map: &mut ChunkMap, now_ms: u64) {
        if self.pending.is_empty() {
            return;
        }
        let mut remaining = Vec::with_capacity(self.pending.len());
        for ticket in self.pending.drain(..) {
            if ticket.fire_at_ms > now_ms {
                remaining.push(ticket);
            } else if !map.insert_pickup(ticket.chunk, Pickup::new(ticket.pos, ticket.kind)) {
                log::debug!(
                    "dropping respawn ticket for {:?} at ({}, {}): chunk not loaded",
                    ticket.kind,
                    ticket.chunk.x,
                    ticket.chunk.y
                );
            }
        }
        self.pending = remaining;
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::ChunkGenerator;
    use cucina_catalog::Catalog;

    fn home_map() -> ChunkMap {
        let gen = ChunkGenerator::new(Catalog::load_default().expect("catalog").biomes);
        let mut map = ChunkMap::new();
        map.ensure_loaded(&gen, ChunkCoord::new(0, 0), 0);
        map
    }

    #[test]
    fn test_collect_then_immediate_respawn() {
        let mut map = home_map();
        // Zero delay: tickets fire on the next tick.
        let mut scheduler = RespawnScheduler::new(0, 0, 7);
        let home = ChunkCoord::new(0, 0);
        let originals = map.get(&home).expect("home").pickups.clone();
        assert_eq!(originals.len(), 4);

        // Collect three; the count must never go negative nor exceed the
        // original mid-sequence.
        for pickup in originals.iter().take(3) {
            let kind = scheduler.collect(&mut map, home, pickup, 1000);
            assert_eq!(kind, Some(pickup.kind));
            let count = map.get(&home).expect("home").pickups.len();
            assert!(count <= 4);
        }
        assert_eq!(map.get(&home).expect("home").pickups.len(), 1);
        assert_eq!(scheduler.pending_count(), 3);

        scheduler.tick(&mut map, 1000);
        assert_eq!(scheduler.pending_count(), 0);

        // Exactly the same kinds and positions are back.
        let restored = &map.get(&home).expect("home").pickups;
        assert_eq!(restored.len(), 4);
        for original in &originals {
            assert!(
                restored
                    .iter()
                    .any(|p| p.kind == original.kind && p.pos == original.pos),
                "{original:?} not restored"
            );
        }
    }

    #[test]
    fn test_ticket_not_fired_before_delay() {
        let mut map = home_map();
        let mut scheduler = RespawnScheduler::new(500, 500, 7);
        let home = ChunkCoord::new(0, 0);
        let pickup = map.get(&home).expect("home").pickups[0];

        scheduler.collect(&mut map, home, &pickup, 1000);
        scheduler.tick(&mut map, 1499);
        assert_eq!(scheduler.pending_count(), 1);
        assert_eq!(map.get(&home).expect("home").pickups.len(), 3);

        scheduler.tick(&mut map, 1500);
        assert_eq!(scheduler.pending_count(), 0);
        assert_eq!(map.get(&home).expect("home").pickups.len(), 4);
    }

    #[test]
    fn test_orphaned_ticket_dropped_silently() {
        let mut map = home_map();
        let mut scheduler = RespawnScheduler::new(0, 0, 7);
        let home = ChunkCoord::new(0, 0);
        let pickup = map.get(&home).expect("home").pickups[0];

        scheduler.collect(&mut map, home, &pickup, 0);
        map.unload_chunk(&home);

        // Runs past the fire time without error and without re-inserting.
        scheduler.tick(&mut map, 10_000);
        assert_eq!(scheduler.pending_count(), 0);
        assert!(map.get(&home).is_none());
    }

    #[test]
    fn test_collect_absent_pickup_creates_no_ticket() {
        let mut map = home_map();
        let mut scheduler = RespawnScheduler::new(0, 0, 7);
        let home = ChunkCoord::new(0, 0);
        let pickup = map.get(&home).expect("home").pickups[0];

        assert!(scheduler.collect(&mut map, home, &pickup, 0).is_some());
        // Already removed: no-op, no duplicate ticket.
        assert!(scheduler.collect(&mut map, home, &pickup, 0).is_none());
        assert_eq!(scheduler.pending_count(), 1);
    }

    #[test]
    fn test_delay_within_configured_window() {
        let mut map = home_map();
        let mut scheduler = RespawnScheduler::new(100, 200, 42);
        let home = ChunkCoord::new(0, 0);
        let originals = map.get(&home).expect("home").pickups.clone();
        for pickup in &originals {
            scheduler.collect(&mut map, home, pickup, 1000);
        }
        for ticket in &scheduler.pending {
            assert!(
                (1100..=1200).contains(&ticket.fire_at_ms),
                "fire time {} outside window",
                ticket.fire_at_ms
            );
        }
    }
}
