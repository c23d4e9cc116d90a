//! Deterministic random source for generation and scheduling.
//!
//! A plain 64-bit LCG. Each consumer owns its own instance seeded explicitly,
//! so draw sequences depend only on the seed and the documented draw order,
//! never on global state or call interleaving with other consumers.

use crate::constants::{SEED_MIX_X, SEED_MIX_Y};

const LCG_MUL: u64 = 6364136223846793005;
const LCG_ADD: u64 = 1442695040888963407;

/// Seeded 64-bit linear congruential generator.
#[derive(Debug, Clone)]
pub struct Lcg64 {
    state: u64,
}

impl Lcg64 {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Next pseudo-random u32 (upper bits of the advanced state).
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(LCG_MUL).wrapping_add(LCG_ADD);
        (self.state >> 33) as u32
    }

    /// Next float in [0, 1), 24 bits of precision.
    pub fn next_f32(&mut self) -> f32 {
        (self.next_u32() >> 8) as f32 / 16_777_216.0
    }

    /// Uniform u32 in [lo, hi], inclusive on both ends.
    pub fn next_range_u32(&mut self, lo: u32, hi: u32) -> u32 {
        debug_assert!(lo <= hi);
        let span = (hi - lo) as u64 + 1;
        lo + (self.next_u32() as u64 % span) as u32
    }

    /// Uniform u64 in [lo, hi], inclusive on both ends.
    pub fn next_range_u64(&mut self, lo: u64, hi: u64) -> u64 {
        debug_assert!(lo <= hi);
        let span = hi - lo + 1;
        let wide = ((self.next_u32() as u64) << 32) | self.next_u32() as u64;
        lo + wide % span
    }

    /// Uniform f32 in [lo, hi).
    pub fn next_f32_range(&mut self, lo: f32, hi: f32) -> f32 {
        lo + self.next_f32() * (hi - lo)
    }
}

/// Seed for the generation-local random source of chunk (cx, cy).
/// Mixes the axes with two distinct odd primes so neighbors on either axis
/// land far apart in seed space.
pub fn chunk_seed(cx: i32, cy: i32) -> u64 {
    ((cx as i64).wrapping_mul(SEED_MIX_X) ^ (cy as i64).wrapping_mul(SEED_MIX_Y)) as u64
}
