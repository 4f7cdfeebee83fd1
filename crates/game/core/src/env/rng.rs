//! Deterministic random numbers for damage rolls and wandering.
//!
//! Every roll derives its own seed from the session seed, the frame nonce,
//! the rolling unit and a context tag, so replaying the same inputs with the
//! same seed reproduces the same session.

/// RNG oracle. Implementations must return the same value for the same seed.
pub trait RngOracle: Send + Sync {
    fn next_u32(&self, seed: u64) -> u32;

    /// Random value in `[min, max]` inclusive.
    fn range(&self, seed: u64, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        let span = u64::from(max - min) + 1;
        min + (u64::from(self.next_u32(seed)) % span) as u32
    }

    /// One of `-1.0`, `0.0` or `1.0` with equal probability.
    fn sign(&self, seed: u64) -> f64 {
        f64::from(self.range(seed, 0, 2) as i32 - 1)
    }
}

/// PCG-XSH-RR: 32-bit output from 64-bit state.
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        Self::pcg_output(Self::pcg_step(seed))
    }
}

/// Roll purposes, mixed into the seed so two rolls in one frame differ.
pub mod context {
    pub const DAMAGE: u32 = 0;
    pub const WANDER_X: u32 = 1;
    pub const WANDER_Y: u32 = 2;
}

/// Mixes the session seed, frame nonce, unit ID and roll context into one seed.
pub fn compute_seed(game_seed: u64, nonce: u64, unit_id: u32, context: u32) -> u64 {
    let mut hash = game_seed;
    hash ^= nonce.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= u64::from(unit_id).wrapping_mul(0x517cc1b727220a95);
    hash ^= u64::from(context).wrapping_mul(0x85ebca6b);

    // SplitMix64 finalizer
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;
    hash
}
