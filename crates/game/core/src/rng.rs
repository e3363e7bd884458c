//! Deterministic random number generation.
//!
//! The simulation never touches an OS entropy source. Every random draw
//! (collision jitter, chest rewards) is derived from the match seed, a
//! monotonically increasing draw counter kept in `GameState`, the entity
//! involved and a context discriminator, so replaying the same intents from
//! the same initial state reproduces the same match.

/// Stateless generator: the same seed always yields the same value.
pub trait RngOracle: Send + Sync {
    fn next_u32(&self, seed: u64) -> u32;

    /// Uniform value in `[0, 1)`.
    fn unit(&self, seed: u64) -> f64 {
        f64::from(self.next_u32(seed)) / (f64::from(u32::MAX) + 1.0)
    }
}

/// One PCG-XSH-RR step over the mixed seed.
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        let state = seed
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT);
        let shifted = (((state >> 18) ^ state) >> 27) as u32;
        shifted.rotate_right((state >> 59) as u32)
    }
}

/// Context discriminators for independent draws made for the same entity.
pub mod context {
    pub const COLLISION_JITTER: u32 = 1;
    pub const CHEST_DRAW: u32 = 2;
}

/// Mixes the match seed, draw counter, entity and context into one seed.
pub fn compute_seed(game_seed: u64, nonce: u64, entity: u32, context: u32) -> u64 {
    let mixed = game_seed
        ^ nonce.wrapping_mul(0x9e37_79b9_7f4a_7c15)
        ^ u64::from(entity).wrapping_mul(0x517c_c1b7_2722_0a95)
        ^ u64::from(context).wrapping_mul(0x85eb_ca6b);

    // SplitMix64 finalizer
    let mixed = (mixed ^ (mixed >> 33)).wrapping_mul(0xff51_afd7_ed55_8ccd);
    mixed ^ (mixed >> 33)
}
