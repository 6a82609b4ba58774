//! Seedable random sources for ray and direction sampling.
//!
//! Every sampler in aerowave takes its randomness through the
//! [`RandomSource`] trait instead of reaching for a process-wide generator,
//! so a scene can be replayed from its seed. [`Xorshift64`] is the default
//! implementation: pure integer arithmetic, identical sequences on every
//! platform.

use log::debug;
use serde::{Deserialize, Serialize};

/// A source of uniformly distributed reals.
///
/// Object-safe so samplers can accept `&mut dyn RandomSource`.
pub trait RandomSource {
    /// Returns a uniformly distributed f64 in [0, 1).
    fn next_f64(&mut self) -> f64;

    /// Returns a uniformly distributed f64 in [min, max).
    fn next_range(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_f64() * (max - min)
    }
}

/// Xorshift64 PRNG with shifts (13, 7, 17).
///
/// A seed of 0 is the all-zeros fixed point of the algorithm and is replaced
/// with a non-zero fallback.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Xorshift64 {
    state: u64,
}

impl Xorshift64 {
    const FALLBACK_SEED: u64 = 0x5EED_DEAD_BEEF_CAFE;

    /// Creates a new PRNG with the given seed (0 maps to the fallback seed).
    pub fn new(seed: u64) -> Self {
        if seed == 0 {
            debug!("seed 0 replaced by fallback seed {:#x}", Self::FALLBACK_SEED);
        }
        Self {
            state: if seed == 0 { Self::FALLBACK_SEED } else { seed },
        }
    }

    /// Advances the state and returns the next 64-bit value.
    pub fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }
}

impl RandomSource for Xorshift64 {
    /// Upper 53 bits of `next_u64()` over 2^53, so every mantissa bit is used.
    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}
