//! RNG module - random sources for shape generation
//!
//! [`SimpleRng`] is a seeded LCG: the same seed always produces the same
//! sequence of shapes, which is what tests and replays need.
//! [`SystemRng`] draws from the thread-local generator of the `rand` crate
//! and is the process-wide source for regular play.

use rand::Rng;

use crate::types::RandomSource;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Current state; `SimpleRng::new(rng.state())` continues the same sequence
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl RandomSource for SimpleRng {
    /// Uses the high bits; the low bits of an LCG cycle with short periods.
    fn next_range(&mut self, max: u32) -> u32 {
        ((u64::from(self.next_u32()) * u64::from(max)) >> 32) as u32
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Process entropy, backed by `rand::thread_rng`
#[derive(Debug, Clone)]
pub struct SystemRng {
    inner: rand::rngs::ThreadRng,
}

impl SystemRng {
    pub fn new() -> Self {
        Self {
            inner: rand::thread_rng(),
        }
    }
}

impl Default for SystemRng {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for SystemRng {
    fn next_range(&mut self, max: u32) -> u32 {
        self.inner.gen_range(0..max)
    }
}
