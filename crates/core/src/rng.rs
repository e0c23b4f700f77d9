//! RNG module - seeded random source for board generation
//!
//! Board generation only ever needs uniform integers below a small bound, so the
//! seam is a one-method trait. The bundled LCG makes every board reproducible
//! from its seed (fixtures, benchmarks, bug reports).

use crate::types::RANDOM_RANGE;

/// A source of uniform random integers.
pub trait RandomSource {
    /// Uniform value in `[0, bound)`. `bound` must be non-zero.
    fn next_below(&mut self, bound: u32) -> u32;

    /// One draw in `[0, RANDOM_RANGE)`.
    fn percent(&mut self) -> u32 {
        self.next_below(RANDOM_RANGE)
    }
}

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

    /// Current internal state.
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl RandomSource for SimpleRng {
    fn next_below(&mut self, bound: u32) -> u32 {
        self.next_u32() % bound
    }
}
