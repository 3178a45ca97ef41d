//! Small deterministic RNG for shape and color selection.
//!
//! A simple LCG (Numerical Recipes constants) is all the engine needs:
//! piece variety is cosmetic-adjacent, and a seedable generator keeps
//! whole games reproducible for tests.

use vote_tetris_types::{ColorTag, ShapeKind};

/// Simple LCG (Linear Congruential Generator) RNG.
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed.
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros.
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32.
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod 2^32, a=1664525, c=1013904223.
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max).
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Pick a shape variant uniformly.
    pub fn pick_shape(&mut self) -> ShapeKind {
        ShapeKind::ALL[self.next_range(ShapeKind::ALL.len() as u32) as usize]
    }

    /// Pick a color tag uniformly.
    pub fn pick_color(&mut self) -> ColorTag {
        ColorTag::ALL[self.next_range(ColorTag::ALL.len() as u32) as usize]
    }
}
