//! Deterministic sampler
//!
//! Hash-to-float over `(seed, index)` pairs. Not random and not
//! independent across indexes, only repeatable. Callers reserve distinct
//! index ranges so modules never share a draw.

use crate::domain::entities::Seed;

const INDEX_STRIDE: f64 = 127.1;
const SCALE: f64 = 43758.5453;

/// Returns the fractional part of `sin(seed + index * 127.1) * 43758.5453`.
///
/// Always in `[0, 1)`. `sin` comes from `libm`, not the platform math
/// library, so every target draws the same bits.
#[inline]
pub fn sample(seed: Seed, index: u32) -> f64 {
    let x = f64::from(seed.value()) + f64::from(index) * INDEX_STRIDE;
    let v = libm::sin(x) * SCALE;
    v - v.floor()
}

/// Sampler bound to a single seed
#[derive(Debug, Clone, Copy)]
pub struct DeterministicSampler {
    seed: Seed,
}

impl DeterministicSampler {
    pub fn new(seed: Seed) -> Self {
        Self { seed }
    }

    pub fn seed(&self) -> Seed {
        self.seed
    }

    /// Draws the value at `index`, in `[0, 1)`
    #[inline]
    pub fn draw(&self, index: u32) -> f64 {
        sample(self.seed, index)
    }

    /// Draws `floor(draw(index) * span)`, in `0..span`
    #[inline]
    pub fn draw_below(&self, index: u32, span: u32) -> u32 {
        (self.draw(index) * f64::from(span)).floor() as u32
    }
}
