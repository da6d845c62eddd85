//! Deterministic uniform random numbers.
//!
//! The widgets regenerate the same demo data on every "generate" click, so the
//! generator is a plain 32-bit linear congruential generator whose whole state
//! is the seed. It is **not** cryptographically secure and is not meant to be.
//!
//! Callers sharing one [`SeededRandom`] must serialize their draws; the type is
//! `Send` but holds no interior synchronization.

pub mod distributions;

/// Seed used by the bundled two-group comparison exercise.
pub const DEFAULT_SEED: u32 = 24;

const MULTIPLIER: u32 = 1_664_525;
const INCREMENT: u32 = 1_013_904_223;
const MODULUS: f64 = 4_294_967_296.0; // 2^32

/// A source of uniform deviates in `[0, 1)`.
///
/// The samplers in [`distributions`] take any implementor, so the LCG can be
/// swapped out. A replacement must keep the draw order stable and must never
/// return exactly `0.0` except with negligible probability; Box-Muller takes
/// the logarithm of its first draw.
pub trait UniformSource {
    /// Next deviate in `[0, 1)`.
    fn next_f64(&mut self) -> f64;
}

/// 32-bit LCG: `state = state * 1664525 + 1013904223 (mod 2^32)`, output `state / 2^32`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeededRandom {
    state: u32,
}

impl SeededRandom {
    pub fn new(seed: u32) -> Self {
        SeededRandom { state: seed }
    }

    /// Reinitialize the state to `seed`. Draws after a reset repeat the stream
    /// produced after any earlier reset to the same seed.
    pub fn reset(&mut self, seed: u32) {
        tracing::trace!(seed, "prng reset");
        self.state = seed;
    }

    /// Current internal state, i.e. the last value produced before scaling.
    pub fn state(&self) -> u32 {
        self.state
    }

    /// Advance the generator and return the next deviate in `[0, 1)`.
    pub fn next(&mut self) -> f64 {
        self.state = self.state.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT);
        f64::from(self.state) / MODULUS
    }
}

impl Default for SeededRandom {
    fn default() -> Self {
        SeededRandom::new(DEFAULT_SEED)
    }
}

impl UniformSource for SeededRandom {
    fn next_f64(&mut self) -> f64 {
        self.next()
    }
}
