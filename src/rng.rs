//! Deterministic PRNG driving every stochastic decision in the pipeline.
//!
//! This is a Mulberry32 generator ported with exact 32-bit wrapping
//! arithmetic: a given seed yields the same stream on every run and every
//! platform, with no wall clock or external entropy anywhere.

/// Seeded generator with a single 32-bit word of state.
#[derive(Debug, Clone)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    /// Create a generator from an integer seed.
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Advance the state and return the next mixed 32-bit word.
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(0x6D2B_79F5);
        let mut x = self.state;
        x = (x ^ (x >> 15)).wrapping_mul(x | 1);
        x ^= x.wrapping_add((x ^ (x >> 7)).wrapping_mul(x | 61));
        x ^ (x >> 14)
    }

    /// Next float in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        self.next_u32() as f64 / 4_294_967_296.0
    }
}

/// Uniform choice over a non-empty slice.
pub fn pick<'a, T>(items: &'a [T], rng: &mut Mulberry32) -> &'a T {
    debug_assert!(!items.is_empty(), "pick over an empty slice");
    &items[(rng.next_f64() * items.len() as f64) as usize]
}

/// Bernoulli trial with success probability `p`.
pub fn chance(p: f64, rng: &mut Mulberry32) -> bool {
    rng.next_f64() < p
}

/// Sample a float whose logarithm is uniform in `[ln min, ln max]`.
///
/// Spreads draws across the orders of magnitude of the range instead of
/// clustering near the arithmetic mean.
pub fn log_uniform(min: f64, max: f64, rng: &mut Mulberry32) -> f64 {
    let a = min.ln();
    let b = max.ln();
    (a + rng.next_f64() * (b - a)).exp()
}
