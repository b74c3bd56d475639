//! Uniform probability sources
//!
//! The harness only needs a stream of independent draws uniform on [0, 1).
//! The random engine is seeded once when the sampler is built and then drawn
//! from repeatedly.

use rand::{Rng, SeedableRng, rngs::StdRng};

/// Source of probabilities for the sampling harness
pub trait UniformSampler {
    /// Next probability, nominally uniform on [0, 1)
    fn next_probability(&mut self) -> f64;
}

impl<S: UniformSampler + ?Sized> UniformSampler for &mut S {
    fn next_probability(&mut self) -> f64 {
        (**self).next_probability()
    }
}

/// Pseudorandom sampler seeded once at construction
#[derive(Debug, Clone)]
pub struct SeededSampler {
    rng: StdRng,
}

impl SeededSampler {
    /// Reproducible sampler: equal seeds give equal draw sequences
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Sampler seeded from operating system entropy
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Seeded from `seed` when present, otherwise from entropy
    pub fn new(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::from_seed)
    }

    /// Draw a raw 64-bit value, used to derive seeds for worker samplers
    pub fn next_seed(&mut self) -> u64 {
        self.rng.random()
    }
}

impl UniformSampler for SeededSampler {
    fn next_probability(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// Replays a fixed list of probabilities, wrapping around at the end
///
/// Values are passed through untouched, so out-of-range probabilities can be
/// fed to the harness on purpose.
#[derive(Debug, Clone)]
pub struct ReplaySampler {
    values: Vec<f64>,
    cursor: usize,
}

impl ReplaySampler {
    /// Create a replaying sampler; an empty list replays 0.5 forever
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, cursor: 0 }
    }
}

impl UniformSampler for ReplaySampler {
    fn next_probability(&mut self) -> f64 {
        let value = if self.values.is_empty() {
            0.5
        } else {
            self.values
                .get(self.cursor % self.values.len())
                .copied()
                .unwrap_or(0.5)
        };
        self.cursor += 1;
        value
    }
}
