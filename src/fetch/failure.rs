//! Decides whether a normal fetch fails.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::FetchConfig;

/// Source of simulated connection failures.
///
/// Consulted once per normal fetch, after the simulated delay.
pub trait FailureSource: Send {
    fn should_fail(&mut self) -> bool;
}

/// Fails with a fixed probability drawn from a seedable generator.
#[derive(Debug, Clone)]
pub struct RandomFailure {
    rng: ChaCha8Rng,
    probability: f64,
}

impl RandomFailure {
    /// Deterministic source: the same seed yields the same failure sequence.
    pub fn seeded(seed: u64, probability: f64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            probability: clamp_probability(probability),
        }
    }

    /// Source seeded from the thread-local generator.
    pub fn from_entropy(probability: f64) -> Self {
        Self::seeded(rand::rng().random(), probability)
    }

    pub fn from_config(config: &FetchConfig) -> Self {
        match config.seed {
            Some(seed) => Self::seeded(seed, config.failure_probability),
            None => Self::from_entropy(config.failure_probability),
        }
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }
}

impl FailureSource for RandomFailure {
    fn should_fail(&mut self) -> bool {
        self.rng.random_bool(self.probability)
    }
}

/// Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverFail;

impl FailureSource for NeverFail {
    fn should_fail(&mut self) -> bool {
        false
    }
}

/// Always fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysFail;

impl FailureSource for AlwaysFail {
    fn should_fail(&mut self) -> bool {
        true
    }
}

fn clamp_probability(probability: f64) -> f64 {
    if probability.is_nan() {
        0.0
    } else {
        probability.clamp(0.0, 1.0)
    }
}
