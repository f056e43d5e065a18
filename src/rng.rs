//! Random-integer sources for the capture routine.
//!
//! Every random decision goes through [`RandomSource`] so that tests can
//! script the exact draws with [`ScriptedRng`] instead of relying on global
//! random state.

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// A source of uniformly distributed integers.
pub trait RandomSource {
    /// Draws an integer in `low..=high`. `reason` labels the draw in logs.
    fn uniform(&mut self, low: i32, high: i32, reason: &str) -> i32;
}

/// Production source backed by a `rand` generator.
#[derive(Debug, Clone)]
pub struct GameRng<R> {
    inner: R,
}

impl GameRng<ThreadRng> {
    pub fn from_entropy() -> Self {
        Self { inner: rand::rng() }
    }
}

impl GameRng<StdRng> {
    /// Reproducible source; the same seed yields the same encounter.
    pub fn seeded(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> RandomSource for GameRng<R> {
    fn uniform(&mut self, low: i32, high: i32, reason: &str) -> i32 {
        let outcome = self.inner.random_range(low..=high);
        tracing::trace!(outcome, low, high, reason, "rng draw");
        outcome
    }
}

/// Returns a fixed sequence of outcomes, in order, ignoring the bounds.
#[derive(Debug, Clone)]
pub struct ScriptedRng {
    outcomes: Vec<i32>,
    index: usize,
}

impl ScriptedRng {
    pub fn new(outcomes: Vec<i32>) -> Self {
        Self { outcomes, index: 0 }
    }

    /// Outcomes not yet consumed.
    pub fn remaining(&self) -> usize {
        self.outcomes.len() - self.index
    }
}

impl RandomSource for ScriptedRng {
    fn uniform(&mut self, low: i32, high: i32, reason: &str) -> i32 {
        if self.index >= self.outcomes.len() {
            panic!(
                "ScriptedRng exhausted! Tried to get a value for: '{}'. Need more scripted values.",
                reason
            );
        }
        let outcome = self.outcomes[self.index];

        tracing::trace!(outcome, low, high, reason, "scripted draw");

        self.index += 1;
        outcome
    }
}
