//! Sources of uniform variates.
//!
//! Every draw the samplers make is a real number strictly inside `(0, 1)`:
//! the split estimator takes `ln(U)` and the high-range drawer takes
//! `U^(1/H)`, so an exact `0.0` would turn a finite skip into an infinite one.
//!
//! Any `rand` generator is a source (through [`Open01`]). [`Scripted`] replays
//! a fixed list of variates, which makes it possible to pin exact traces in tests.

use rand::distr::{Distribution, Open01};
use rand::RngCore;

/// A capability that yields independent draws from `Uniform(0, 1)`, open on both ends.
pub trait UniformSource {
    /// Next variate in `(0, 1)`.
    fn next_open01(&mut self) -> f64;
}

impl<R: RngCore + ?Sized> UniformSource for R {
    #[inline]
    fn next_open01(&mut self) -> f64 {
        Distribution::<f64>::sample(&Open01, self)
    }
}

/// Replays a fixed list of variates, cycling back to the start when exhausted.
#[derive(Debug, Clone)]
pub struct Scripted {
    values: Vec<f64>,
    draws: usize,
}

impl Scripted {
    /// Create a replay source.
    ///
    /// # Panics
    ///
    /// Panics if `values` is empty or any value lies outside `(0, 1)`.
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        let values = values.into();
        assert!(!values.is_empty(), "Scripted: values must be non-empty");
        assert!(
            values.iter().all(|&v| v > 0.0 && v < 1.0),
            "Scripted: values must lie in (0, 1)"
        );
        Self { values, draws: 0 }
    }

    /// Number of variates handed out so far.
    pub fn draws(&self) -> usize {
        self.draws
    }
}

impl UniformSource for Scripted {
    fn next_open01(&mut self) -> f64 {
        let v = self.values[self.draws % self.values.len()];
        self.draws += 1;
        v
    }
}
