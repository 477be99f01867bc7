//! Sequential sampling without replacement via the hidden shuffle.
//!
//! Draws `n` distinct indices from `0..N` and yields them in increasing order,
//! in expected O(n) time and O(1) memory no matter how large `N` is.
//!
//! The sample is split (see [`crate::split`]) into
//! - **high** items: order statistics of `H` uniforms over the span `N - n`,
//!   generated by repeatedly shrinking an interval fraction `a <- a * U^(1/H)`;
//! - **low** items: a sequential acceptance pass over the top `n` slots.
//!
//! When two high draws land on the same slot the duplicate is not redrawn. Its
//! unit of quota moves to the low drawer instead, which cannot collide, so the
//! total work stays bounded by `n`.
//!
//! ## References
//!
//! - Shekelyan & Cormode (2021): *Sequential Random Sampling Revisited: Hidden Shuffle Method*.
//! - Vitter (1984): *Faster methods for random sampling* (sequential skip recurrences).
//!
//! Notes:
//! - `sample_with_rng` / `sample_seeded` exist for deterministic testing/benchmarking.
//! - The iterator never buffers its output; dropping it early needs no cleanup.

use std::iter::FusedIterator;

use log::{debug, trace};
use rand::rngs::{StdRng, ThreadRng};
use rand::SeedableRng;

use crate::split::{split_counts, SplitCounts};
use crate::uniform::UniformSource;

/// Errors for sampling requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SampleError {
    /// More samples were requested than the population holds.
    InvalidRequest {
        /// Population size `N`.
        population: u64,
        /// Requested sample size `n`.
        sample_size: u64,
    },
}

impl std::fmt::Display for SampleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRequest {
                population,
                sample_size,
            } => write!(
                f,
                "sample size must be <= population (got n={sample_size}, N={population})"
            ),
        }
    }
}

impl std::error::Error for SampleError {}

/// A validated `(N, n)` pair: draw `n` indices from `0..N`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleRequest {
    population: u64,
    sample_size: u64,
}

impl SampleRequest {
    /// Validate a request.
    pub fn new(population: u64, sample_size: u64) -> Result<Self, SampleError> {
        if sample_size > population {
            return Err(SampleError::InvalidRequest {
                population,
                sample_size,
            });
        }
        Ok(Self {
            population,
            sample_size,
        })
    }

    /// Population size `N`.
    pub fn population(&self) -> u64 {
        self.population
    }

    /// Sample size `n`.
    pub fn sample_size(&self) -> u64 {
        self.sample_size
    }

    /// Start a run driven by `rng`.
    ///
    /// The split between the two drawers is computed here, eagerly; the indices
    /// themselves are produced lazily by the returned iterator.
    pub fn sampler<U: UniformSource>(self, mut rng: U) -> HiddenShuffle<U> {
        let split = split_counts(self.population, self.sample_size, &mut rng);
        debug!(
            "hidden shuffle: N={}, n={}, high={}, low={}",
            self.population, self.sample_size, split.high, split.low
        );

        HiddenShuffle {
            population: self.population,
            sample_size: self.sample_size,
            split,
            high: split.high,
            low: split.low,
            frontier: self.sample_size,
            a: 1.0,
            collisions: 0,
            rng,
        }
    }
}

/// Draw `sample_size` sorted, distinct indices from `0..population`.
///
/// Uses the thread-local RNG; not reproducible across runs.
pub fn sample(population: u64, sample_size: u64) -> Result<HiddenShuffle<ThreadRng>, SampleError> {
    sample_with_rng(population, sample_size, rand::rng())
}

/// Like [`sample`], with a caller-supplied source of uniform variates.
///
/// Pass `&mut rng` to keep ownership of a `rand` generator. Output is fully
/// determined by the variates the source produces.
pub fn sample_with_rng<U: UniformSource>(
    population: u64,
    sample_size: u64,
    rng: U,
) -> Result<HiddenShuffle<U>, SampleError> {
    Ok(SampleRequest::new(population, sample_size)?.sampler(rng))
}

/// Like [`sample`], with an owned `StdRng` seeded from `seed`.
pub fn sample_seeded(
    population: u64,
    sample_size: u64,
    seed: u64,
) -> Result<HiddenShuffle<StdRng>, SampleError> {
    let request = SampleRequest::new(population, sample_size)?;
    Ok(request.sampler(StdRng::seed_from_u64(seed)))
}

/// Lazy, strictly increasing stream of sampled indices.
///
/// Yields the high items first (all `< N - n`), then the low items (all `>= N - n`).
#[derive(Debug, Clone)]
pub struct HiddenShuffle<U> {
    population: u64,
    sample_size: u64,
    split: SplitCounts,
    /// Remaining high-range iterations.
    high: u64,
    /// Remaining low-range quota (grows by one per collision).
    low: u64,
    /// Size of the not-yet-scanned part of the top `n` slots.
    frontier: u64,
    /// Current interval fraction, in `(0, 1]`, non-increasing.
    a: f64,
    collisions: u64,
    rng: U,
}

impl<U> HiddenShuffle<U> {
    /// Population size `N`.
    pub fn population(&self) -> u64 {
        self.population
    }

    /// Sample size `n`.
    pub fn sample_size(&self) -> u64 {
        self.sample_size
    }

    /// The high/low split computed when the run started.
    pub fn split(&self) -> SplitCounts {
        self.split
    }

    /// High-range collisions deferred to the low drawer so far.
    pub fn collisions(&self) -> u64 {
        self.collisions
    }

    /// Number of indices still to be yielded.
    ///
    /// Exact at every point: each pending high iteration yields either an index
    /// or one extra unit of low quota.
    pub fn remaining(&self) -> u64 {
        self.high + self.low
    }

    /// The random source driving this run.
    pub fn source(&self) -> &U {
        &self.rng
    }

    /// Consume the iterator, returning its random source.
    pub fn into_source(self) -> U {
        self.rng
    }

    /// Slot reached by the current interval fraction, in `n..=N`.
    #[inline]
    fn slot(&self) -> u64 {
        let span = self.population - self.sample_size;
        // Rounding of huge spans can overshoot `span`; clamp to stay in range.
        let offset = ((self.a * span as f64).floor() as u64).min(span);
        self.sample_size + offset
    }
}

impl<U: UniformSource> HiddenShuffle<U> {
    fn next_high(&mut self) -> Option<u64> {
        while self.high > 0 {
            let s_old = self.slot();
            self.a *= self.rng.next_open01().powf(1.0 / self.high as f64);
            let s = self.slot();
            self.high -= 1;

            if s < s_old {
                return Some(self.population - 1 - s);
            }

            self.low += 1;
            self.collisions += 1;
            trace!("high range: collision at slot {s}, low quota now {}", self.low);
        }
        None
    }

    fn next_low(&mut self) -> Option<u64> {
        if self.low == 0 {
            return None;
        }

        let u = self.rng.next_open01();
        let quota = self.low as f64;
        let mut skip = 0u64;
        // P(skip <= s), built up one slot at a time.
        let mut f = quota / self.frontier as f64;

        // frontier >= low holds throughout, so the divisor never drops below `low`.
        while f < u && skip < self.frontier - self.low {
            skip += 1;
            f = 1.0 - (1.0 - quota / (self.frontier - skip) as f64) * (1.0 - f);
        }

        self.low -= 1;
        self.frontier -= skip + 1;
        Some(self.population - 1 - self.frontier)
    }
}

impl<U: UniformSource> Iterator for HiddenShuffle<U> {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.high > 0 {
            if let Some(index) = self.next_high() {
                return Some(index);
            }
            trace!(
                "high range done: {} collisions, {} low items pending",
                self.collisions,
                self.low
            );
        }
        self.next_low()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining()) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl<U: UniformSource> FusedIterator for HiddenShuffle<U> {}
