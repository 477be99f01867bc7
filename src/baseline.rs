//! Reference samplers for comparison.
//!
//! These materialize the whole sample (O(n) memory, hashing) and are here only
//! as baselines for benchmarks and as cross-checks in tests. The `sorted_*`
//! variants sort afterwards, which is what a caller has to do to get the same
//! sequential output the hidden shuffle produces directly.
//!
//! ## References
//!
//! - Bentley & Floyd (1987): *Programming pearls: a sample of brilliance*.

use std::collections::HashSet;

use rand::prelude::*;

use crate::hidden_shuffle::{SampleError, SampleRequest};

/// Draw uniform indices until `sample_size` distinct ones have been seen.
///
/// Expected cost grows without bound as `sample_size` approaches `population`.
pub fn rejection_sample_with_rng<R: Rng + ?Sized>(
    population: u64,
    sample_size: u64,
    rng: &mut R,
) -> Result<Vec<u64>, SampleError> {
    let request = SampleRequest::new(population, sample_size)?;
    let mut seen = HashSet::with_capacity(capacity(request));
    while (seen.len() as u64) < sample_size {
        seen.insert(rng.random_range(0..population));
    }
    Ok(seen.into_iter().collect())
}

/// [`rejection_sample_with_rng`], sorted ascending.
pub fn sorted_rejection_sample_with_rng<R: Rng + ?Sized>(
    population: u64,
    sample_size: u64,
    rng: &mut R,
) -> Result<Vec<u64>, SampleError> {
    let mut out = rejection_sample_with_rng(population, sample_size, rng)?;
    out.sort_unstable();
    Ok(out)
}

/// Floyd's algorithm: exactly `sample_size` random draws, no rejection loop.
pub fn floyd_sample_with_rng<R: Rng + ?Sized>(
    population: u64,
    sample_size: u64,
    rng: &mut R,
) -> Result<Vec<u64>, SampleError> {
    let request = SampleRequest::new(population, sample_size)?;
    let mut chosen = HashSet::with_capacity(capacity(request));
    for j in (population - sample_size)..population {
        let t = rng.random_range(0..=j);
        if !chosen.insert(t) {
            chosen.insert(j);
        }
    }
    Ok(chosen.into_iter().collect())
}

/// [`floyd_sample_with_rng`], sorted ascending.
pub fn sorted_floyd_sample_with_rng<R: Rng + ?Sized>(
    population: u64,
    sample_size: u64,
    rng: &mut R,
) -> Result<Vec<u64>, SampleError> {
    let mut out = floyd_sample_with_rng(population, sample_size, rng)?;
    out.sort_unstable();
    Ok(out)
}

/// `rand::seq::index::sample`, sorted ascending.
///
/// Both sizes must fit in `usize`; otherwise the request is rejected.
pub fn index_sample_with_rng<R: Rng + ?Sized>(
    population: u64,
    sample_size: u64,
    rng: &mut R,
) -> Result<Vec<u64>, SampleError> {
    SampleRequest::new(population, sample_size)?;
    let invalid = || SampleError::InvalidRequest {
        population,
        sample_size,
    };
    let length = usize::try_from(population).map_err(|_| invalid())?;
    let amount = usize::try_from(sample_size).map_err(|_| invalid())?;

    let mut out: Vec<u64> = rand::seq::index::sample(rng, length, amount)
        .into_iter()
        .map(|i| i as u64)
        .collect();
    out.sort_unstable();
    Ok(out)
}

fn capacity(request: SampleRequest) -> usize {
    usize::try_from(request.sample_size()).unwrap_or(usize::MAX)
}
