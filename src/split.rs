//! Splitting a sample between the high and low sub-ranges.
//!
//! Position `i` of the first `n` slots is reclassified from high to low with
//! probability
//!
//! \[
//! p_i = 1 - \frac{N - n}{N - i}
//! \]
//!
//! independently of the others, so the low count is Poisson-binomial. Instead of
//! flipping `n` coins we jump geometrically over runs of positions that keep
//! their high label (using the current \(q = p_i\) as an upper bound), then thin
//! the landing position by \(p_i / q\). The number of draws is therefore
//! data-dependent and usually far below `n` when `N >> n`.

use log::trace;

use crate::uniform::UniformSource;

/// How many of the `n` sampled positions go to each drawer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitCounts {
    /// Drawn by the shrinking-interval (high-range) drawer.
    pub high: u64,
    /// Drawn by sequential acceptance over the top `n` slots.
    pub low: u64,
}

/// Split `sample_size` between the high and low drawers.
///
/// With `population <= sample_size` there is nothing to split: everything is low,
/// and the low drawer enumerates the whole range. Callers are expected to have
/// validated `sample_size <= population`.
pub fn split_counts<U: UniformSource + ?Sized>(
    population: u64,
    sample_size: u64,
    rng: &mut U,
) -> SplitCounts {
    let high = high_count(population, sample_size, rng);
    SplitCounts {
        high,
        low: sample_size - high,
    }
}

fn high_count<U: UniformSource + ?Sized>(population: u64, sample_size: u64, rng: &mut U) -> u64 {
    if population <= sample_size {
        return 0;
    }

    let outside = (population - sample_size) as f64;
    let mut high = sample_size;
    let mut i = 0u64;

    while i < sample_size {
        // i < n < N here, so N - i >= 2 and keep lies in (0, 1).
        let keep = outside / (population - i) as f64;
        let q = 1.0 - keep;

        // Geometric(q) skip. Float -> int casts saturate, and so does the add.
        let jump = (rng.next_open01().ln() / keep.ln()).floor();
        i = i.saturating_add(jump as u64);

        // After the jump i may pass N; the denominator is floored at 1.
        let p_i = 1.0 - outside / population.saturating_sub(i).max(1) as f64;

        if i < sample_size && rng.next_open01() < p_i / q {
            trace!("split: position {i} moves to the low range");
            high -= 1;
        }
        i = i.saturating_add(1);
    }

    high
}
