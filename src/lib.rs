//! `hidden-shuffle`: sequential sampling without replacement.
//!
//! Draws `n` distinct indices from `0..N`, in increasing order, in expected
//! O(n) time and O(1) memory. `N` can be far larger than anything that fits in
//! memory; the population is never materialized and the sample is never buffered.
//!
//! ```
//! use hidden_shuffle::sample_seeded;
//!
//! let picks: Vec<u64> = sample_seeded(1_000_000_000, 5, 42)?.collect();
//! assert_eq!(picks.len(), 5);
//! assert!(picks.windows(2).all(|w| w[0] < w[1]));
//! # Ok::<(), hidden_shuffle::SampleError>(())
//! ```
//!
//! Exposed modules:
//! - `hidden_shuffle`: the sampler (split, high-range and low-range drawers).
//! - `split`: how the sample is divided between the two drawers.
//! - `uniform`: the uniform-variate capability the samplers draw from.
//! - `baseline`: hash-set based reference samplers, for benchmarks.

#![forbid(unsafe_code)]

pub mod baseline;
pub mod hidden_shuffle;
pub mod split;
pub mod uniform;

pub use hidden_shuffle::{
    sample, sample_seeded, sample_with_rng, HiddenShuffle, SampleError, SampleRequest,
};
pub use split::{split_counts, SplitCounts};
pub use uniform::{Scripted, UniformSource};
