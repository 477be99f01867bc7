//! Sequential sampling: hidden shuffle vs hash-set baselines.
//!
//! Draws `10^sample_exp` indices out of `10^population_exp` with each selected
//! algorithm and reports `min avg max` of the sample plus wall time. The hidden
//! shuffle yields a sorted sample with O(1) extra memory; the baselines need a
//! hash set (and a sort, for the sorted variants).
//!
//! ```text
//! cargo run --release --example sequential_sample -- --population-exp 9 --sample-exp 6
//! RUST_LOG=debug cargo run --example sequential_sample -- --algorithm hidden-shuffle
//! ```

use std::time::{Duration, Instant};

use clap::{Parser, ValueEnum};
use hidden_shuffle::baseline::{
    floyd_sample_with_rng, index_sample_with_rng, rejection_sample_with_rng,
    sorted_floyd_sample_with_rng, sorted_rejection_sample_with_rng,
};
use hidden_shuffle::{sample_with_rng, SampleError};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Algorithm {
    HiddenShuffle,
    Rejection,
    SortedRejection,
    Floyd,
    SortedFloyd,
    IndexSample,
    All,
}

const RUNNABLE: [Algorithm; 6] = [
    Algorithm::HiddenShuffle,
    Algorithm::Rejection,
    Algorithm::SortedRejection,
    Algorithm::Floyd,
    Algorithm::SortedFloyd,
    Algorithm::IndexSample,
];

#[derive(Debug, Parser)]
#[command(about = "Compare sequential sampling without replacement against baselines")]
struct Args {
    /// Population size is 10^population_exp.
    #[arg(long, default_value_t = 9)]
    population_exp: u32,

    /// Sample size is 10^sample_exp.
    #[arg(long, default_value_t = 6)]
    sample_exp: u32,

    /// Which sampler to run.
    #[arg(long, value_enum, default_value_t = Algorithm::All)]
    algorithm: Algorithm,

    /// Seed for the ChaCha8 generator.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Repetitions, each with seed + rep.
    #[arg(long, default_value_t = 1)]
    reps: u64,
}

/// Running `min avg max` over a stream of sampled indices.
#[derive(Debug, Default)]
struct Measurement {
    min: Option<u64>,
    max: Option<u64>,
    sum: u128,
    count: u64,
}

impl Measurement {
    fn digest(&mut self, value: u64) {
        self.min = Some(self.min.map_or(value, |m| m.min(value)));
        self.max = Some(self.max.map_or(value, |m| m.max(value)));
        self.sum += u128::from(value);
        self.count += 1;
    }

    fn report(&self, name: &str, elapsed: Duration) {
        let avg = if self.count == 0 {
            0.0
        } else {
            self.sum as f64 / self.count as f64
        };
        println!(
            "{name:<18} min {:>12} avg {:>16.1} max {:>12} duration {:>8}[ms]",
            self.min.map_or_else(|| "-".to_string(), |v| v.to_string()),
            avg,
            self.max.map_or_else(|| "-".to_string(), |v| v.to_string()),
            elapsed.as_millis()
        );
    }
}

fn run(
    algorithm: Algorithm,
    population: u64,
    sample_size: u64,
    rng: &mut ChaCha8Rng,
    m: &mut Measurement,
) -> Result<(), SampleError> {
    let materialized = match algorithm {
        Algorithm::HiddenShuffle => {
            for i in sample_with_rng(population, sample_size, rng)? {
                m.digest(i);
            }
            return Ok(());
        }
        Algorithm::Rejection => rejection_sample_with_rng(population, sample_size, rng)?,
        Algorithm::SortedRejection => {
            sorted_rejection_sample_with_rng(population, sample_size, rng)?
        }
        Algorithm::Floyd => floyd_sample_with_rng(population, sample_size, rng)?,
        Algorithm::SortedFloyd => sorted_floyd_sample_with_rng(population, sample_size, rng)?,
        Algorithm::IndexSample => index_sample_with_rng(population, sample_size, rng)?,
        Algorithm::All => unreachable!("expanded by the caller"),
    };
    for i in materialized {
        m.digest(i);
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let population = 10u64
        .checked_pow(args.population_exp)
        .ok_or("population exponent too large")?;
    let sample_size = 10u64
        .checked_pow(args.sample_exp)
        .ok_or("sample exponent too large")?;

    let selected: Vec<Algorithm> = match args.algorithm {
        Algorithm::All => RUNNABLE.to_vec(),
        one => vec![one],
    };

    println!("==============================");
    println!("N {population} n {sample_size}");
    println!("------------------------------");

    for algorithm in selected {
        let name = algorithm
            .to_possible_value()
            .map(|v| v.get_name().to_string())
            .unwrap_or_default();
        let mut m = Measurement::default();
        let start = Instant::now();
        for rep in 0..args.reps {
            let mut rng = ChaCha8Rng::seed_from_u64(args.seed.wrapping_add(rep));
            run(algorithm, population, sample_size, &mut rng, &mut m)?;
        }
        m.report(&name, start.elapsed());
    }

    println!("------------------------------");
    Ok(())
}
