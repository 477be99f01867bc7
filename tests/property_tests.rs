use hidden_shuffle::baseline::sorted_floyd_sample_with_rng;
use hidden_shuffle::{sample_with_rng, SampleError, SampleRequest, Scripted};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn request() -> impl Strategy<Value = (u64, u64)> {
    (0u64..2_000).prop_flat_map(|population| (Just(population), 0..=population))
}

proptest! {
    #[test]
    fn prop_output_is_sorted_sample_of_exact_size(
        (population, sample_size) in request(),
        seed in any::<u64>(),
    ) {
        let rng = ChaCha8Rng::seed_from_u64(seed);
        let out: Vec<u64> = sample_with_rng(population, sample_size, rng)
            .expect("valid request")
            .collect();

        prop_assert_eq!(out.len() as u64, sample_size);
        prop_assert!(out.iter().all(|&x| x < population));
        // Strictly increasing implies distinct.
        prop_assert!(out.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn prop_huge_populations(
        exp in 20u32..64,
        sample_size in 0u64..300,
        seed in any::<u64>(),
    ) {
        let population = 1u64 << exp;
        let rng = ChaCha8Rng::seed_from_u64(seed);
        let out: Vec<u64> = sample_with_rng(population, sample_size, rng)
            .expect("valid request")
            .collect();

        prop_assert_eq!(out.len() as u64, sample_size);
        prop_assert!(out.iter().all(|&x| x < population));
        prop_assert!(out.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn prop_size_hint_tracks_output(
        (population, sample_size) in request(),
        seed in any::<u64>(),
    ) {
        let mut it = sample_with_rng(population, sample_size, ChaCha8Rng::seed_from_u64(seed))
            .expect("valid request");
        let mut left = sample_size as usize;
        while it.next().is_some() {
            left -= 1;
            prop_assert_eq!(it.size_hint(), (left, Some(left)));
        }
        prop_assert_eq!(left, 0);
        prop_assert!(it.collisions() <= it.split().high);
    }

    #[test]
    fn prop_same_seed_same_sample(
        (population, sample_size) in request(),
        seed in any::<u64>(),
    ) {
        let a: Vec<u64> = sample_with_rng(population, sample_size, ChaCha8Rng::seed_from_u64(seed))
            .expect("valid request")
            .collect();
        let b: Vec<u64> = sample_with_rng(population, sample_size, ChaCha8Rng::seed_from_u64(seed))
            .expect("valid request")
            .collect();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn prop_scripted_sources_are_deterministic(
        values in prop::collection::vec(0.001f64..0.999, 1..16),
        (population, sample_size) in request(),
    ) {
        let a: Vec<u64> = sample_with_rng(population, sample_size, Scripted::new(values.clone()))
            .expect("valid request")
            .collect();
        let b: Vec<u64> = sample_with_rng(population, sample_size, Scripted::new(values))
            .expect("valid request")
            .collect();
        prop_assert_eq!(a.len() as u64, sample_size);
        prop_assert!(a.windows(2).all(|w| w[0] < w[1]));
        prop_assert_eq!(a, b);
    }

    #[test]
    fn prop_oversized_requests_rejected(
        population in 0u64..1_000,
        excess in 1u64..1_000,
    ) {
        let sample_size = population + excess;
        let expected = SampleError::InvalidRequest { population, sample_size };

        prop_assert_eq!(SampleRequest::new(population, sample_size).err(), Some(expected.clone()));
        let err = sample_with_rng(population, sample_size, Scripted::new([0.5])).err();
        prop_assert_eq!(err, Some(expected));
    }

    #[test]
    fn prop_baseline_agrees_on_shape(
        (population, sample_size) in request(),
        seed in any::<u64>(),
    ) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let reference = sorted_floyd_sample_with_rng(population, sample_size, &mut rng)
            .expect("valid request");
        let ours: Vec<u64> = sample_with_rng(population, sample_size, &mut rng)
            .expect("valid request")
            .collect();

        prop_assert_eq!(ours.len(), reference.len());
        if sample_size == population {
            prop_assert_eq!(ours, reference);
        }
    }
}
