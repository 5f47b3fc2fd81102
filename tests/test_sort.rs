#[cfg(test)]
mod sorting {
    use std::env;

    use lazy_static::lazy_static;
    use rand::rngs::StdRng;
    use rand::{thread_rng, Rng, SeedableRng};

    use sortlab::config::{THRESHOLD_MAX, THRESHOLD_MIN};
    use sortlab::generator::ArrayGenerator;
    use sortlab::{heap_sort, insertion_sort, introsort, merge_insertion_sort, merge_sort, quicksort};

    lazy_static! {
        static ref SEED: u64 = initialize_seed();
        static ref NUM_RUNS: usize = get_num_runs();
    }

    fn verify_sorted(arr: &[i32]) {
        for i in 1..arr.len() {
            assert!(
                arr[i - 1] <= arr[i],
                "Array not sorted! {} (i={}) > {} (i={}). Seed: {}",
                arr[i - 1],
                i - 1,
                arr[i],
                i,
                *SEED
            );
        }
    }

    fn verify_permutation(original: &[i32], sorted: &[i32]) {
        let mut expected = original.to_vec();
        expected.sort_unstable();
        assert_eq!(sorted, expected.as_slice(), "Elements changed! Seed: {}", *SEED);
    }

    // every algorithm must sort all three input families plus the trivial
    // cases, preserve the element multiset and be idempotent
    fn check<F: FnMut(&mut [i32])>(mut sort_fn: F) {
        let mut generator = ArrayGenerator::new(*SEED);
        let inputs = vec![
            vec![],
            vec![42],
            generator.from_range(1_000, 0, 6_000),
            generator.reversed(1_000, 0, 6_000),
            generator.almost_sorted(1_000, 0, 6_000, 10),
        ];

        for input in inputs {
            let mut arr = input.clone();
            sort_fn(&mut arr);
            verify_sorted(&arr);
            verify_permutation(&input, &arr);

            let sorted = arr.clone();
            sort_fn(&mut arr);
            assert_eq!(arr, sorted, "Not idempotent! Seed: {}", *SEED);
        }
    }

    #[test]
    fn merge_sort_sorts() {
        check(merge_sort);
    }

    #[test]
    fn insertion_sort_sorts() {
        check(insertion_sort);
    }

    #[test]
    fn heap_sort_sorts() {
        check(heap_sort);
    }

    #[test]
    fn merge_insertion_sort_sorts() {
        check(|a| merge_insertion_sort(a, THRESHOLD_MIN));
    }

    #[test]
    fn quicksort_sorts() {
        let mut rng = StdRng::seed_from_u64(*SEED);
        check(|a| quicksort(a, &mut rng));
    }

    #[test]
    fn introsort_sorts() {
        let mut rng = StdRng::seed_from_u64(*SEED);
        check(|a| introsort(a, THRESHOLD_MIN, &mut rng));
    }

    #[test]
    fn hybrids_agree_across_thresholds() {
        let mut generator = ArrayGenerator::new(*SEED);
        let input = generator.from_range(2_000, 0, 6_000);
        let mut expected = input.clone();
        expected.sort_unstable();

        let mut threshold = THRESHOLD_MIN;
        while threshold <= THRESHOLD_MAX {
            let mut merged = input.clone();
            merge_insertion_sort(&mut merged, threshold);
            assert_eq!(merged, expected, "merge-insertion, threshold {threshold}");

            let mut introsorted = input.clone();
            let mut rng = StdRng::seed_from_u64(*SEED);
            introsort(&mut introsorted, threshold, &mut rng);
            assert_eq!(introsorted, expected, "introsort, threshold {threshold}");

            threshold *= 2;
        }
    }

    #[test]
    fn random_lengths() {
        let mut rng = StdRng::seed_from_u64(*SEED);
        for i in 0..*NUM_RUNS {
            let n = rng.gen_range(1..5_000);
            let mut shuffle_rng = StdRng::seed_from_u64(*SEED + i as u64);
            let input: Vec<i32> = (0..n).map(|_| shuffle_rng.gen_range(-10_000..10_000)).collect();

            let mut arr = input.clone();
            let mut sort_rng = StdRng::seed_from_u64(*SEED + i as u64);
            introsort(&mut arr, THRESHOLD_MIN, &mut sort_rng);
            verify_sorted(&arr);
            verify_permutation(&input, &arr);

            let mut arr = input.clone();
            let mut sort_rng = StdRng::seed_from_u64(*SEED + i as u64);
            quicksort(&mut arr, &mut sort_rng);
            verify_sorted(&arr);
            verify_permutation(&input, &arr);
        }
    }

    fn initialize_seed() -> u64 {
        // Check for environment variables to control seed randomization
        let randomize_seed = env::var("RANDOMIZE_SEED")
            .map(|val| val == "true")
            .unwrap_or(false);

        if randomize_seed {
            let seed: u64 = thread_rng().gen_range(0..u64::MAX);
            println!("Seed: {}", seed);
            seed
        } else {
            let seed = env::var("SEED")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(12345);
            println!("Seed: {}", seed);
            seed
        }
    }

    fn get_num_runs() -> usize {
        env::var("NUM_RUNS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(4)
    }
}
