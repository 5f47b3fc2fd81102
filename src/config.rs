//! Experiment constants shared by the benchmark driver and the harness.

/// Length of the base arrays each benchmark run slices its inputs from.
pub const BASE_SIZE: usize = 10_000;
/// Smallest benchmarked input size.
pub const MIN_SIZE: usize = 500;
/// Step between consecutive benchmarked sizes.
pub const SIZE_STEP: usize = 100;
/// Back-to-back sort calls per timing measurement.
pub const REPETITIONS: usize = 100;

pub const VALUE_MIN: i32 = 0;
pub const VALUE_MAX: i32 = 6_000;
/// Random swaps applied to the almost-sorted base array.
pub const SWAP_COUNT: usize = 10;

/// Bounds of the insertion-sort threshold sweep, doubling per run.
pub const THRESHOLD_MIN: usize = 16;
pub const THRESHOLD_MAX: usize = 16_384;

pub const DEFAULT_SEED: u64 = 12345;

const fn is_power_of_two(x: usize) -> bool {
    (x != 0) && ((x & (x - 1)) == 0)
}

const _: () = {
    assert!(MIN_SIZE <= BASE_SIZE, "size sweep must fit the base arrays");
    assert!(SIZE_STEP > 0);
    assert!(VALUE_MIN <= VALUE_MAX);
    assert!(is_power_of_two(THRESHOLD_MIN), "threshold sweep starts at a power of two");
    assert!(THRESHOLD_MIN <= THRESHOLD_MAX);
};
