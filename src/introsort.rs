use rand::Rng;

use crate::base_case::insertion_sort;
use crate::heapsort::heap_sort;
use crate::quicksort::hoare_partition;

/// Introsort: quicksort with a depth budget of `2 * log2(n)` partition
/// levels. Ranges shorter than `threshold` go straight to insertion sort;
/// once the budget is exhausted the range is heap-sorted, bounding the
/// worst case to O(n log n) while keeping quicksort's typical speed.
pub fn introsort<R: Rng>(a: &mut [i32], threshold: usize, rng: &mut R) {
    if a.len() < 2 {
        return;
    }

    let max_depth = (2.0 * (a.len() as f64).log2()) as usize;
    introsort_impl(a, threshold, max_depth, rng);
}

fn introsort_impl<R: Rng>(a: &mut [i32], threshold: usize, depth: usize, rng: &mut R) {
    if a.len() < threshold {
        insertion_sort(a);
        return;
    }

    if depth == 0 {
        heap_sort(a);
        return;
    }

    let (left_end, right_start) = hoare_partition(a, rng);
    let (left, right) = a.split_at_mut(right_start);
    if left_end > 1 {
        introsort_impl(&mut left[..left_end], threshold, depth - 1, rng);
    }
    if right.len() > 1 {
        introsort_impl(right, threshold, depth - 1, rng);
    }
}
