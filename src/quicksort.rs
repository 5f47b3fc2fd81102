use rand::Rng;

/// Randomized quicksort with the Hoare partition scheme. The generator is
/// injected so a seeded run reproduces its pivot choices. Random pivots
/// make the O(n²) worst case unlikely, they do not rule it out.
pub fn quicksort<R: Rng>(a: &mut [i32], rng: &mut R) {
    if a.len() < 2 {
        return;
    }

    let (left_end, right_start) = hoare_partition(a, rng);
    let (left, right) = a.split_at_mut(right_start);
    quicksort(&mut left[..left_end], rng);
    quicksort(right, rng);
}

/// One Hoare partition step around a pivot value picked at a uniformly
/// random index. Two cursors run inward, skipping elements strictly less
/// (left) or strictly greater (right) than the pivot and swapping crossing
/// pairs until the cursors cross.
///
/// Returns `(left_end, right_start)` with `left_end <= right_start`: the
/// partitions still to be sorted are `a[..left_end]` and `a[right_start..]`.
pub(crate) fn hoare_partition<R: Rng>(a: &mut [i32], rng: &mut R) -> (usize, usize) {
    let pivot = a[rng.gen_range(0..a.len())];
    let mut i = 0_isize;
    let mut j = a.len() as isize - 1;

    while i <= j {
        while a[i as usize] < pivot {
            i += 1;
        }
        while a[j as usize] > pivot {
            j -= 1;
        }
        if i <= j {
            a.swap(i as usize, j as usize);
            i += 1;
            j -= 1;
        }
    }

    ((j + 1) as usize, i as usize)
}
