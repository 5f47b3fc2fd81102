use crate::base_case::insertion_sort;

/// Top-down merge sort. Splits at the midpoint, sorts both halves on
/// copied buffers and merges them back. Not in-place: every call level
/// allocates the two half copies.
pub fn merge_sort(a: &mut [i32]) {
    if a.len() <= 1 {
        return;
    }

    let mid = a.len() / 2;
    let mut left = a[..mid].to_vec();
    let mut right = a[mid..].to_vec();

    merge_sort(&mut left);
    merge_sort(&mut right);

    merge(a, &left, &right);
}

/// Merge sort that hands any sub-range of length <= `threshold` to
/// insertion sort instead of recursing further. The threshold is an
/// explicit parameter so the driver can sweep it between runs.
pub fn merge_insertion_sort(a: &mut [i32], threshold: usize) {
    if a.len() <= threshold {
        insertion_sort(a);
        return;
    }

    let mid = a.len() / 2;
    let mut left = a[..mid].to_vec();
    let mut right = a[mid..].to_vec();

    merge_insertion_sort(&mut left, threshold);
    merge_insertion_sort(&mut right, threshold);

    merge(a, &left, &right);
}

// ties are taken from the left run, keeping the merge stable
fn merge(a: &mut [i32], left: &[i32], right: &[i32]) {
    let mut l = 0;
    let mut r = 0;
    let mut i = 0;

    while l < left.len() && r < right.len() {
        if left[l] <= right[r] {
            a[i] = left[l];
            l += 1;
        } else {
            a[i] = right[r];
            r += 1;
        }
        i += 1;
    }

    while l < left.len() {
        a[i] = left[l];
        l += 1;
        i += 1;
    }

    while r < right.len() {
        a[i] = right[r];
        r += 1;
        i += 1;
    }
}
