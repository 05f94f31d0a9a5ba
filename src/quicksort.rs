use std::cmp::Ordering;

/// Sorts `v` in non-decreasing order.
///
/// This sort is unstable (i.e., may reorder equal elements) and in-place
/// (i.e., does not allocate). The pivot is always the leading element of the
/// current range, so presorted, reversed and constant inputs degrade to
/// `O(n^2)` comparisons and `O(n)` recursion depth.
pub fn sort<T: Ord>(v: &mut [T]) {
    quicksort(v, &mut |a, b| a.lt(b));
}

/// Sorts `v` with a comparator function.
///
/// If `compare` does not implement a total order the resulting order is
/// unspecified; the sort may also panic, but all original elements remain
/// in `v`.
pub fn sort_by<T, F: FnMut(&T, &T) -> Ordering>(v: &mut [T], mut compare: F) {
    quicksort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

/// Sorts the inclusive index range `[first, last]` of `v` in non-decreasing
/// order. Elements outside the range are untouched.
///
/// A range with `first >= last` holds at most one element and is a no-op,
/// before any bounds inspection. A non-degenerate range must lie inside the
/// slice.
///
/// # Panics
///
/// Panics if `first < last` and `last >= v.len()`.
pub fn sort_range<T: Ord>(v: &mut [T], first: usize, last: usize) {
    sort_range_by(v, first, last, |a, b| a.cmp(b));
}

/// Like [`sort_range`], but with a comparator function.
pub fn sort_range_by<T, F: FnMut(&T, &T) -> Ordering>(
    v: &mut [T],
    first: usize,
    last: usize,
    mut compare: F,
) {
    if first >= last {
        return;
    }

    assert!(
        last < v.len(),
        "sort range [{first}, {last}] out of bounds for slice of length {}",
        v.len()
    );

    quicksort(&mut v[first..=last], &mut |a, b| {
        compare(a, b) == Ordering::Less
    });
}

/// Sorts `v` recursively.
///
/// Each level partitions around the leading element and recurses into the
/// sub-ranges on either side of the pivot's final position.
fn quicksort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    if v.len() < 2 {
        return;
    }

    let pivot_pos = partition_hoare_branchy(v, is_less);

    // Split the slice into `left`, `pivot`, and `right`.
    let (left, right) = v.split_at_mut(pivot_pos);
    quicksort(left, is_less);
    quicksort(&mut right[1..], is_less);
}

/// Partitions `v` around its leading element and returns the pivot's final
/// index `p`. On return, `v[..p]` compares `<=` pivot and `v[p+1..]`
/// compares `>` pivot.
///
/// Two cursors scan towards each other: `i` forward past elements `<=`
/// pivot, `j` backward past elements `>` pivot, swapping whenever they stop
/// with `i < j`. The forward scan is additionally bounded by the end of the
/// range; the pivot index is never updated during the inner swaps and that
/// bound is what keeps `i` in range when every element compares `<=`. The
/// bound is evaluated after the comparison, which fixes the comparison
/// count of the whole sort.
///
/// If `is_less` does not implement a total order the resulting order and
/// return value are unspecified.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
fn partition_hoare_branchy<T, F>(v: &mut [T], is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let last = v.len() - 1;

    let mut i = 0;
    let mut j = last;

    while i < j {
        // Find the first element greater than the pivot.
        while !is_less(&v[0], &v[i]) && i < last {
            i += 1;
        }

        // Find the last element less than or equal to the pivot.
        while is_less(&v[0], &v[j]) {
            j -= 1;
        }

        if i < j {
            v.swap(i, j);
        }
    }

    // Place the pivot between the two partitions.
    v.swap(0, j);

    j
}
