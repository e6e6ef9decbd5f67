//! Top-k selection and partial sorting based on the Floyd–Rivest selection algorithm.
//!
//! Floyd–Rivest is a quickselect that, before partitioning a large window, recursively selects
//! the target rank inside a small sample of that window. The element found there is a pivot
//! close to the target rank, so the following partition discards almost the whole window. This
//! keeps the expected number of comparisons near `n + min(k, n - k)` independent of `k`.
//!
//! All functions work in place, only swap elements and never allocate.

use std::cmp::Ordering;

use crate::Rank;

mod partition;
mod sample;

pub use sample::{MAX_SAMPLE_DEPTH, SAMPLE_THRESHOLD};

select_impl!("floyd_rivest");

/// Reorders the slice such that `v[..k]` holds the `k` smallest elements.
///
/// Only `v[k - 1]` is guaranteed to be at its sorted position. Nothing in `v[..k - 1]` is greater
/// than it and nothing in `v[k..]` is less than it. The order of elements inside those two ranges
/// is unspecified, and so is the relative order of equal elements.
///
/// `k` is clamped to `0..=v.len()`. A `k` of zero or less leaves the slice untouched.
///
/// # Examples
///
/// ```
/// let mut v = [9, 2, 5, -1, 4];
/// partial_select::top_k(&mut v, 3);
///
/// assert_eq!(v[2], 4);
/// let mut smallest = v[..3].to_vec();
/// smallest.sort();
/// assert_eq!(smallest, [-1, 2, 4]);
/// ```
#[inline]
pub fn top_k<T, K>(v: &mut [T], k: K)
where
    T: Ord,
    K: Rank,
{
    top_k_impl(v, k, &mut |a, b| a.lt(b));
}

/// Reorders the slice with a comparator function such that `v[..k]` holds the `k` smallest
/// elements.
///
/// The comparator must define a strict weak order on the elements. If it doesn't, the resulting
/// order is unspecified, but the slice still contains the same elements and the call returns.
///
/// See [`top_k`] for the guarantees and the handling of `k`.
///
/// # Examples
///
/// ```
/// let mut v = [9, 2, 5, -1, 4];
/// // The two largest end up in front.
/// partial_select::top_k_by(&mut v, 2, |a, b| b.cmp(a));
///
/// assert_eq!(v[1], 5);
/// assert!(v[..2].contains(&9));
/// ```
#[inline]
pub fn top_k_by<T, K, F>(v: &mut [T], k: K, mut compare: F)
where
    K: Rank,
    F: FnMut(&T, &T) -> Ordering,
{
    top_k_impl(v, k, &mut |a, b| compare(a, b) == Ordering::Less);
}

/// Reorders the slice with a key extraction function such that `v[..k]` holds the `k` elements
/// with the smallest keys.
///
/// The key function is called twice per comparison.
///
/// See [`top_k`] for the guarantees and the handling of `k`.
#[inline]
pub fn top_k_by_key<T, K, U, F>(v: &mut [T], k: K, mut f: F)
where
    K: Rank,
    U: Ord,
    F: FnMut(&T) -> U,
{
    top_k_impl(v, k, &mut |a, b| f(a).lt(&f(b)));
}

/// Sorts the `k` smallest elements of the slice into `v[..k]`.
///
/// `v[..k]` is sorted ascending and nothing in `v[k..]` is less than `v[k - 1]`. The order of
/// `v[k..]` is unspecified. This sort is unstable.
///
/// `k` is clamped to `1..=v.len()`, so for a non-empty slice at least the minimum is moved to the
/// front. An empty slice is left untouched.
///
/// # Examples
///
/// ```
/// let mut v = [9, 2, 5, -1, 4];
/// partial_select::partial_sort(&mut v, 2);
///
/// assert_eq!(v[..2], [-1, 2]);
/// ```
#[inline]
pub fn partial_sort<T, K>(v: &mut [T], k: K)
where
    T: Ord,
    K: Rank,
{
    let prefix_len = select_prefix(v, k, &mut |a, b| a.lt(b));
    if let Some(k) = prefix_len {
        v[..k - 1].sort_unstable();
    }
}

/// Sorts the `k` smallest elements of the slice into `v[..k]` with a comparator function.
///
/// See [`partial_sort`] for the guarantees and [`top_k_by`] for the requirements on `compare`.
#[inline]
pub fn partial_sort_by<T, K, F>(v: &mut [T], k: K, mut compare: F)
where
    K: Rank,
    F: FnMut(&T, &T) -> Ordering,
{
    let prefix_len = select_prefix(v, k, &mut |a, b| compare(a, b) == Ordering::Less);
    if let Some(k) = prefix_len {
        v[..k - 1].sort_unstable_by(compare);
    }
}

/// Sorts the `k` elements with the smallest keys into `v[..k]`.
///
/// See [`partial_sort`] for the guarantees and the handling of `k`.
#[inline]
pub fn partial_sort_by_key<T, K, U, F>(v: &mut [T], k: K, mut f: F)
where
    K: Rank,
    U: Ord,
    F: FnMut(&T) -> U,
{
    let prefix_len = select_prefix(v, k, &mut |a, b| f(a).lt(&f(b)));
    if let Some(k) = prefix_len {
        v[..k - 1].sort_unstable_by_key(f);
    }
}

// --- IMPL ---

fn top_k_impl<T, K, F>(v: &mut [T], k: K, is_less: &mut F)
where
    K: Rank,
    F: FnMut(&T, &T) -> bool,
{
    let k = k.clamp_to(v.len());
    if k > 0 {
        select(v, k - 1, is_less);
    }
}

/// Selects the prefix for a partial sort and returns its clamped length, or `None` if there is
/// nothing to sort. `v[len - 1]` is already in place when this returns.
fn select_prefix<T, K, F>(v: &mut [T], k: K, is_less: &mut F) -> Option<usize>
where
    K: Rank,
    F: FnMut(&T, &T) -> bool,
{
    if v.is_empty() {
        return None;
    }

    let k = k.clamp_to(v.len()).max(1);
    select(v, k - 1, is_less);

    Some(k)
}

/// Places the element of rank `k` (zero based) at `v[k]`, with nothing greater before it and
/// nothing less after it.
///
/// # Panics
///
/// Panics if `k >= v.len()` and `v` holds more than one element.
pub(crate) fn select<T, F>(v: &mut [T], k: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    assert!(k < len, "select index {k} out of range for slice of length {len}");

    select_in_window(v, 0, len - 1, k, MAX_SAMPLE_DEPTH, is_less);
}

/// Narrows `left..=right` around `k` until `v[k]` is in place.
///
/// Windows wider than `SAMPLE_THRESHOLD` first recurse into a sampled sub-window. That moves a
/// near-target element to `v[k]`, which then serves as pivot for the whole window.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
fn select_in_window<T, F>(
    v: &mut [T],
    mut left: usize,
    mut right: usize,
    k: usize,
    sample_depth: u32,
    is_less: &mut F,
) where
    F: FnMut(&T, &T) -> bool,
{
    while left < right {
        debug_assert!(left <= k && k <= right);

        if right - left > SAMPLE_THRESHOLD && sample_depth > 0 {
            let (sample_left, sample_right) = sample::sample_window(left, right, k);
            debug_assert!(sample_left <= k && k <= sample_right);

            select_in_window(v, sample_left, sample_right, k, sample_depth - 1, is_less);
        }

        let j = partition::partition_around(v, left, right, k, is_less);

        match j.cmp(&k) {
            Ordering::Less => left = j + 1,
            Ordering::Greater => right = j - 1,
            Ordering::Equal => break,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::patterns;

    fn check_select(input: &[i32], k: usize) {
        let mut v = input.to_vec();
        select(&mut v, k, &mut |a, b| a < b);

        let mut sorted = input.to_vec();
        sorted.sort_unstable();

        assert_eq!(v[k], sorted[k], "k: {k}");
        assert!(v[..k].iter().all(|x| *x <= v[k]), "k: {k}");
        assert!(v[k + 1..].iter().all(|x| *x >= v[k]), "k: {k}");

        v.sort_unstable();
        assert_eq!(v, sorted);
    }

    #[test]
    fn select_small() {
        check_select(&[2, 1], 0);
        check_select(&[2, 1], 1);
        check_select(&[1, 1, 1], 1);
        check_select(&[5, 0, 0, 0, 1], 1);
        check_select(&[5, 0, 0, 0, 1], 4);
        check_select(&[9, 2, 5, -1, 4], 2);
    }

    #[test]
    fn select_every_rank() {
        for len in [2, 3, 10, 33, 601, 602, 1_500] {
            let input = patterns::random_uniform(len, 0..=(len as i32 / 4));
            let step = (len / 50).max(1);
            for k in (0..len).step_by(step).chain([len - 1]) {
                check_select(&input, k);
            }
        }
    }

    #[test]
    fn select_large_sampled() {
        // Wide enough for nested sampling.
        let input = patterns::random(200_000);
        for k in [0, 1, 9_999, 100_000, 199_998, 199_999] {
            check_select(&input, k);
        }
    }

    #[test]
    fn select_without_sampling_budget() {
        let input = patterns::random(5_000);
        let mut sorted = input.clone();
        sorted.sort_unstable();

        for k in [0, 2_500, 4_999] {
            let mut v = input.clone();
            let right = v.len() - 1;
            select_in_window(&mut v, 0, right, k, 0, &mut |a, b| a < b);
            assert_eq!(v[k], sorted[k]);
        }
    }

    #[test]
    fn select_trivial_len() {
        let mut empty: [i32; 0] = [];
        select(&mut empty, 0, &mut |a, b| a < b);

        let mut single = [7];
        select(&mut single, 0, &mut |a, b| a < b);
        assert_eq!(single, [7]);
    }

    #[test]
    #[should_panic]
    fn select_out_of_range() {
        let mut v = [3, 1, 2];
        select(&mut v, 3, &mut |a, b| a < b);
    }

    #[test]
    fn sampled_comparison_count() {
        let input = patterns::random(100_000);
        let k = 50_000;

        let mut comp_count = 0usize;
        let mut v = input;
        let right = v.len() - 1;
        select_in_window(&mut v, 0, right, k, MAX_SAMPLE_DEPTH, &mut |a, b| {
            comp_count += 1;
            a < b
        });

        // Expected is close to n + min(k, n - k). Plain quickselect averages well above 3n for the
        // median.
        assert!(comp_count < 220_000, "comparisons: {comp_count}");
    }
}
