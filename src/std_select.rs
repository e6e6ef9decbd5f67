//! Same contract as [`crate::floyd_rivest`], implemented with the standard library's
//! `select_nth_unstable` family. Used as the baseline the crate is tested and compared against.

use std::cmp::Ordering;

use crate::Rank;

select_impl!("rust_std_select");

#[inline]
pub fn top_k<T, K>(v: &mut [T], k: K)
where
    T: Ord,
    K: Rank,
{
    let k = k.clamp_to(v.len());
    if k > 0 {
        v.select_nth_unstable(k - 1);
    }
}

#[inline]
pub fn top_k_by<T, K, F>(v: &mut [T], k: K, compare: F)
where
    K: Rank,
    F: FnMut(&T, &T) -> Ordering,
{
    let k = k.clamp_to(v.len());
    if k > 0 {
        v.select_nth_unstable_by(k - 1, compare);
    }
}

#[inline]
pub fn partial_sort<T, K>(v: &mut [T], k: K)
where
    T: Ord,
    K: Rank,
{
    if v.is_empty() {
        return;
    }

    let k = k.clamp_to(v.len()).max(1);
    v.select_nth_unstable(k - 1);
    v[..k - 1].sort_unstable();
}

#[inline]
pub fn partial_sort_by<T, K, F>(v: &mut [T], k: K, mut compare: F)
where
    K: Rank,
    F: FnMut(&T, &T) -> Ordering,
{
    if v.is_empty() {
        return;
    }

    let k = k.clamp_to(v.len()).max(1);
    v.select_nth_unstable_by(k - 1, &mut compare);
    v[..k - 1].sort_unstable_by(compare);
}
