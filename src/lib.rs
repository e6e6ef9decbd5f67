//! In-place partial ordering of slices.
//!
//! [`top_k`] moves the `k` smallest elements of a slice to its front without sorting them, with
//! only the boundary element `v[k - 1]` at its sorted position. [`partial_sort`] additionally sorts
//! that prefix. Both are faster than sorting the whole slice when only a prefix of the sorted
//! order is needed.
//!
//! The selection is done with the Floyd–Rivest algorithm, see [`floyd_rivest`]. Every operation
//! comes in three flavors, natural order, `_by` with a comparator, and `_by_key` with a key
//! function. `k` can be any primitive integer and is clamped to the slice length, see [`Rank`].
//!
//! ```
//! let mut v = [9, 2, 5, -1, 4];
//!
//! partial_select::partial_sort(&mut v, 2);
//! assert_eq!(v[..2], [-1, 2]);
//!
//! // Negative ranks select nothing.
//! let mut w = [9, 2, 5];
//! partial_select::top_k(&mut w, -1);
//! assert_eq!(w, [9, 2, 5]);
//! ```

use std::cmp::Ordering;

/// An implementation of the top-k and partial sort operations.
///
/// Allows writing tests and comparisons once and running them against every implementation.
pub trait Select {
    fn name() -> String;

    fn top_k<T, K>(v: &mut [T], k: K)
    where
        T: Ord,
        K: Rank;

    fn top_k_by<T, K, F>(v: &mut [T], k: K, compare: F)
    where
        K: Rank,
        F: FnMut(&T, &T) -> Ordering;

    fn partial_sort<T, K>(v: &mut [T], k: K)
    where
        T: Ord,
        K: Rank;

    fn partial_sort_by<T, K, F>(v: &mut [T], k: K, compare: F)
    where
        K: Rank,
        F: FnMut(&T, &T) -> Ordering;
}

macro_rules! select_impl {
    ($name:expr) => {
        pub struct SelectImpl;

        impl crate::Select for SelectImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn top_k<T, K>(v: &mut [T], k: K)
            where
                T: Ord,
                K: crate::Rank,
            {
                top_k(v, k);
            }

            #[inline]
            fn top_k_by<T, K, F>(v: &mut [T], k: K, compare: F)
            where
                K: crate::Rank,
                F: FnMut(&T, &T) -> std::cmp::Ordering,
            {
                top_k_by(v, k, compare);
            }

            #[inline]
            fn partial_sort<T, K>(v: &mut [T], k: K)
            where
                T: Ord,
                K: crate::Rank,
            {
                partial_sort(v, k);
            }

            #[inline]
            fn partial_sort_by<T, K, F>(v: &mut [T], k: K, compare: F)
            where
                K: crate::Rank,
                F: FnMut(&T, &T) -> std::cmp::Ordering,
            {
                partial_sort_by(v, k, compare);
            }
        }
    };
}

pub mod floyd_rivest;
pub mod patterns;
pub mod std_select;

mod rank;

pub use floyd_rivest::{
    partial_sort, partial_sort_by, partial_sort_by_key, top_k, top_k_by, top_k_by_key,
};
pub use rank::Rank;
