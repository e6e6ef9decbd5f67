/// A requested number of smallest elements, clamped to the length of the slice it applies to.
///
/// Implemented for all primitive integers so callers can pass whatever integer type they have at
/// hand. Negative values clamp to `0` and values larger than `len` clamp to `len`, out of range
/// ranks are never an error.
pub trait Rank: Copy {
    /// Returns `self` clamped to `0..=len`.
    fn clamp_to(self, len: usize) -> usize;
}

macro_rules! rank_impl_unsigned {
    ($($t:ty),*) => {
        $(
            impl Rank for $t {
                #[inline]
                fn clamp_to(self, len: usize) -> usize {
                    // Values that don't fit usize are larger than any possible len.
                    usize::try_from(self).map_or(len, |k| k.min(len))
                }
            }
        )*
    };
}

macro_rules! rank_impl_signed {
    ($($t:ty),*) => {
        $(
            impl Rank for $t {
                #[inline]
                fn clamp_to(self, len: usize) -> usize {
                    if self <= 0 {
                        return 0;
                    }

                    usize::try_from(self).map_or(len, |k| k.min(len))
                }
            }
        )*
    };
}

rank_impl_unsigned!(u8, u16, u32, u64, u128, usize);
rank_impl_signed!(i8, i16, i32, i64, i128, isize);

#[cfg(test)]
mod tests {
    use super::Rank;

    #[test]
    fn negative_clamps_to_zero() {
        assert_eq!((-1i32).clamp_to(3), 0);
        assert_eq!(i64::MIN.clamp_to(3), 0);
        assert_eq!((-7isize).clamp_to(0), 0);
        assert_eq!(0i8.clamp_to(3), 0);
    }

    #[test]
    fn oversized_clamps_to_len() {
        assert_eq!(5i32.clamp_to(3), 3);
        assert_eq!(usize::MAX.clamp_to(3), 3);
        assert_eq!(u128::MAX.clamp_to(10), 10);
        assert_eq!(i128::MAX.clamp_to(10), 10);
        assert_eq!(1u8.clamp_to(0), 0);
    }

    #[test]
    fn in_range_is_unchanged() {
        for len in [1usize, 2, 17, 600] {
            for k in 0..=len {
                assert_eq!(k.clamp_to(len), k);
                assert_eq!((k as i32).clamp_to(len), k);
                assert_eq!((k as u64).clamp_to(len), k);
            }
        }
    }
}
