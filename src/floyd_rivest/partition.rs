/// Partitions `v[left..=right]` around the value currently at `v[k]` and returns the final
/// position `j` of an element equivalent to it.
///
/// Afterwards nothing in `v[left..j]` is greater than `v[j]` and nothing in `v[j + 1..=right]` is
/// less than it. Elements outside the window are not touched.
///
/// The pivot is first moved to one end of the window and the smaller of the two end values to the
/// other, so both scans are stopped by sentinels. The scans are additionally bounded by the window
/// so that a comparison function that doesn't implement a strict weak order can't push them
/// out of it. For a valid order those bounds are exactly the sentinel positions and change nothing.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub fn partition_around<T, F>(
    v: &mut [T],
    left: usize,
    right: usize,
    k: usize,
    is_less: &mut F,
) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    debug_assert!(left < right && right < v.len());
    debug_assert!(left <= k && k <= right);

    v.swap(left, k);

    // After this step the pivot sits at `pivot_pos`, and the other end holds a value that belongs
    // on its side: `v[right]` is not less than the pivot or `v[left]` is not greater.
    let pivot_pos = if is_less(&v[left], &v[right]) {
        left
    } else {
        v.swap(left, right);
        right
    };

    let mut i = left + 1;
    let mut j = right - 1;

    // i never reaches `right` and j never reaches `left` inside the scans, so `pivot_pos` is
    // neither compared against itself nor swapped.
    while i < right && is_less(&v[i], &v[pivot_pos]) {
        i += 1;
    }
    while j > left && is_less(&v[pivot_pos], &v[j]) {
        j -= 1;
    }

    while i < j {
        v.swap(i, j);
        i += 1;
        j -= 1;

        while i < right && is_less(&v[i], &v[pivot_pos]) {
            i += 1;
        }
        while j > left && is_less(&v[pivot_pos], &v[j]) {
            j -= 1;
        }
    }

    // j is now the last position of the lower part. Place a pivot equivalent there, or right
    // after it if the lower end holds a strictly smaller value.
    if pivot_pos == left || is_equivalent(&v[left], &v[pivot_pos], is_less) {
        v.swap(left, j);
    } else {
        j += 1;
        v.swap(j, right);
    }

    j
}

#[inline]
fn is_equivalent<T, F>(a: &T, b: &T, is_less: &mut F) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    !is_less(a, b) && !is_less(b, a)
}
