/// Windows spanning more than this many positions are narrowed by sampling before they are
/// partitioned. Below it the extra recursion costs more than the comparisons it saves.
pub const SAMPLE_THRESHOLD: usize = 600;

/// Nesting limit for the sampling pre-pass.
///
/// The sampled window shrinks roughly as `n^(2/3)` independent of the data, so even a
/// `usize::MAX` long window needs fewer than 8 levels to drop below `SAMPLE_THRESHOLD`. Past this
/// depth the window is partitioned directly, which still terminates.
pub const MAX_SAMPLE_DEPTH: u32 = 16;

/// Returns the sub-window of `left..=right` that contains the element of rank `k` with high
/// probability.
///
/// Sample size `s` and deviation `sd` follow Floyd and Rivest's original choice:
///
/// ```text
/// n  = right - left + 1
/// i  = k - left + 1
/// z  = ln(n)
/// s  = 0.5 * exp(2z / 3)
/// sd = 0.5 * sqrt(z * s * (n - s) / n) * sign(i - n / 2)
/// ```
///
/// The bounds are floored and then clamped to the current window.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub fn sample_window(left: usize, right: usize, k: usize) -> (usize, usize) {
    debug_assert!(left <= k && k <= right);

    let n = (right - left + 1) as f64;
    let i = (k - left + 1) as f64;
    let z = n.ln();
    let s = 0.5 * (2.0 * z / 3.0).exp();
    let sd = 0.5 * (z * s * (n - s) / n).sqrt() * sign(i - n / 2.0);

    let k_f = k as f64;
    // Clamping in float space first avoids casting negative values to usize.
    let new_left = (k_f - i * s / n + sd).floor().max(left as f64) as usize;
    let new_right = (k_f + (n - i) * s / n + sd).floor().min(right as f64) as usize;

    (new_left, new_right)
}

#[inline]
fn sign(x: f64) -> f64 {
    if x < 0.0 {
        -1.0
    } else {
        1.0
    }
}
