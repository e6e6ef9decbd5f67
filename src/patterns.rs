//! Seeded input generators for testing and comparing selection implementations.
//!
//! All random patterns of one process share a single seed so a failure can be reproduced. The
//! seed is either picked once per process or taken from the `OVERRIDE_SEED` environment variable.
//! Currently limited to i32 values.

use std::env;
use std::sync::atomic::{AtomicBool, Ordering};

use once_cell::sync::OnceCell;
use rand::distributions::Uniform;
use rand::prelude::*;

// --- Public ---

pub fn random(len: usize) -> Vec<i32> {
    //     .
    // : . : :
    // :.:::.::

    random_vec(len)
}

pub fn random_uniform<R>(len: usize, range: R) -> Vec<i32>
where
    R: Into<Uniform<i32>>,
{
    // :.:.:.::

    let mut rng = new_rng();
    let dist: Uniform<i32> = range.into();

    (0..len).map(|_| dist.sample(&mut rng)).collect()
}

pub fn random_sorted(len: usize, sorted_percent: f64) -> Vec<i32> {
    //     .:
    //   .:::. :
    // .::::::.::

    // A sorted prefix followed by new unsorted values from the same distribution.
    let mut v = random_vec(len);
    let sorted_len = ((len as f64) * (sorted_percent / 100.0)).round() as usize;

    v[..sorted_len.min(len)].sort_unstable();

    v
}

pub fn all_equal(len: usize) -> Vec<i32> {
    // ......
    // ::::::

    vec![66; len]
}

pub fn ascending(len: usize) -> Vec<i32> {
    //     .:
    //   .:::
    // .:::::

    (0..len as i32).collect()
}

pub fn descending(len: usize) -> Vec<i32> {
    // :.
    // :::.
    // :::::.

    (0..len as i32).rev().collect()
}

pub fn saw_ascending(len: usize, saw_count: usize) -> Vec<i32> {
    //   .:  .:
    // .:::.:::

    saw(len, saw_count, |_| false)
}

pub fn saw_descending(len: usize, saw_count: usize) -> Vec<i32> {
    // :.  :.
    // :::.:::.

    saw(len, saw_count, |_| true)
}

pub fn saw_mixed(len: usize, saw_count: usize) -> Vec<i32> {
    // :.  :.    .::.    .:
    // :::.:::..::::::..:::

    let directions = random_uniform(saw_count.max(1) + 1, 0..=1);
    saw(len, saw_count, |i| directions.get(i).copied() == Some(1))
}

pub fn pipe_organ(len: usize) -> Vec<i32> {
    //   .:.
    // .:::::.

    let mut vals = random_vec(len);

    let (first_half, second_half) = vals.split_at_mut(len / 2);
    first_half.sort_unstable();
    second_half.sort_unstable_by_key(|&e| std::cmp::Reverse(e));

    vals
}

/// Makes every following call to a random pattern use a fresh seed instead of the per process one.
///
/// # Panics
///
/// Panics if the seed was fixed with `OVERRIDE_SEED`.
pub fn use_random_seed_each_time() {
    if override_seed().is_some() {
        panic!("Using use_random_seed_each_time conflicts with the external seed override.");
    }

    RANDOM_EACH_TIME.store(true, Ordering::Release);
}

/// Returns the seed random patterns are derived from.
pub fn random_init_seed() -> u64 {
    if RANDOM_EACH_TIME.load(Ordering::Acquire) {
        return thread_rng().gen();
    }

    static SEED: OnceCell<u64> = OnceCell::new();
    *SEED.get_or_init(|| override_seed().unwrap_or_else(|| thread_rng().gen()))
}

// --- Private ---

static RANDOM_EACH_TIME: AtomicBool = AtomicBool::new(false);

fn override_seed() -> Option<u64> {
    let seed = env::var("OVERRIDE_SEED").ok()?;

    match seed.trim().parse() {
        Ok(seed) => Some(seed),
        Err(err) => panic!("Invalid OVERRIDE_SEED '{seed}': {err}"),
    }
}

fn new_rng() -> StdRng {
    StdRng::seed_from_u64(random_init_seed())
}

fn random_vec(len: usize) -> Vec<i32> {
    let mut rng = new_rng();

    (0..len).map(|_| rng.gen::<i32>()).collect()
}

/// Random values split into `saw_count` runs, run `i` sorted descending if `is_descending(i)`.
fn saw(len: usize, saw_count: usize, mut is_descending: impl FnMut(usize) -> bool) -> Vec<i32> {
    if len == 0 {
        return Vec::new();
    }

    let mut vals = random_vec(len);
    let chunk_len = (len / saw_count.max(1)).max(1);

    for (i, chunk) in vals.chunks_mut(chunk_len).enumerate() {
        if is_descending(i) {
            chunk.sort_unstable_by_key(|&e| std::cmp::Reverse(e));
        } else {
            chunk.sort_unstable();
        }
    }

    vals
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_seed() {
        assert_eq!(random_init_seed(), random_init_seed());
        assert_eq!(random(100), random(100));
    }

    #[test]
    fn shapes() {
        assert_eq!(ascending(4), [0, 1, 2, 3]);
        assert_eq!(descending(4), [3, 2, 1, 0]);
        assert_eq!(all_equal(3), [66, 66, 66]);

        let v = random_sorted(100, 50.0);
        assert!(v[..50].windows(2).all(|w| w[0] <= w[1]));

        let v = pipe_organ(51);
        assert!(v[..25].windows(2).all(|w| w[0] <= w[1]));
        assert!(v[25..].windows(2).all(|w| w[0] >= w[1]));

        let v = saw_ascending(100, 4);
        assert!(v.chunks(25).all(|c| c.windows(2).all(|w| w[0] <= w[1])));

        assert!(saw_mixed(0, 3).is_empty());
        assert_eq!(saw_mixed(10, 100).len(), 10);
    }

    #[test]
    fn uniform_range() {
        let v = random_uniform(1_000, 0..4);
        assert!(v.iter().all(|x| (0..4).contains(x)));
    }
}
