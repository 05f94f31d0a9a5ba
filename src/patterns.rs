//! Input pattern generators for tests and benchmarks.

use std::env;
use std::ops::Range;

use once_cell::sync::OnceCell;
use rand::prelude::*;
use zipf::ZipfDistribution;

static SEED: OnceCell<u64> = OnceCell::new();

/// Seed used by the random pattern generators.
///
/// Set the `OVERRIDE_SEED` environment variable to reproduce a specific
/// run. The seed in use is printed once to stderr.
pub fn random_init_seed() -> u64 {
    *SEED.get_or_init(|| {
        let seed = match env::var("OVERRIDE_SEED") {
            Ok(val) => val.parse().expect("OVERRIDE_SEED must be a u64"),
            Err(_) => thread_rng().gen(),
        };
        eprintln!("Seed: {seed}");
        seed
    })
}

fn rand_rng() -> StdRng {
    StdRng::seed_from_u64(random_init_seed())
}

/// `((i * 3 % 19) * (i * 13 % 7)) % 23` for each index `i`.
///
/// The demo harness fills its sequence with this, so output stays
/// reproducible without any randomness.
pub fn modulo_product(len: usize) -> Vec<i32> {
    (0..len)
        .map(|i| {
            let i = i as i32;
            ((i * 3 % 19) * (i * 13 % 7)) % 23
        })
        .collect()
}

/// Uniformly distributed over the full `i32` range, duplicates unlikely.
pub fn random(len: usize) -> Vec<i32> {
    let mut rng = rand_rng();

    (0..len).map(|_| rng.gen::<i32>()).collect()
}

/// Uniformly distributed within `range`. Narrow ranges force runs of equal
/// elements.
pub fn random_uniform(len: usize, range: Range<i32>) -> Vec<i32> {
    let mut rng = rand_rng();

    (0..len).map(|_| rng.gen_range(range.clone())).collect()
}

/// Zipfian distributed, a handful of values make up most of the input.
pub fn random_zipf(len: usize, exponent: f64) -> Vec<i32> {
    if len == 0 {
        return Vec::new();
    }

    let mut rng = rand_rng();
    let dist = ZipfDistribution::new(len, exponent).expect("invalid zipf exponent");

    (0..len).map(|_| dist.sample(&mut rng) as i32).collect()
}

pub fn ascending(len: usize) -> Vec<i32> {
    (0..len as i32).collect()
}

pub fn descending(len: usize) -> Vec<i32> {
    (0..len as i32).rev().collect()
}

pub fn all_equal(len: usize) -> Vec<i32> {
    vec![66; len]
}
