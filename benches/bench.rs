use criterion::{black_box, criterion_group, BatchSize, Criterion};
use regex::Regex;

use quicksort_branchy::{patterns, quicksort};

/// Optional filter over bench ids, e.g. BENCH_REGEX="random-4096".
fn bench_filter() -> Option<Regex> {
    std::env::var("BENCH_REGEX")
        .ok()
        .map(|pat| Regex::new(&pat).expect("BENCH_REGEX must be a valid regex"))
}

fn bench_pattern(c: &mut Criterion, filter: &Option<Regex>, pattern_name: &str, input: &[i32]) {
    let sorts: [(&str, fn(&mut [i32])); 2] = [
        ("quicksort_hoare_branchy", quicksort::sort::<i32>),
        ("rust_std_unstable", <[i32]>::sort_unstable),
    ];

    for (sort_name, sort_fn) in sorts {
        let id = format!("{sort_name}-{pattern_name}-{}", input.len());

        if let Some(regex) = filter {
            if !regex.is_match(&id) {
                continue;
            }
        }

        c.bench_function(&id, |b| {
            b.iter_batched_ref(
                || input.to_vec(),
                |v| sort_fn(black_box(v.as_mut_slice())),
                BatchSize::SmallInput,
            )
        });
    }
}

fn pattern_benchmarks(c: &mut Criterion) {
    let filter = bench_filter();

    for len in [23usize, 256, 4096, 16384] {
        bench_pattern(c, &filter, "random", &patterns::random(len));
        bench_pattern(c, &filter, "random_zipf", &patterns::random_zipf(len, 1.0));
    }

    // Presorted and constant inputs drive the leading-element pivot into
    // O(n) recursion depth, so these stay at smaller lengths.
    for len in [23usize, 256, 4096] {
        bench_pattern(c, &filter, "ascending", &patterns::ascending(len));
        bench_pattern(c, &filter, "descending", &patterns::descending(len));
        bench_pattern(c, &filter, "all_equal", &patterns::all_equal(len));
    }

    bench_pattern(c, &filter, "modulo_product", &patterns::modulo_product(23));
}

criterion_group!(benches, pattern_benchmarks);

fn main() {
    // Pin to one core, scheduler migration shows up as measurement noise.
    if let Some(core_ids) = core_affinity::get_core_ids() {
        if let Some(&core_id) = core_ids.first() {
            core_affinity::set_for_current(core_id);
        }
    }

    benches();
    Criterion::default().configure_from_args().final_summary();
}
