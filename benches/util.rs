use std::env;

use criterion::{black_box, BatchSize, Criterion};

use once_cell::sync::OnceCell;

use regex::Regex;

use sort_test_tools::Sort;

pub fn pin_thread_to_core() {
    use std::cell::Cell;
    let pin_core_id: usize = 2;

    thread_local! {static AFFINITY_ALREADY_SET: Cell<bool> = const { Cell::new(false) }; }

    // Set affinity only once per thread.
    AFFINITY_ALREADY_SET.with(|affinity_already_set| {
        if !affinity_already_set.get() {
            if let Some(core_id) = core_affinity::get_core_ids()
                .as_ref()
                .and_then(|ids| ids.get(pin_core_id))
            {
                core_affinity::set_for_current(*core_id);
            }

            affinity_already_set.set(true);
        }
    });
}

/// `BENCH_REGEX` restricts which benchmark names run, everything runs if it is unset.
pub fn should_run_benchmark(name: &str) -> bool {
    static FILTER_REGEX: OnceCell<Option<Regex>> = OnceCell::new();

    FILTER_REGEX
        .get_or_init(|| {
            env::var("BENCH_REGEX")
                .ok()
                .map(|filter_regex| Regex::new(&filter_regex).expect("BENCH_REGEX is not a regex"))
        })
        .as_ref()
        .map(|reg| reg.is_match(name))
        .unwrap_or(true)
}

fn measure_comp_count<S: Sort, T: Ord>(
    name: &str,
    test_len: usize,
    transform: fn(Vec<i32>) -> Vec<T>,
    pattern_provider: fn(usize) -> Vec<i32>,
) {
    // Measure how many comparisons are performed by a specific implementation and input
    // combination.
    let run_count: usize = if test_len <= 20 {
        10_000
    } else if test_len < 10_000 {
        300
    } else {
        10
    };

    let mut comp_count = 0u64;

    // Instrument via sort_by to ensure the type properties such as Copy of the type
    // that is being sorted doesn't change. And we get representative numbers.
    for _ in 0..run_count {
        let mut test_data = transform(pattern_provider(test_len));
        S::sort_by(black_box(test_data.as_mut_slice()), |a, b| {
            comp_count += 1;
            a.cmp(b)
        })
    }

    // If there is on average less than a single comparison this will be wrong.
    // But that's such a corner case I don't care about it.
    let total = comp_count / (run_count as u64);
    println!("{name}: mean comparisons: {total}");
}

#[inline(never)]
pub fn bench_fn<S: Sort, T: Ord>(
    c: &mut Criterion,
    test_len: usize,
    transform_name: &str,
    transform: fn(Vec<i32>) -> Vec<T>,
    pattern_name: &str,
    pattern_provider: fn(usize) -> Vec<i32>,
) {
    let sort_name = S::name();

    if env::var("MEASURE_COMP").is_ok() {
        let name = format!("{sort_name}-comp-{transform_name}-{pattern_name}-{test_len}");
        if should_run_benchmark(&name) {
            measure_comp_count::<S, T>(&name, test_len, transform, pattern_provider);
        }
        return;
    }

    let bench_name = format!("{sort_name}-hot-{transform_name}-{pattern_name}-{test_len}");
    if !should_run_benchmark(&bench_name) {
        return;
    }

    // Pin the benchmark to the same core to improve repeatability. Doing it this way allows
    // criterion to do other stuff with other threads, which greatly impacts overall benchmark
    // throughput.
    pin_thread_to_core();

    let batch_size = if test_len > 30 {
        BatchSize::LargeInput
    } else {
        BatchSize::SmallInput
    };

    c.bench_function(&bench_name, |b| {
        b.iter_batched_ref(
            || transform(pattern_provider(test_len)),
            |test_data| {
                S::sort(black_box(test_data.as_mut_slice()));
                black_box(test_data); // side-effect
            },
            batch_size,
        )
    });
}
