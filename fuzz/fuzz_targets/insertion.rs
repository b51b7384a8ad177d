#![no_main]

use libfuzzer_sys::fuzz_target;

use textbook_sort::stable::insertion as test_sort;
use textbook_sort_fuzz::{bytes_as_i32, check_against_std};

fuzz_target!(|data: &[u8]| {
    // Quadratic, keep inputs short enough for the fuzzer to stay fast.
    let v = bytes_as_i32(&data[..data.len().min(4 * 2_048)]);

    check_against_std(&v, |v| {
        test_sort::sort(v);
    });
});
