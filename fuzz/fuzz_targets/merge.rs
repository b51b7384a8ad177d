#![no_main]

use libfuzzer_sys::fuzz_target;

use textbook_sort::stable::{merge, merge_bottom_up};
use textbook_sort::unstable::merge as merge_unstable;
use textbook_sort_fuzz::{bytes_as_i32, check_against_std};

fuzz_target!(|data: &[u8]| {
    let v = bytes_as_i32(data);

    check_against_std(&v, |v| {
        merge::sort(v);
    });
    check_against_std(&v, |v| {
        merge_bottom_up::sort(v);
    });
    check_against_std(&v, |v| {
        merge_unstable::sort(v);
    });
});
