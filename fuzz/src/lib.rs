/// Reads `data` as little-endian i32 values, trailing bytes that don't fill a value are ignored.
pub fn bytes_as_i32(data: &[u8]) -> Vec<i32> {
    data.chunks_exact(4)
        .map(|chunk| i32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect()
}

/// Sorts a copy of `input` with `sort` and panics unless it matches `slice::sort`.
pub fn check_against_std(input: &[i32], sort: impl FnOnce(&mut [i32])) {
    let mut expected = input.to_vec();
    expected.sort();

    let mut v = input.to_vec();
    sort(&mut v);

    assert_eq!(v, expected);
}
