//! Iterative merge sort, doubling the run width each pass. Stable and free of recursion, so the
//! call stack stays flat no matter the input length.

use std::cmp::Ordering;

use crate::error::SortError;
use crate::merge::{merge_sort_bottom_up, TieBreak};
use crate::partial::PartialLess;

sort_impl!("rust_merge_bottom_up_stable");

#[inline]
pub fn sort<T>(v: &mut [T]) -> &mut [T]
where
    T: Ord,
{
    merge_sort_bottom_up(v, TieBreak::LeftFirst, &mut |a, b| a.lt(b));
    v
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F) -> &mut [T]
where
    F: FnMut(&T, &T) -> Ordering,
{
    merge_sort_bottom_up(v, TieBreak::LeftFirst, &mut |a, b| {
        compare(a, b) == Ordering::Less
    });
    v
}

pub fn try_sort<T>(v: &mut [T]) -> Result<&mut [T], SortError>
where
    T: PartialOrd,
{
    let mut partial = PartialLess::default();
    merge_sort_bottom_up(v, TieBreak::LeftFirst, &mut |a, b| partial.is_less(a, b));
    partial.finish()?;

    Ok(v)
}
