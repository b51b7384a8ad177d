//! Top-down merge sort that emits the left element on ties, and is therefore stable.
//!
//! Same recursion as [`crate::unstable::merge`], only the tie-break differs.

use std::cmp::Ordering;

use crate::error::SortError;
use crate::merge::{merge_sort, TieBreak};
use crate::partial::PartialLess;

sort_impl!("rust_merge_stable");

#[inline]
pub fn sort<T>(v: &mut [T]) -> &mut [T]
where
    T: Ord,
{
    merge_sort(v, TieBreak::LeftFirst, &mut |a, b| a.lt(b));
    v
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F) -> &mut [T]
where
    F: FnMut(&T, &T) -> Ordering,
{
    merge_sort(v, TieBreak::LeftFirst, &mut |a, b| {
        compare(a, b) == Ordering::Less
    });
    v
}

/// Sorts a slice of partially ordered values, see [`crate::stable::insertion::try_sort`].
pub fn try_sort<T>(v: &mut [T]) -> Result<&mut [T], SortError>
where
    T: PartialOrd,
{
    let mut partial = PartialLess::default();
    merge_sort(v, TieBreak::LeftFirst, &mut |a, b| partial.is_less(a, b));
    partial.finish()?;

    Ok(v)
}
