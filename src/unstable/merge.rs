//! Top-down merge sort with the right-first tie-break.
//!
//! When the fronts of the two runs compare equal the element from the right run is emitted first,
//! so equal elements coming from the right half overtake those from the left half. The output is
//! sorted but the relative order of equal elements is not preserved, e.g. keys
//! `[(1, 'a'), (1, 'b')]` come out as `[(1, 'b'), (1, 'a')]`. Use [`crate::stable::merge`] when
//! that matters.

use std::cmp::Ordering;

use crate::error::SortError;
use crate::merge::{merge_sort, TieBreak};
use crate::partial::PartialLess;

sort_impl!("rust_merge_unstable");

#[inline]
pub fn sort<T>(v: &mut [T]) -> &mut [T]
where
    T: Ord,
{
    merge_sort(v, TieBreak::RightFirst, &mut |a, b| a.lt(b));
    v
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F) -> &mut [T]
where
    F: FnMut(&T, &T) -> Ordering,
{
    merge_sort(v, TieBreak::RightFirst, &mut |a, b| {
        compare(a, b) == Ordering::Less
    });
    v
}

/// Sorts a slice of partially ordered values.
///
/// Returns [`SortError::InvalidArgument`] if two elements turn out to be incomparable. The merges
/// still run to completion in that case, leaving `v` a permutation of its input.
pub fn try_sort<T>(v: &mut [T]) -> Result<&mut [T], SortError>
where
    T: PartialOrd,
{
    let mut partial = PartialLess::default();
    merge_sort(v, TieBreak::RightFirst, &mut |a, b| partial.is_less(a, b));
    partial.finish()?;

    Ok(v)
}
