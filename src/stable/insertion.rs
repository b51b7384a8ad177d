//! Insertion sort. Stable, in-place and allocation free.
//!
//! *O*(*n*^2) comparisons and moves in the worst and average case, *O*(*n*) comparisons and no
//! moves on already sorted input.

use std::cmp::Ordering;
use std::mem::{self, ManuallyDrop};
use std::ptr;

use crate::error::SortError;
use crate::partial::PartialLess;

sort_impl!("rust_insertion_stable");

#[inline]
pub fn sort<T>(v: &mut [T]) -> &mut [T]
where
    T: Ord,
{
    insertion_sort(v, &mut |a, b| a.lt(b));
    v
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F) -> &mut [T]
where
    F: FnMut(&T, &T) -> Ordering,
{
    insertion_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
    v
}

/// Sorts `v` like [`sort`] and returns the number of single slot moves it took to do so.
///
/// Already sorted input yields 0, strictly descending input of length n yields n * (n - 1) / 2.
pub fn sort_counting_shifts<T>(v: &mut [T]) -> usize
where
    T: Ord,
{
    insertion_sort(v, &mut |a, b| a.lt(b))
}

/// Sorts a slice of partially ordered values.
///
/// Returns [`SortError::InvalidArgument`] if any comparison finds two elements without a defined
/// order. Insertion sort reorders as it goes, so in that case `v` is left a permutation of its
/// input that may be partially sorted.
pub fn try_sort<T>(v: &mut [T]) -> Result<&mut [T], SortError>
where
    T: PartialOrd,
{
    let mut partial = PartialLess::default();
    insertion_sort(v, &mut |a, b| partial.is_less(a, b));
    partial.finish()?;

    Ok(v)
}

/// Returns the total number of shifts performed.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
fn insertion_sort<T, F>(v: &mut [T], is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    if mem::size_of::<T>() == 0 {
        // Sorting has no meaningful behavior on zero-sized types. Do nothing.
        return 0;
    }

    let mut shifts = 0;

    // Grow the sorted prefix v[..i] by one element per step.
    for i in 1..v.len() {
        shifts += insert_tail(&mut v[..=i], is_less);
    }

    shifts
}

/// Inserts `v[v.len() - 1]` into the pre-sorted sequence `v[..v.len() - 1]` so that whole `v[..]`
/// becomes sorted. Elements equal to the tail stay in front of it.
///
/// Returns how many elements were shifted one slot to the right.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
fn insert_tail<T, F>(v: &mut [T], is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    // This would be a logic bug in insertion_sort.
    debug_assert!(len >= 2);

    let arr_ptr = v.as_mut_ptr();
    let i = len - 1;

    // SAFETY: len >= 2, so i and i - 1 are in bounds. Every slot written below was either vacated
    // by the read into `gap` or by the previous shift.
    unsafe {
        let v_i = arr_ptr.add(i);

        // Compare against v_i itself. If the tail is already in place nothing gets read out of
        // the slice, so whatever `is_less` observed stays in `v`.
        if !is_less(&*v_i, &*v_i.sub(1)) {
            return 0;
        }

        // From here on `gap.value` is the only copy of the tail that gets compared, and it is the
        // copy that ends up back in `v`.
        //
        // Panic safety:
        //
        // If `is_less` panics, `gap` gets dropped and writes `value` into the current gap, so `v`
        // still holds every element it initially held exactly once.
        let mut gap = GapGuard {
            pos: v_i.sub(1),
            value: ManuallyDrop::new(ptr::read(v_i)),
        };
        ptr::copy_nonoverlapping(gap.pos, v_i, 1);
        let mut shifted = 1;

        for j in (0..i - 1).rev() {
            let v_j = arr_ptr.add(j);

            // Strictly greater elements move right, the first one that is not stops the scan.
            if !is_less(&*gap.value, &*v_j) {
                break;
            }

            ptr::copy_nonoverlapping(v_j, gap.pos, 1);
            gap.pos = v_j;
            shifted += 1;
        }

        // `gap` gets dropped and thus copies `value` into the remaining slot in `v`.
        shifted
    }
}

struct GapGuard<T> {
    pos: *mut T,
    value: ManuallyDrop<T>,
}

impl<T> Drop for GapGuard<T> {
    fn drop(&mut self) {
        // SAFETY: `pos` is a vacated slot in the slice and `value` its only owner.
        unsafe {
            ptr::copy_nonoverlapping(&*self.value, self.pos, 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shift_counts() {
        assert_eq!(sort_counting_shifts::<i32>(&mut []), 0);
        assert_eq!(sort_counting_shifts(&mut [7]), 0);
        assert_eq!(sort_counting_shifts(&mut [1, 2, 3]), 0);
        assert_eq!(sort_counting_shifts(&mut [2, 2, 1]), 2);

        // Strictly descending is the worst case, every pair is inverted once.
        let mut v = [5, 4, 3, 2, 1];
        assert_eq!(sort_counting_shifts(&mut v), 10);
        assert_eq!(v, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn equal_elements_are_not_shifted() {
        let mut v = [3, 3, 3, 3];
        assert_eq!(sort_counting_shifts(&mut v), 0);
    }

    #[test]
    fn presorted_input_compares_once_per_element() {
        let mut comparisons = 0;
        sort_by(&mut [1, 2, 3, 4, 5, 6], |a, b| {
            comparisons += 1;
            a.cmp(b)
        });

        assert_eq!(comparisons, 5);
    }

    #[test]
    fn zero_sized_types() {
        let mut v = [(), (), ()];
        assert_eq!(sort_counting_shifts(&mut v), 0);
    }
}
