//! Merge routine and the two drivers built on it, recursive top-down and iterative bottom-up.
//!
//! Both drivers allocate a single scratch buffer of `v.len()` elements up front and reuse it for
//! every merge.

use std::cmp;
use std::mem;
use std::ptr;

use tracing::trace;

/// Which run wins when the fronts of both runs compare equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum TieBreak {
    /// Emit the left element on ties. Preserves the order of equal elements.
    LeftFirst,
    /// Emit the right element unless the left one is strictly less. Equal elements from the right
    /// run overtake those from the left run, so the result is not stable.
    RightFirst,
}

/// Recursive top-down merge sort.
///
/// Splits at the ceiling midpoint, so for odd lengths the left half holds the extra element.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub(crate) fn merge_sort<T, F>(v: &mut [T], tie_break: TieBreak, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    if mem::size_of::<T>() == 0 || len < 2 {
        // Zero-sized types have no meaningful order and short inputs are always sorted.
        return;
    }

    let mut buf = Vec::<T>::with_capacity(len);
    trace!(len, "allocated merge scratch");

    // `buf` has capacity but length 0, so the elements temporarily copied into it are never
    // dropped by it.
    merge_sort_range(v, buf.as_mut_ptr(), tie_break, is_less);
}

fn merge_sort_range<T, F>(v: &mut [T], buf: *mut T, tie_break: TieBreak, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    if len <= 1 {
        return;
    }

    let mid = len - len / 2;

    merge_sort_range(&mut v[..mid], buf, tie_break, is_less);
    merge_sort_range(&mut v[mid..], buf, tie_break, is_less);

    // SAFETY: 0 < mid < len, `buf` can hold the whole original slice and thus any sub-slice, and
    // the caller checked T is not zero-sized.
    unsafe {
        merge(v, mid, buf, tie_break, is_less);
    }
}

/// Iterative bottom-up merge sort.
///
/// Merges neighboring runs of width 1, 2, 4, ... from left to right. The last run of a pass may be
/// shorter than `width`, or missing entirely in which case it is left for a later pass.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub(crate) fn merge_sort_bottom_up<T, F>(v: &mut [T], tie_break: TieBreak, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    if mem::size_of::<T>() == 0 || len < 2 {
        return;
    }

    let mut buf = Vec::<T>::with_capacity(len);
    trace!(len, "allocated merge scratch");
    let buf_ptr = buf.as_mut_ptr();

    let mut width = 1;
    while width < len {
        let mut start = 0;

        // Only pairs where the right run is non-empty need merging.
        while start + width < len {
            let end = cmp::min(start + 2 * width, len);

            // SAFETY: 0 < width < end - start, `buf` holds len elements and T is not zero-sized.
            unsafe {
                merge(&mut v[start..end], width, buf_ptr, tie_break, is_less);
            }

            start = end;
        }

        width *= 2;
    }
}

/// Merges non-decreasing runs `v[..mid]` and `v[mid..]` into `v[..]`, using `buf` as temporary
/// storage.
///
/// # Safety
///
/// `mid` must satisfy `0 < mid < v.len()`. Buffer `buf` must be valid for writes of `v.len()`
/// elements and must not overlap `v`. `T` must not be a zero-sized type.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
unsafe fn merge<T, F>(v: &mut [T], mid: usize, buf: *mut T, tie_break: TieBreak, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    debug_assert!(mid > 0 && mid < len);

    let arr_ptr = v.as_mut_ptr();

    // Both runs are moved into `buf`, after which all of `v` is one hole that gets filled from the
    // front. The merge only ever compares the copies in `buf`, and each of those is copied into
    // `v` after its last comparison, so everything `is_less` observed ends up in `v`.
    //
    // Panic safety:
    //
    // If `is_less` panics at any point during the process, `hole` will get dropped and fill the
    // rest of `v` with the unconsumed elements of both runs, thus ensuring that `v` still holds
    // every object it initially held exactly once.
    let mut hole = unsafe {
        ptr::copy_nonoverlapping(arr_ptr, buf, len);

        MergeHole {
            left: buf,
            left_end: buf.add(mid),
            right: buf.add(mid),
            right_end: buf.add(len),
            dest: arr_ptr,
        }
    };

    while hole.left < hole.left_end && hole.right < hole.right_end {
        // SAFETY: Both cursors are in bounds of their runs, and `dest` trails them by exactly the
        // number of elements consumed so far.
        unsafe {
            let take_right = match tie_break {
                TieBreak::LeftFirst => is_less(&*hole.right, &*hole.left),
                TieBreak::RightFirst => !is_less(&*hole.left, &*hole.right),
            };

            let src = if take_right {
                let src = hole.right;
                hole.right = src.add(1);
                src
            } else {
                let src = hole.left;
                hole.left = src.add(1);
                src
            };

            ptr::copy_nonoverlapping(src, hole.dest, 1);
            hole.dest = hole.dest.add(1);
        }
    }

    // Finally, `hole` gets dropped and drains whichever run is left into `v`.
}

// When dropped, copies the ranges `left..left_end` and `right..right_end` into `dest..`, in that
// order.
struct MergeHole<T> {
    left: *mut T,
    left_end: *mut T,
    right: *mut T,
    right_end: *mut T,
    dest: *mut T,
}

impl<T> Drop for MergeHole<T> {
    fn drop(&mut self) {
        // SAFETY: The unconsumed elements of both runs exactly fill the remaining hole in `v`.
        unsafe {
            let left_len = self.left_end.offset_from(self.left) as usize;
            ptr::copy_nonoverlapping(self.left, self.dest, left_len);

            let right_len = self.right_end.offset_from(self.right) as usize;
            ptr::copy_nonoverlapping(self.right, self.dest.add(left_len), right_len);
        }
    }
}
