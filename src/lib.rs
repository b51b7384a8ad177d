//! Textbook comparison sorts: insertion sort and merge sort.
//!
//! Every algorithm lives in its own module under [`stable`] or [`unstable`] and exposes the same
//! surface: `sort`, `sort_by`, `try_sort` and a `SortImpl` type that plugs it into the shared
//! `sort_test_tools` harness and the benchmarks.

macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(arr: &mut [T])
            where
                T: Ord,
            {
                sort(arr);
            }

            #[inline]
            fn sort_by<T, F>(arr: &mut [T], compare: F)
            where
                F: FnMut(&T, &T) -> std::cmp::Ordering,
            {
                sort_by(arr, compare);
            }
        }
    };
}

pub mod error;
mod merge;
mod partial;
pub mod stable;
pub mod unstable;

pub use error::SortError;
pub use sort_test_tools::Sort;
