use thiserror::Error;

/// Failure reported by the `try_sort` entry points.
///
/// The infallible `sort` and `sort_by` entry points have no error channel, they require a total
/// order and propagate comparator panics instead.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SortError {
    /// At least one pair of elements had no defined order, e.g. a float NaN.
    ///
    /// The slice still holds every element it held before the call, but may be partially
    /// reordered.
    #[error("invalid argument: sequence contains elements that are not comparable")]
    InvalidArgument,
}
