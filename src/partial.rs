use std::cmp::Ordering;

use tracing::debug;

use crate::error::SortError;

/// Turns `PartialOrd` into an `is_less` suitable for the sort routines.
///
/// The first incomparable pair latches `incomparable`. From then on every comparison answers
/// "not less", which lets the running sort wind down without making further ordering decisions.
#[derive(Default)]
pub(crate) struct PartialLess {
    comparisons: usize,
    incomparable: bool,
}

impl PartialLess {
    #[inline]
    pub(crate) fn is_less<T: PartialOrd>(&mut self, a: &T, b: &T) -> bool {
        if self.incomparable {
            return false;
        }

        self.comparisons += 1;
        match a.partial_cmp(b) {
            Some(ord) => ord == Ordering::Less,
            None => {
                self.incomparable = true;
                false
            }
        }
    }

    pub(crate) fn finish(self) -> Result<(), SortError> {
        if self.incomparable {
            debug!(
                comparisons = self.comparisons,
                "incomparable elements, sequence left partially sorted"
            );
            return Err(SortError::InvalidArgument);
        }

        Ok(())
    }
}
