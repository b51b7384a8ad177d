// The literal right-first tie-break makes this merge sort unstable.
pub mod merge;
