pub mod insertion;
pub mod merge;
pub mod merge_bottom_up;
pub mod rust_std;
