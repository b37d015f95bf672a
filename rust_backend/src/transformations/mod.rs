//! Post-processing transformations on extracted leave records.

pub mod merge;

pub use merge::merge_isolated_runs;
