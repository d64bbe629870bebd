//! Connection metrics
//!
//! Recorded through the `metrics` facade. The library never installs a
//! recorder; without one every call here is a no-op.

pub mod counters;
pub mod histograms;
pub mod labels;
