//! Shared setup for the criterion and iai_callgrind benchmarks.

pub mod generators;
pub mod traits;

pub use generators::*;
pub(crate) use traits::{sized_iai_benchmark, SizedBenchmark};
