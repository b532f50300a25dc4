//! Result summaries.
//!
//! Distribution statistics over an access table, and the supply still
//! reachable from a single demand point.

mod reachable;
mod stats;

pub use reachable::{ReachableSupply, UNCLASSIFIED_LEVEL};
pub use stats::{AccessSummary, COLOUR_RANGE_HIGH, COLOUR_RANGE_LOW};
