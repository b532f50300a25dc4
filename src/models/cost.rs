//! Travel cost model.
//!
//! A cost edge records the travel cost between one demand point and one
//! supply point. The cost table may be sparse: a missing pair means the
//! supply point is unreachable from that demand point.
//!
//! Costs are unit-agnostic. The dashboard feeds seconds and exposes its
//! window in minutes, so minute conversions live here.

use serde::{Deserialize, Serialize};

/// Seconds per minute.
pub const SECONDS_PER_MINUTE: f64 = 60.0;

/// Converts a duration in minutes to seconds.
#[inline]
pub fn minutes_to_seconds(minutes: f64) -> f64 {
    minutes * SECONDS_PER_MINUTE
}

/// Travel cost from a demand point to a supply point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostEdge {
    /// Origin demand point ID.
    pub from_id: String,
    /// Destination supply point ID.
    pub to_id: String,
    /// Travel cost (e.g., seconds). Must be finite and >= 0.
    pub cost: f64,
}

impl CostEdge {
    /// Creates a new cost edge.
    pub fn new(from_id: impl Into<String>, to_id: impl Into<String>, cost: f64) -> Self {
        Self {
            from_id: from_id.into(),
            to_id: to_id.into(),
            cost,
        }
    }

    /// Creates a cost edge from a travel time in minutes, stored as seconds.
    pub fn from_minutes(from_id: impl Into<String>, to_id: impl Into<String>, minutes: f64) -> Self {
        Self::new(from_id, to_id, minutes_to_seconds(minutes))
    }

    /// Whether this edge survives a cost window of `cutoff`.
    ///
    /// Edges exactly at the cutoff are kept.
    #[inline]
    pub fn within(&self, cutoff: f64) -> bool {
        self.cost <= cutoff
    }
}
