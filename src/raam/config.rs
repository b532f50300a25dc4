//! Scoring run configuration.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::minutes_to_seconds;

/// How per-edge terms are combined into one demand point's score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Aggregation {
    /// The demand point takes its cheapest option: `min_s term(d, s)`.
    ///
    /// Removing supply or shrinking the window can only worsen a score.
    #[default]
    Rational,
    /// Sum of terms over every reachable supply point with capacity.
    ///
    /// Not monotone: removing a supply point drops a term.
    Additive,
}

/// Configuration for one scoring run.
///
/// # Example
/// ```
/// use u_access::raam::{AccessConfig, Aggregation};
///
/// let config = AccessConfig::new()
///     .with_cutoff_minutes(30.0)
///     .with_aggregation(Aggregation::Rational);
/// assert_eq!(config.cutoff, 1800.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessConfig {
    /// Cost window (τ) in the cost table's unit. Edges with a larger
    /// cost are dropped. `+inf` disables the window.
    pub cutoff: f64,
    /// Score given to demand points with no usable supply. A finite
    /// value must exceed every reachable score of the run.
    pub unreachable_score: f64,
    /// Term aggregation.
    pub aggregation: Aggregation,
    /// When set, an empty demand or supply table yields an empty
    /// (or all-sentinel) result instead of an error.
    pub allow_empty: bool,
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            cutoff: f64::INFINITY,
            unreachable_score: f64::INFINITY,
            aggregation: Aggregation::Rational,
            allow_empty: false,
        }
    }
}

impl AccessConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a configuration from a JSON document. Missing fields keep
    /// their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Sets the cost window in the cost table's unit.
    pub fn with_cutoff(mut self, cutoff: f64) -> Self {
        self.cutoff = cutoff;
        self
    }

    /// Sets the cost window from minutes, for cost tables in seconds.
    pub fn with_cutoff_minutes(mut self, minutes: f64) -> Self {
        self.cutoff = minutes_to_seconds(minutes);
        self
    }

    /// Sets the unreachable sentinel.
    pub fn with_unreachable_score(mut self, score: f64) -> Self {
        self.unreachable_score = score;
        self
    }

    /// Sets the aggregation.
    pub fn with_aggregation(mut self, aggregation: Aggregation) -> Self {
        self.aggregation = aggregation;
        self
    }

    /// Allows empty demand/supply tables.
    pub fn with_allow_empty(mut self, allow: bool) -> Self {
        self.allow_empty = allow;
        self
    }
}
