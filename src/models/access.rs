//! Accessibility result model.
//!
//! An access table is the output of one scoring run: one result per
//! demand point, in the order the demand table was given. Results are
//! never mutated after the run that produced them.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Score for one demand point.
///
/// Lower scores mean better access. Unreachable points carry the run's
/// sentinel score (`f64::INFINITY` by default) and are flagged, so a
/// finite sentinel is never mistaken for a real score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessibilityResult {
    /// Scored demand point ID.
    pub demand_id: String,
    /// Accessibility score (lower = better).
    pub score: f64,
    /// Whether `score` is the unreachable sentinel.
    #[serde(default)]
    pub sentinel: bool,
    /// Number of supply points reachable within the cost window.
    pub reachable_supply: usize,
    /// Supply point with the smallest finite contribution, if any.
    pub best_supply: Option<String>,
}

impl AccessibilityResult {
    /// Creates a result for a reachable demand point.
    pub fn new(demand_id: impl Into<String>, score: f64) -> Self {
        Self {
            demand_id: demand_id.into(),
            score,
            sentinel: false,
            reachable_supply: 0,
            best_supply: None,
        }
    }

    /// Creates a result carrying the unreachable sentinel.
    pub fn unreachable(demand_id: impl Into<String>, sentinel: f64) -> Self {
        Self {
            sentinel: true,
            ..Self::new(demand_id, sentinel)
        }
    }

    /// Sets the number of reachable supply points.
    pub fn with_reachable_supply(mut self, count: usize) -> Self {
        self.reachable_supply = count;
        self
    }

    /// Sets the best supply point.
    pub fn with_best_supply(mut self, supply_id: impl Into<String>) -> Self {
        self.best_supply = Some(supply_id.into());
        self
    }

    /// Whether the demand point got a real score.
    ///
    /// False when no edge survived the cost window, or when every
    /// surviving edge leads to zero-capacity supply.
    #[inline]
    pub fn is_reachable(&self) -> bool {
        !self.sentinel
    }
}

/// Scores for every demand point of one run, keyed by demand ID.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<AccessibilityResult>", into = "Vec<AccessibilityResult>")]
pub struct AccessTable {
    results: Vec<AccessibilityResult>,
    index: HashMap<String, usize>,
}

impl AccessTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a result. A later result for the same demand ID replaces
    /// the earlier one in lookups.
    pub fn push(&mut self, result: AccessibilityResult) {
        self.index
            .insert(result.demand_id.clone(), self.results.len());
        self.results.push(result);
    }

    /// Looks up the result for a demand point.
    pub fn get(&self, demand_id: &str) -> Option<&AccessibilityResult> {
        self.index.get(demand_id).map(|&i| &self.results[i])
    }

    /// Score for a demand point.
    pub fn score(&self, demand_id: &str) -> Option<f64> {
        self.get(demand_id).map(|r| r.score)
    }

    /// Whether the table holds a result for a demand point.
    pub fn contains(&self, demand_id: &str) -> bool {
        self.index.contains_key(demand_id)
    }

    /// Results in demand-table order.
    pub fn iter(&self) -> impl Iterator<Item = &AccessibilityResult> {
        self.results.iter()
    }

    /// Results as a slice.
    pub fn results(&self) -> &[AccessibilityResult] {
        &self.results
    }

    /// Number of results.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Results for demand points with no reachable supply.
    pub fn unreachable(&self) -> impl Iterator<Item = &AccessibilityResult> {
        self.results.iter().filter(|r| !r.is_reachable())
    }

    /// Results ordered best-first: reachable points by ascending score,
    /// then unreachable points. Ties broken by demand ID.
    pub fn ranked(&self) -> Vec<&AccessibilityResult> {
        let mut ranked: Vec<&AccessibilityResult> = self.results.iter().collect();
        ranked.sort_by(|a, b| {
            a.sentinel
                .cmp(&b.sentinel)
                .then_with(|| a.score.total_cmp(&b.score))
                .then_with(|| a.demand_id.cmp(&b.demand_id))
        });
        ranked
    }
}

impl From<Vec<AccessibilityResult>> for AccessTable {
    fn from(results: Vec<AccessibilityResult>) -> Self {
        let mut table = Self::new();
        for r in results {
            table.push(r);
        }
        table
    }
}

impl From<AccessTable> for Vec<AccessibilityResult> {
    fn from(table: AccessTable) -> Self {
        table.results
    }
}

impl<'a> IntoIterator for &'a AccessTable {
    type Item = &'a AccessibilityResult;
    type IntoIter = std::slice::Iter<'a, AccessibilityResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}
