//! Scenario comparison.
//!
//! Diffs two access tables over the same demand domain and ranks the
//! demand points whose access got worse.

use serde::{Deserialize, Serialize};

use crate::error::{AccessError, Result};
use crate::models::{AccessTable, AccessibilityResult};

/// Score change for one demand point between two runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreDelta {
    /// Demand point ID.
    pub demand_id: String,
    /// Score in the baseline run.
    pub baseline: f64,
    /// Score in the restricted run.
    pub restricted: f64,
    /// `restricted - baseline`. Positive = access got worse.
    pub delta: f64,
}

impl ScoreDelta {
    /// Computes the delta between two results for the same demand point.
    ///
    /// Unreachable results are compared by reachability, not by their
    /// sentinel value: both unreachable → 0, restricted-only → `+inf`,
    /// baseline-only → `-inf`.
    pub fn new(baseline: &AccessibilityResult, restricted: &AccessibilityResult) -> Self {
        let delta = match (baseline.is_reachable(), restricted.is_reachable()) {
            (false, false) => 0.0,
            (true, false) => f64::INFINITY,
            (false, true) => f64::NEG_INFINITY,
            (true, true) => restricted.score - baseline.score,
        };
        Self {
            demand_id: baseline.demand_id.clone(),
            baseline: baseline.score,
            restricted: restricted.score,
            delta,
        }
    }

    /// Whether access got worse.
    #[inline]
    pub fn worsened(&self) -> bool {
        self.delta > 0.0
    }
}

/// Per-demand deltas between a baseline and a restricted run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScenarioComparison {
    /// Deltas in baseline-table order.
    pub deltas: Vec<ScoreDelta>,
}

/// Compares two access tables over the same demand domain.
///
/// # Errors
/// [`AccessError::DomainMismatch`] if a demand ID appears in only one table.
pub fn compare(baseline: &AccessTable, restricted: &AccessTable) -> Result<ScenarioComparison> {
    let mut deltas = Vec::with_capacity(baseline.len());
    for base in baseline {
        let Some(other) = restricted.get(&base.demand_id) else {
            return Err(AccessError::DomainMismatch {
                demand_id: base.demand_id.clone(),
                missing_from: "restricted",
            });
        };
        deltas.push(ScoreDelta::new(base, other));
    }

    if let Some(extra) = restricted.iter().find(|r| !baseline.contains(&r.demand_id)) {
        return Err(AccessError::DomainMismatch {
            demand_id: extra.demand_id.clone(),
            missing_from: "baseline",
        });
    }

    Ok(ScenarioComparison { deltas })
}

impl ScenarioComparison {
    /// The `k` demand points whose access worsened most.
    ///
    /// Sorted by delta descending; ties broken by demand ID.
    pub fn most_affected(&self, k: usize) -> Vec<&ScoreDelta> {
        let mut ranked: Vec<&ScoreDelta> = self.deltas.iter().collect();
        ranked.sort_by(|a, b| {
            b.delta
                .total_cmp(&a.delta)
                .then_with(|| a.demand_id.cmp(&b.demand_id))
        });
        ranked.truncate(k);
        ranked
    }

    /// Whether any demand point got worse.
    pub fn has_impact(&self) -> bool {
        self.deltas.iter().any(ScoreDelta::worsened)
    }

    /// Number of demand points that got worse.
    pub fn worsened(&self) -> usize {
        self.deltas.iter().filter(|d| d.worsened()).count()
    }

    /// Delta for a demand point.
    pub fn get(&self, demand_id: &str) -> Option<&ScoreDelta> {
        self.deltas.iter().find(|d| d.demand_id == demand_id)
    }

    /// Number of compared demand points.
    pub fn len(&self) -> usize {
        self.deltas.len()
    }

    /// Whether nothing was compared.
    pub fn is_empty(&self) -> bool {
        self.deltas.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(id: &str, score: f64) -> AccessibilityResult {
        if score.is_infinite() {
            AccessibilityResult::unreachable(id, score)
        } else {
            AccessibilityResult::new(id, score).with_reachable_supply(1)
        }
    }

    fn table(scores: &[(&str, f64)]) -> AccessTable {
        scores
            .iter()
            .map(|&(id, score)| result(id, score))
            .collect::<Vec<_>>()
            .into()
    }

    #[test]
    fn test_delta_signs() {
        let base = table(&[("A", 10.0), ("B", 20.0), ("C", 5.0)]);
        let restricted = table(&[("A", 15.0), ("B", 20.0), ("C", 4.0)]);
        let cmp = compare(&base, &restricted).unwrap();

        assert!((cmp.get("A").unwrap().delta - 5.0).abs() < 1e-10);
        assert_eq!(cmp.get("B").unwrap().delta, 0.0);
        assert!((cmp.get("C").unwrap().delta + 1.0).abs() < 1e-10);
        assert_eq!(cmp.worsened(), 1);
        assert!(cmp.has_impact());
    }

    #[test]
    fn test_infinite_deltas() {
        let inf = f64::INFINITY;
        let base = table(&[("A", inf), ("B", 3.0), ("C", inf)]);
        let restricted = table(&[("A", inf), ("B", inf), ("C", 2.0)]);
        let cmp = compare(&base, &restricted).unwrap();

        assert_eq!(cmp.get("A").unwrap().delta, 0.0);
        assert_eq!(cmp.get("B").unwrap().delta, f64::INFINITY);
        assert_eq!(cmp.get("C").unwrap().delta, f64::NEG_INFINITY);
        assert!(cmp.deltas.iter().all(|d| !d.delta.is_nan()));
    }

    #[test]
    fn test_finite_sentinel_loss_of_access() {
        let base = table(&[("A", 30.0), ("B", 12.0)]);
        let restricted: AccessTable = vec![
            AccessibilityResult::unreachable("A", 100.0),
            AccessibilityResult::unreachable("B", 100.0),
        ]
        .into();
        let cmp = compare(&base, &restricted).unwrap();

        assert_eq!(cmp.get("A").unwrap().delta, f64::INFINITY);
        assert_eq!(cmp.get("A").unwrap().restricted, 100.0);
        assert_eq!(cmp.worsened(), 2);

        let back = compare(&restricted, &restricted).unwrap();
        assert!(!back.has_impact());
        let regained = compare(&restricted, &base).unwrap();
        assert_eq!(regained.get("B").unwrap().delta, f64::NEG_INFINITY);
    }

    #[test]
    fn test_most_affected_order() {
        let base = table(&[("A", 1.0), ("B", 1.0), ("C", 1.0), ("D", 1.0)]);
        let restricted = table(&[("A", 2.0), ("B", f64::INFINITY), ("C", 3.0), ("D", 2.0)]);
        let cmp = compare(&base, &restricted).unwrap();

        let top: Vec<&str> = cmp
            .most_affected(3)
            .iter()
            .map(|d| d.demand_id.as_str())
            .collect();
        assert_eq!(top, vec!["B", "C", "A"]);
        assert_eq!(cmp.most_affected(20).len(), 4);
    }

    #[test]
    fn test_no_impact() {
        let base = table(&[("A", 1.0)]);
        let cmp = compare(&base, &base.clone()).unwrap();
        assert!(!cmp.has_impact());
        assert_eq!(cmp.len(), 1);
    }

    #[test]
    fn test_missing_from_restricted() {
        let base = table(&[("A", 1.0), ("B", 1.0)]);
        let restricted = table(&[("A", 1.0)]);
        let err = compare(&base, &restricted).unwrap_err();
        assert!(matches!(
            err,
            AccessError::DomainMismatch { ref demand_id, missing_from: "restricted" } if demand_id == "B"
        ));
    }

    #[test]
    fn test_missing_from_baseline() {
        let base = table(&[("A", 1.0)]);
        let restricted = table(&[("A", 1.0), ("Z", 1.0)]);
        let err = compare(&base, &restricted).unwrap_err();
        assert!(matches!(
            err,
            AccessError::DomainMismatch { missing_from: "baseline", .. }
        ));
    }
}
