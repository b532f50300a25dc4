//! Score distribution summary.
//!
//! Computes distribution statistics over an access table, mainly to
//! pick a colour scale for a choropleth and to report coverage.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Reachable | Demand points with a real score |
//! | Unreachable | Demand points carrying the sentinel |
//! | Min / Max / Mean | Over reachable scores only |
//! | Quantile(p) | Linear interpolation over sorted reachable scores |
//! | Colour range | (Quantile(0.05), Quantile(0.95)) |

use crate::models::AccessTable;

/// Lower quantile of the default colour range.
pub const COLOUR_RANGE_LOW: f64 = 0.05;
/// Upper quantile of the default colour range.
pub const COLOUR_RANGE_HIGH: f64 = 0.95;

/// Distribution of scores from one run.
#[derive(Debug, Clone)]
pub struct AccessSummary {
    /// Demand points with a real score.
    pub reachable: usize,
    /// Demand points carrying the sentinel.
    pub unreachable: usize,
    /// Smallest reachable score.
    pub min_score: Option<f64>,
    /// Largest reachable score.
    pub max_score: Option<f64>,
    /// Mean reachable score.
    pub mean_score: Option<f64>,
    sorted: Vec<f64>,
}

impl AccessSummary {
    /// Computes the summary of an access table.
    pub fn calculate(table: &AccessTable) -> Self {
        let mut sorted: Vec<f64> = table
            .iter()
            .filter(|r| r.is_reachable())
            .map(|r| r.score)
            .collect();
        sorted.sort_by(f64::total_cmp);

        let reachable = sorted.len();
        let mean_score = if reachable == 0 {
            None
        } else {
            Some(sorted.iter().sum::<f64>() / reachable as f64)
        };

        Self {
            reachable,
            unreachable: table.len() - reachable,
            min_score: sorted.first().copied(),
            max_score: sorted.last().copied(),
            mean_score,
            sorted,
        }
    }

    /// The `p`-quantile of reachable scores (`p` clamped to 0.0..=1.0).
    ///
    /// Interpolates linearly between the two nearest ranks. `None` when
    /// no demand point is reachable.
    pub fn quantile(&self, p: f64) -> Option<f64> {
        let n = self.sorted.len();
        if n == 0 || p.is_nan() {
            return None;
        }
        let pos = p.clamp(0.0, 1.0) * (n - 1) as f64;
        let lo = pos.floor() as usize;
        let hi = pos.ceil() as usize;
        let frac = pos - lo as f64;
        Some(self.sorted[lo] + (self.sorted[hi] - self.sorted[lo]) * frac)
    }

    /// The 5% to 95% quantile range.
    pub fn colour_range(&self) -> Option<(f64, f64)> {
        Some((
            self.quantile(COLOUR_RANGE_LOW)?,
            self.quantile(COLOUR_RANGE_HIGH)?,
        ))
    }

    /// Fraction of reachable demand points (1.0 for an empty table).
    pub fn coverage(&self) -> f64 {
        let total = self.reachable + self.unreachable;
        if total == 0 {
            1.0
        } else {
            self.reachable as f64 / total as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AccessibilityResult;

    fn table(scores: &[f64]) -> AccessTable {
        scores
            .iter()
            .enumerate()
            .map(|(i, &s)| {
                if s.is_infinite() {
                    AccessibilityResult::unreachable(format!("B{i}"), s)
                } else {
                    AccessibilityResult::new(format!("B{i}"), s).with_reachable_supply(1)
                }
            })
            .collect::<Vec<_>>()
            .into()
    }

    #[test]
    fn test_summary_basic() {
        let s = AccessSummary::calculate(&table(&[4.0, 1.0, 3.0, 2.0]));
        assert_eq!(s.reachable, 4);
        assert_eq!(s.unreachable, 0);
        assert_eq!(s.min_score, Some(1.0));
        assert_eq!(s.max_score, Some(4.0));
        assert!((s.mean_score.unwrap() - 2.5).abs() < 1e-10);
        assert!((s.coverage() - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_summary_ignores_sentinel() {
        let s = AccessSummary::calculate(&table(&[2.0, f64::INFINITY, 6.0]));
        assert_eq!(s.reachable, 2);
        assert_eq!(s.unreachable, 1);
        assert_eq!(s.max_score, Some(6.0));
        assert!((s.mean_score.unwrap() - 4.0).abs() < 1e-10);
        assert!((s.coverage() - 2.0 / 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_summary_ignores_finite_sentinel() {
        let t: AccessTable = vec![
            AccessibilityResult::new("B1", 2.0).with_reachable_supply(1),
            AccessibilityResult::unreachable("B2", 1_000.0),
            AccessibilityResult::new("B3", 6.0).with_reachable_supply(2),
        ]
        .into();
        let s = AccessSummary::calculate(&t);
        assert_eq!(s.reachable, 2);
        assert_eq!(s.unreachable, 1);
        assert_eq!(s.unreachable, t.unreachable().count());
        assert_eq!(s.max_score, Some(6.0));
        assert!((s.mean_score.unwrap() - 4.0).abs() < 1e-10);
        assert_eq!(s.quantile(1.0), Some(6.0));
    }

    #[test]
    fn test_quantile_interpolation() {
        // 0..=10
        let scores: Vec<f64> = (0..=10).map(f64::from).collect();
        let s = AccessSummary::calculate(&table(&scores));
        assert!((s.quantile(0.0).unwrap() - 0.0).abs() < 1e-10);
        assert!((s.quantile(0.5).unwrap() - 5.0).abs() < 1e-10);
        assert!((s.quantile(0.05).unwrap() - 0.5).abs() < 1e-10);
        assert!((s.quantile(1.0).unwrap() - 10.0).abs() < 1e-10);
        assert!((s.quantile(2.0).unwrap() - 10.0).abs() < 1e-10);

        let (lo, hi) = s.colour_range().unwrap();
        assert!((lo - 0.5).abs() < 1e-10);
        assert!((hi - 9.5).abs() < 1e-10);
    }

    #[test]
    fn test_summary_empty() {
        let s = AccessSummary::calculate(&AccessTable::new());
        assert_eq!(s.reachable, 0);
        assert_eq!(s.mean_score, None);
        assert_eq!(s.quantile(0.5), None);
        assert_eq!(s.colour_range(), None);
        assert!((s.coverage() - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_all_unreachable() {
        let s = AccessSummary::calculate(&table(&[f64::INFINITY, f64::INFINITY]));
        assert_eq!(s.unreachable, 2);
        assert_eq!(s.min_score, None);
        assert!((s.coverage() - 0.0).abs() < 1e-10);
    }
}
