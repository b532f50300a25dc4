//! Two-pass accessibility scoring.
//!
//! # Algorithm
//!
//! 1. Drop every edge with `cost > cutoff`.
//! 2. Pass 1: for each supply point `s`, sum the weights of the demand
//!    points with a surviving edge to it: `total_demand(s)`.
//! 3. Pass 2: for each surviving edge, the demand point's share of that
//!    competition is `share(d, s) = weight(d) / total_demand(s)`, and the
//!    edge term is `share(d, s) * cost(d, s) / capacity(s)`.
//! 4. Terms are aggregated per demand point (see [`Aggregation`]).
//!    Demand points with no surviving edge receive the sentinel.
//!
//! Zero `total_demand(s)` gives a zero share. A zero-capacity site offers
//! no usable option: its edges contribute nothing, and a demand point whose
//! only surviving edges lead to such sites receives the sentinel.
//!
//! Weights are divided by the largest weight before summing, so
//! `total_demand(s)` stays finite for any finite input.
//!
//! A finite sentinel must exceed every reachable score of the run;
//! otherwise the run is rejected, since the sentinel would no longer read
//! as the worst case.
//!
//! # Complexity
//! O(|D| + |S| + |E|) time and memory.
//!
//! # Reference
//! Saxon & Snow (2020), "A Rational Agent Model for the Spatial
//! Accessibility of Primary Health Care", Annals of the AAG 110(1).

use std::collections::HashMap;

use tracing::{debug, trace, warn};

use super::{AccessConfig, Aggregation};
use crate::error::{AccessError, Result, Table};
use crate::models::{AccessTable, AccessibilityResult, CostEdge, DemandPoint, SupplyPoint};
use crate::validation::{
    validate_input, validate_sentinel, ValidationError, ValidationErrorKind,
};

/// Scores demand points with the default configuration and the given
/// cost window.
///
/// # Example
/// ```
/// use u_access::{compute_access, CostEdge, DemandPoint, SupplyPoint};
///
/// let demand = vec![DemandPoint::new("A", 100.0), DemandPoint::new("B", 50.0)];
/// let supply = vec![SupplyPoint::new("X", 10.0)];
/// let edges = vec![CostEdge::new("A", "X", 300.0), CostEdge::new("B", "X", 600.0)];
///
/// let table = compute_access(&demand, &supply, &edges, 600.0).unwrap();
/// assert!((table.score("A").unwrap() - 20.0).abs() < 1e-9);
/// assert!((table.score("B").unwrap() - 20.0).abs() < 1e-9);
/// ```
pub fn compute_access(
    demand: &[DemandPoint],
    supply: &[SupplyPoint],
    edges: &[CostEdge],
    cutoff: f64,
) -> Result<AccessTable> {
    RaamEngine::new(AccessConfig::new().with_cutoff(cutoff)).compute(demand, supply, edges)
}

/// Accessibility scorer.
///
/// Holds only configuration; every [`compute`](Self::compute) call is
/// self-contained, so one engine can serve concurrent runs.
#[derive(Debug, Clone, Default)]
pub struct RaamEngine {
    config: AccessConfig,
}

/// Per-demand running state for pass 2.
#[derive(Debug, Clone, Copy, Default)]
struct Tally {
    reachable: usize,
    /// Aggregated score over terms seen so far.
    score: Option<f64>,
    /// Supply index and term of the cheapest finite option.
    best: Option<(usize, f64)>,
}

impl RaamEngine {
    /// Creates an engine with the given configuration.
    pub fn new(config: AccessConfig) -> Self {
        Self { config }
    }

    /// The engine's configuration.
    pub fn config(&self) -> &AccessConfig {
        &self.config
    }

    /// Scores every demand point.
    ///
    /// # Errors
    /// - [`AccessError::Validation`] if any table violates its shape
    ///   contract, the cutoff/sentinel is out of domain, or a finite
    ///   sentinel does not exceed every reachable score.
    /// - [`AccessError::EmptyInput`] if the demand or supply table is empty
    ///   and `allow_empty` is not set.
    pub fn compute(
        &self,
        demand: &[DemandPoint],
        supply: &[SupplyPoint],
        edges: &[CostEdge],
    ) -> Result<AccessTable> {
        let config = &self.config;
        debug!(
            demand = demand.len(),
            supply = supply.len(),
            edges = edges.len(),
            cutoff = config.cutoff,
            "scoring accessibility"
        );

        let mut errors = match validate_input(demand, supply, edges, config.cutoff) {
            Ok(()) => Vec::new(),
            Err(errors) => errors,
        };
        if let Err(err) = validate_sentinel(config.unreachable_score) {
            errors.push(err);
        }
        if !errors.is_empty() {
            warn!(errors = errors.len(), "rejected accessibility input");
            return Err(AccessError::Validation(errors));
        }

        if !config.allow_empty {
            if demand.is_empty() {
                return Err(AccessError::EmptyInput {
                    table: Table::Demand,
                });
            }
            if supply.is_empty() {
                return Err(AccessError::EmptyInput {
                    table: Table::Supply,
                });
            }
        }

        let window = self.filter_edges(demand, supply, edges);
        let weights = scaled_weights(demand);
        let total_demand = competing_demand(&weights, supply.len(), &window);
        let tallies = self.tally(&weights, supply, &window, &total_demand);

        let sentinel = config.unreachable_score;
        let mut table = AccessTable::new();
        let mut sentinel_scored = 0usize;
        for (d, tally) in demand.iter().zip(&tallies) {
            let mut result = match tally.score {
                Some(score) => AccessibilityResult::new(&d.id, score),
                None => {
                    sentinel_scored += 1;
                    AccessibilityResult::unreachable(&d.id, sentinel)
                }
            }
            .with_reachable_supply(tally.reachable);
            if let Some((s, _)) = tally.best {
                result = result.with_best_supply(&supply[s].id);
            }
            table.push(result);
        }

        if sentinel.is_finite() {
            if let Some(worst) = table
                .iter()
                .filter(|r| r.is_reachable() && r.score >= sentinel)
                .max_by(|a, b| a.score.total_cmp(&b.score))
            {
                warn!(
                    sentinel,
                    worst = worst.score,
                    "unreachable score does not exceed reachable scores"
                );
                return Err(AccessError::Validation(vec![ValidationError::new(
                    ValidationErrorKind::InvalidSentinel,
                    format!(
                        "Unreachable score {sentinel} does not exceed the score {} of demand point '{}'",
                        worst.score, worst.demand_id
                    ),
                )]));
            }
        }

        debug!(
            scored = table.len(),
            sentinel_scored,
            kept_edges = window.len(),
            "accessibility scored"
        );
        Ok(table)
    }

    /// Step 1: keeps edges within the window, resolved to table indices.
    fn filter_edges(
        &self,
        demand: &[DemandPoint],
        supply: &[SupplyPoint],
        edges: &[CostEdge],
    ) -> Vec<(usize, usize, f64)> {
        let demand_index: HashMap<&str, usize> = demand
            .iter()
            .enumerate()
            .map(|(i, d)| (d.id.as_str(), i))
            .collect();
        let supply_index: HashMap<&str, usize> = supply
            .iter()
            .enumerate()
            .map(|(i, s)| (s.id.as_str(), i))
            .collect();

        let mut window = Vec::with_capacity(edges.len());
        for edge in edges {
            if !edge.within(self.config.cutoff) {
                trace!(
                    from = %edge.from_id,
                    to = %edge.to_id,
                    cost = edge.cost,
                    "edge outside cost window"
                );
                continue;
            }
            // Endpoints were checked by validation.
            let (Some(&d), Some(&s)) = (
                demand_index.get(edge.from_id.as_str()),
                supply_index.get(edge.to_id.as_str()),
            ) else {
                continue;
            };
            window.push((d, s, edge.cost));
        }
        window
    }

    /// Step 3: per-demand aggregation of edge terms.
    ///
    /// `weights` are the scaled demand weights; shares are ratios, so the
    /// scale cancels out.
    fn tally(
        &self,
        weights: &[f64],
        supply: &[SupplyPoint],
        window: &[(usize, usize, f64)],
        total_demand: &[f64],
    ) -> Vec<Tally> {
        let mut tallies = vec![Tally::default(); weights.len()];

        for &(d, s, cost) in window {
            let tally = &mut tallies[d];
            tally.reachable += 1;

            let capacity = supply[s].capacity;
            if capacity <= 0.0 {
                // Never reduces the score; only counted in `reachable_supply`.
                continue;
            }

            let share = if total_demand[s] > 0.0 {
                weights[d] / total_demand[s]
            } else {
                0.0
            };
            let term = share * cost / capacity;

            tally.score = Some(match (self.config.aggregation, tally.score) {
                (_, None) => term,
                (Aggregation::Rational, Some(v)) => v.min(term),
                (Aggregation::Additive, Some(v)) => v + term,
            });
            if tally.best.map_or(true, |(_, best)| term < best) {
                tally.best = Some((s, term));
            }
        }
        tallies
    }
}

/// Demand weights divided by the largest weight (unchanged when all are 0).
fn scaled_weights(demand: &[DemandPoint]) -> Vec<f64> {
    let max = demand.iter().map(|d| d.weight).fold(0.0, f64::max);
    if max > 0.0 {
        demand.iter().map(|d| d.weight / max).collect()
    } else {
        demand.iter().map(|d| d.weight).collect()
    }
}

/// Step 2: total weight competing for each supply point.
fn competing_demand(
    weights: &[f64],
    supply_len: usize,
    window: &[(usize, usize, f64)],
) -> Vec<f64> {
    let mut total = vec![0.0; supply_len];
    for &(d, s, _) in window {
        total[s] += weights[d];
    }
    total
}
