//! Scenario inputs and paired runs.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{compare, ScenarioComparison};
use crate::error::Result;
use crate::models::{AccessTable, CostEdge, DemandPoint, SupplyPoint};
use crate::raam::{AccessConfig, RaamEngine};

/// One complete input set for a scoring run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    /// Scenario label (e.g., "all hospitals").
    pub name: String,
    /// Demand table.
    pub demand: Vec<DemandPoint>,
    /// Supply table.
    pub supply: Vec<SupplyPoint>,
    /// Cost table.
    pub edges: Vec<CostEdge>,
    /// Run configuration (cutoff, sentinel, aggregation).
    pub config: AccessConfig,
}

impl Scenario {
    /// Creates a scenario with the default configuration.
    pub fn new(
        name: impl Into<String>,
        demand: Vec<DemandPoint>,
        supply: Vec<SupplyPoint>,
        edges: Vec<CostEdge>,
    ) -> Self {
        Self {
            name: name.into(),
            demand,
            supply,
            edges,
            config: AccessConfig::default(),
        }
    }

    /// Sets the run configuration.
    pub fn with_config(mut self, config: AccessConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the cost window (cost-table unit).
    pub fn with_cutoff(mut self, cutoff: f64) -> Self {
        self.config.cutoff = cutoff;
        self
    }

    /// Derives a scenario without the supply points in any of `classes`.
    ///
    /// Edges into removed supply points are dropped with them; the demand
    /// table and configuration are shared unchanged.
    pub fn excluding_risk_classes<S: AsRef<str>>(
        &self,
        name: impl Into<String>,
        classes: &[S],
    ) -> Scenario {
        let supply: Vec<SupplyPoint> = self
            .supply
            .iter()
            .filter(|s| !s.in_risk_class(classes))
            .cloned()
            .collect();
        let removed: HashSet<&str> = self
            .supply
            .iter()
            .filter(|s| s.in_risk_class(classes))
            .map(|s| s.id.as_str())
            .collect();
        let edges: Vec<CostEdge> = self
            .edges
            .iter()
            .filter(|e| !removed.contains(e.to_id.as_str()))
            .cloned()
            .collect();

        let name = name.into();
        debug!(
            scenario = %name,
            removed_supply = removed.len(),
            removed_edges = self.edges.len() - edges.len(),
            "derived restricted scenario"
        );
        if supply.is_empty() && !self.supply.is_empty() {
            warn!(scenario = %name, "risk filter removed every supply point");
        }

        Scenario {
            name,
            demand: self.demand.clone(),
            supply,
            edges,
            config: self.config.clone(),
        }
    }

    /// Scores this scenario.
    pub fn run(&self) -> Result<AccessTable> {
        debug!(scenario = %self.name, "running scenario");
        RaamEngine::new(self.config.clone()).compute(&self.demand, &self.supply, &self.edges)
    }
}

/// A baseline scenario and a restricted variant over the same demand table.
#[derive(Debug, Clone)]
pub struct ScenarioPair {
    /// Scenario with all supply available.
    pub baseline: Scenario,
    /// Scenario with some supply removed.
    pub restricted: Scenario,
}

/// Scores of both runs of a pair, plus their comparison.
#[derive(Debug, Clone)]
pub struct PairOutcome {
    /// Baseline scores.
    pub baseline: AccessTable,
    /// Restricted scores.
    pub restricted: AccessTable,
    /// Per-demand deltas.
    pub comparison: ScenarioComparison,
}

impl ScenarioPair {
    /// Creates a pair from two scenarios.
    pub fn new(baseline: Scenario, restricted: Scenario) -> Self {
        Self {
            baseline,
            restricted,
        }
    }

    /// Builds the pair "all supply" vs. "supply outside `classes`".
    pub fn risk_exclusion<S: AsRef<str>>(baseline: Scenario, classes: &[S]) -> Self {
        let name = format!("{} (excluding risk classes)", baseline.name);
        let restricted = baseline.excluding_risk_classes(name, classes);
        Self::new(baseline, restricted)
    }

    /// Runs both scenarios on separate threads and compares them.
    ///
    /// Fails with the baseline's error if both runs fail.
    pub fn run(&self) -> Result<PairOutcome> {
        let (baseline, restricted) = std::thread::scope(|s| {
            let restricted = s.spawn(|| self.restricted.run());
            let baseline = self.baseline.run();
            let restricted = match restricted.join() {
                Ok(result) => result,
                Err(e) => std::panic::resume_unwind(e),
            };
            (baseline, restricted)
        });
        let (baseline, restricted) = (baseline?, restricted?);
        let comparison = compare(&baseline, &restricted)?;
        Ok(PairOutcome {
            baseline,
            restricted,
            comparison,
        })
    }
}
