//! Supply reachable from one demand point.
//!
//! Answers "which facilities can this area still get to": supply points
//! within the cost window, outside the excluded hazard classes, with
//! their combined capacity and a count per service level.

use std::collections::{BTreeMap, HashMap, HashSet};

use crate::error::{AccessError, Result};
use crate::models::{CostEdge, SupplyPoint};
use crate::validation::{validate_cutoff, ValidationError, ValidationErrorKind};

/// Label used for supply points without a service level.
pub const UNCLASSIFIED_LEVEL: &str = "Unclassified";

/// Supply reachable from one demand point.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReachableSupply {
    /// Demand point ID.
    pub demand_id: String,
    /// Reachable supply point IDs, in supply-table order.
    pub supply_ids: Vec<String>,
    /// Combined capacity of the reachable supply points.
    pub total_capacity: f64,
    /// Count of reachable supply points per service level.
    pub by_service_level: BTreeMap<String, usize>,
}

impl ReachableSupply {
    /// Collects the supply reachable from `demand_id`.
    ///
    /// An edge counts when its cost is within `cutoff` (inclusive) and
    /// its supply point is not in any of `excluded_classes`. Edges to
    /// unknown supply points are ignored.
    ///
    /// # Errors
    /// [`AccessError::Validation`] if `demand_id` has no edge at all in
    /// `edges`, or the cutoff is invalid.
    pub fn for_demand<S: AsRef<str>>(
        demand_id: &str,
        supply: &[SupplyPoint],
        edges: &[CostEdge],
        cutoff: f64,
        excluded_classes: &[S],
    ) -> Result<Self> {
        validate_cutoff(cutoff).map_err(|e| AccessError::Validation(vec![e]))?;

        let mut known = false;
        let mut reachable: HashSet<&str> = HashSet::new();
        for edge in edges.iter().filter(|e| e.from_id == demand_id) {
            known = true;
            if edge.within(cutoff) {
                reachable.insert(edge.to_id.as_str());
            }
        }
        if !known {
            return Err(AccessError::Validation(vec![ValidationError::new(
                ValidationErrorKind::UnknownDemand,
                format!("Demand point '{demand_id}' has no cost edges"),
            )]));
        }

        let mut result = Self {
            demand_id: demand_id.to_string(),
            ..Self::default()
        };
        let mut levels: HashMap<&str, usize> = HashMap::new();
        for s in supply {
            if !reachable.contains(s.id.as_str()) || s.in_risk_class(excluded_classes) {
                continue;
            }
            result.supply_ids.push(s.id.clone());
            result.total_capacity += s.capacity;
            *levels
                .entry(s.service_level.as_deref().unwrap_or(UNCLASSIFIED_LEVEL))
                .or_default() += 1;
        }
        result.by_service_level = levels
            .into_iter()
            .map(|(level, n)| (level.to_string(), n))
            .collect();
        Ok(result)
    }

    /// Number of distinct reachable supply points.
    pub fn count(&self) -> usize {
        self.supply_ids.len()
    }

    /// Whether nothing is reachable.
    pub fn is_empty(&self) -> bool {
        self.supply_ids.is_empty()
    }
}
