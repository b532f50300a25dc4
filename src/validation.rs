//! Input validation for accessibility scoring.
//!
//! Checks the shape contracts of the demand, supply, and cost tables
//! before scoring. Detects:
//! - Duplicate IDs (demand, supply) and duplicate (demand, supply) edges
//! - Edges referencing unknown demand or supply points
//! - Negative or non-finite weights, capacities, and costs
//! - Negative or NaN cutoffs
//!
//! Every violation is collected so the caller sees the whole picture in
//! one pass; the engine aborts if any are found.

use crate::models::{CostEdge, DemandPoint, SupplyPoint};
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two points in the same table share an ID.
    DuplicateId,
    /// The same (demand, supply) pair appears more than once.
    DuplicateEdge,
    /// An edge (or query) references a demand point that doesn't exist.
    UnknownDemand,
    /// An edge references a supply point that doesn't exist.
    UnknownSupply,
    /// A weight, capacity, or cost is below zero.
    NegativeValue,
    /// A weight, capacity, or cost is NaN or infinite.
    NonFiniteValue,
    /// The cutoff is negative or NaN.
    InvalidCutoff,
    /// The unreachable sentinel is negative, NaN, or (when finite) does
    /// not exceed a reachable score.
    InvalidSentinel,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the input tables of a scoring run.
///
/// Checks:
/// 1. No duplicate demand IDs
/// 2. No duplicate supply IDs
/// 3. All weights and capacities are finite and >= 0
/// 4. All edge endpoints reference existing demand / supply points
/// 5. All edge costs are finite and >= 0
/// 6. No duplicate (from_id, to_id) edges
/// 7. The cutoff is >= 0 and not NaN (`+inf` means no window)
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(
    demand: &[DemandPoint],
    supply: &[SupplyPoint],
    edges: &[CostEdge],
    cutoff: f64,
) -> ValidationResult {
    let mut errors = Vec::new();

    let mut demand_ids = HashSet::new();
    for d in demand {
        if !demand_ids.insert(d.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate demand ID: {}", d.id),
            ));
        }
        check_quantity(&mut errors, "Demand point", &d.id, "weight", d.weight);
    }

    let mut supply_ids = HashSet::new();
    for s in supply {
        if !supply_ids.insert(s.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate supply ID: {}", s.id),
            ));
        }
        check_quantity(&mut errors, "Supply point", &s.id, "capacity", s.capacity);
    }

    let mut pairs = HashSet::new();
    for e in edges {
        if !demand_ids.contains(e.from_id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownDemand,
                format!(
                    "Edge '{}' -> '{}' references unknown demand point '{}'",
                    e.from_id, e.to_id, e.from_id
                ),
            ));
        }
        if !supply_ids.contains(e.to_id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownSupply,
                format!(
                    "Edge '{}' -> '{}' references unknown supply point '{}'",
                    e.from_id, e.to_id, e.to_id
                ),
            ));
        }
        if !pairs.insert((e.from_id.as_str(), e.to_id.as_str())) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateEdge,
                format!("Duplicate edge: '{}' -> '{}'", e.from_id, e.to_id),
            ));
        }
        let label = format!("{}->{}", e.from_id, e.to_id);
        check_quantity(&mut errors, "Edge", &label, "cost", e.cost);
    }

    if let Err(err) = validate_cutoff(cutoff) {
        errors.push(err);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a cost window. `+inf` is accepted and disables the window.
pub fn validate_cutoff(cutoff: f64) -> Result<(), ValidationError> {
    if cutoff.is_nan() || cutoff < 0.0 {
        return Err(ValidationError::new(
            ValidationErrorKind::InvalidCutoff,
            format!("Cutoff must be >= 0, got {cutoff}"),
        ));
    }
    Ok(())
}

/// Validates an unreachable sentinel score.
pub fn validate_sentinel(sentinel: f64) -> Result<(), ValidationError> {
    if sentinel.is_nan() || sentinel < 0.0 {
        return Err(ValidationError::new(
            ValidationErrorKind::InvalidSentinel,
            format!("Unreachable score must be >= 0, got {sentinel}"),
        ));
    }
    Ok(())
}

fn check_quantity(
    errors: &mut Vec<ValidationError>,
    entity: &str,
    id: &str,
    field: &str,
    value: f64,
) {
    if !value.is_finite() {
        errors.push(ValidationError::new(
            ValidationErrorKind::NonFiniteValue,
            format!("{entity} '{id}' has non-finite {field}: {value}"),
        ));
    } else if value < 0.0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NegativeValue,
            format!("{entity} '{id}' has negative {field}: {value}"),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_demand() -> Vec<DemandPoint> {
        vec![DemandPoint::new("A", 100.0), DemandPoint::new("B", 50.0)]
    }

    fn sample_supply() -> Vec<SupplyPoint> {
        vec![SupplyPoint::new("X", 10.0), SupplyPoint::new("Y", 0.0)]
    }

    fn sample_edges() -> Vec<CostEdge> {
        vec![
            CostEdge::new("A", "X", 300.0),
            CostEdge::new("B", "X", 600.0),
            CostEdge::new("B", "Y", 0.0),
        ]
    }

    fn kinds(errors: &[ValidationError]) -> Vec<ValidationErrorKind> {
        errors.iter().map(|e| e.kind.clone()).collect()
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_input(&sample_demand(), &sample_supply(), &sample_edges(), 600.0).is_ok());
    }

    #[test]
    fn test_empty_tables_are_structurally_valid() {
        // Emptiness is the engine's concern, not a shape violation.
        assert!(validate_input(&[], &[], &[], 0.0).is_ok());
    }

    #[test]
    fn test_duplicate_demand_id() {
        let demand = vec![DemandPoint::new("A", 1.0), DemandPoint::new("A", 2.0)];
        let errors = validate_input(&demand, &sample_supply(), &[], 10.0).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("demand")));
    }

    #[test]
    fn test_duplicate_supply_id() {
        let supply = vec![SupplyPoint::new("X", 1.0), SupplyPoint::new("X", 2.0)];
        let errors = validate_input(&sample_demand(), &supply, &[], 10.0).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("supply")));
    }

    #[test]
    fn test_unknown_demand_reference() {
        let edges = vec![CostEdge::new("Z", "X", 10.0)];
        let errors = validate_input(&sample_demand(), &sample_supply(), &edges, 10.0).unwrap_err();
        assert_eq!(kinds(&errors), vec![ValidationErrorKind::UnknownDemand]);
    }

    #[test]
    fn test_unknown_supply_reference() {
        let edges = vec![CostEdge::new("A", "NOPE", 10.0)];
        let errors = validate_input(&sample_demand(), &sample_supply(), &edges, 10.0).unwrap_err();
        assert_eq!(kinds(&errors), vec![ValidationErrorKind::UnknownSupply]);
        assert!(errors[0].message.contains("NOPE"));
    }

    #[test]
    fn test_duplicate_edge() {
        let edges = vec![CostEdge::new("A", "X", 10.0), CostEdge::new("A", "X", 20.0)];
        let errors = validate_input(&sample_demand(), &sample_supply(), &edges, 30.0).unwrap_err();
        assert_eq!(kinds(&errors), vec![ValidationErrorKind::DuplicateEdge]);
    }

    #[test]
    fn test_negative_values() {
        let demand = vec![DemandPoint::new("A", -1.0)];
        let supply = vec![SupplyPoint::new("X", -5.0)];
        let edges = vec![CostEdge::new("A", "X", -10.0)];
        let errors = validate_input(&demand, &supply, &edges, 10.0).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors
            .iter()
            .all(|e| e.kind == ValidationErrorKind::NegativeValue));
    }

    #[test]
    fn test_non_finite_values() {
        let demand = vec![DemandPoint::new("A", f64::NAN)];
        let supply = vec![SupplyPoint::new("X", f64::INFINITY)];
        let edges = vec![CostEdge::new("A", "X", f64::NAN)];
        let errors = validate_input(&demand, &supply, &edges, 10.0).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors
            .iter()
            .all(|e| e.kind == ValidationErrorKind::NonFiniteValue));
    }

    #[test]
    fn test_negative_cutoff() {
        let errors =
            validate_input(&sample_demand(), &sample_supply(), &sample_edges(), -1.0).unwrap_err();
        assert_eq!(kinds(&errors), vec![ValidationErrorKind::InvalidCutoff]);
    }

    #[test]
    fn test_cutoff_bounds() {
        assert!(validate_cutoff(0.0).is_ok());
        assert!(validate_cutoff(f64::INFINITY).is_ok());
        assert!(validate_cutoff(f64::NAN).is_err());
        assert!(validate_cutoff(-0.5).is_err());
    }

    #[test]
    fn test_sentinel_bounds() {
        assert!(validate_sentinel(f64::INFINITY).is_ok());
        assert!(validate_sentinel(1e9).is_ok());
        assert_eq!(
            validate_sentinel(f64::NAN).unwrap_err().kind,
            ValidationErrorKind::InvalidSentinel
        );
        assert!(validate_sentinel(-1.0).is_err());
    }

    #[test]
    fn test_multiple_errors() {
        // Dangling reference + negative weight + bad cutoff
        let demand = vec![DemandPoint::new("A", -3.0)];
        let edges = vec![CostEdge::new("A", "GHOST", 5.0)];
        let errors = validate_input(&demand, &sample_supply(), &edges, f64::NAN).unwrap_err();
        assert!(errors.len() >= 3);
    }
}
