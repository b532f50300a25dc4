//! Demand point model.
//!
//! A demand point is a location generating need for a resource: a
//! population area, a census block, a barangay. Its weight is the
//! amount of need it contributes when competing for supply.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A location that competes for supply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemandPoint {
    /// Unique demand identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Amount of demand (e.g., population count). Must be finite and >= 0.
    pub weight: f64,
    /// Domain-specific metadata (e.g., municipality).
    pub attributes: HashMap<String, String>,
}

impl DemandPoint {
    /// Creates a new demand point with the given weight.
    pub fn new(id: impl Into<String>, weight: f64) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            weight,
            attributes: HashMap::new(),
        }
    }

    /// Sets the demand point name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Adds a domain-specific attribute.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Whether this point generates any demand.
    pub fn has_demand(&self) -> bool {
        self.weight > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demand_builder() {
        let d = DemandPoint::new("B001", 12_500.0)
            .with_name("Barangay 1")
            .with_attribute("city", "Manila");

        assert_eq!(d.id, "B001");
        assert_eq!(d.name, "Barangay 1");
        assert!((d.weight - 12_500.0).abs() < 1e-10);
        assert_eq!(d.attributes.get("city"), Some(&"Manila".to_string()));
        assert!(d.has_demand());
    }

    #[test]
    fn test_zero_weight_has_no_demand() {
        assert!(!DemandPoint::new("B002", 0.0).has_demand());
    }
}
