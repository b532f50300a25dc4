//! Supply point model.
//!
//! Supply points provide a finite-capacity resource: hospitals (beds),
//! clinics, shelters. Each may carry a hazard classification used to
//! build "what if this class is lost" scenarios, and a service level
//! used when summarizing what remains reachable.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A location that provides finite capacity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplyPoint {
    /// Unique supply identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Available capacity (e.g., bed count). Must be finite and >= 0.
    pub capacity: f64,
    /// Hazard class of the site (e.g., "High Potential" liquefaction).
    pub risk_class: Option<String>,
    /// Service tier (e.g., "Level 3").
    pub service_level: Option<String>,
    /// Domain-specific metadata.
    pub attributes: HashMap<String, String>,
}

impl SupplyPoint {
    /// Creates a new supply point with the given capacity.
    pub fn new(id: impl Into<String>, capacity: f64) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            capacity,
            risk_class: None,
            service_level: None,
            attributes: HashMap::new(),
        }
    }

    /// Sets the supply point name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the hazard class.
    pub fn with_risk_class(mut self, class: impl Into<String>) -> Self {
        self.risk_class = Some(class.into());
        self
    }

    /// Sets the service tier.
    pub fn with_service_level(mut self, level: impl Into<String>) -> Self {
        self.service_level = Some(level.into());
        self
    }

    /// Adds a domain-specific attribute.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Whether the site's hazard class is one of `classes`.
    ///
    /// Sites without a class are never matched.
    pub fn in_risk_class<S: AsRef<str>>(&self, classes: &[S]) -> bool {
        match &self.risk_class {
            None => false,
            Some(class) => classes.iter().any(|c| c.as_ref() == class),
        }
    }

    /// Whether this point can absorb any demand.
    #[inline]
    pub fn has_capacity(&self) -> bool {
        self.capacity > 0.0
    }
}
