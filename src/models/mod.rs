//! Accessibility domain models.
//!
//! Provides the input tables (demand, supply, cost) and the output table
//! of a scoring run. Domain-agnostic within spatial accessibility:
//! applicable to hospitals, schools, shelters, or any finite-capacity
//! facility network.
//!
//! # Domain Mappings
//!
//! | u-access | Healthcare | Education | Disaster Response |
//! |----------|------------|-----------|-------------------|
//! | DemandPoint | Barangay / Census Tract | School District | Evacuation Zone |
//! | SupplyPoint | Hospital (beds) | School (seats) | Shelter (cots) |
//! | CostEdge | Drive Time | Walk Time | Travel Time |
//! | AccessTable | Access Map | Enrollment Pressure | Shelter Coverage |

mod access;
mod cost;
mod demand;
mod supply;

pub use access::{AccessTable, AccessibilityResult};
pub use cost::{minutes_to_seconds, CostEdge, SECONDS_PER_MINUTE};
pub use demand::DemandPoint;
pub use supply::SupplyPoint;
