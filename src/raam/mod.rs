//! Rational Agent Access Model (RAAM) style scoring.
//!
//! Blends travel cost with supply congestion into one score per demand
//! point. Each demand point weighs every reachable supply point by the
//! share of that site's competing demand it contributes, and the cost of
//! reaching it per unit of capacity.
//!
//! # Score Convention
//! **Lower score = better access.** Unreachable demand points carry a
//! sentinel (`f64::INFINITY` unless configured) and are flagged as such,
//! so they rank strictly after every reachable point.
//!
//! # Usage
//!
//! ```
//! use u_access::raam::{AccessConfig, RaamEngine};
//! use u_access::{CostEdge, DemandPoint, SupplyPoint};
//!
//! let engine = RaamEngine::new(AccessConfig::new().with_cutoff_minutes(5.0));
//! let table = engine
//!     .compute(
//!         &[DemandPoint::new("A", 100.0)],
//!         &[SupplyPoint::new("X", 10.0)],
//!         &[CostEdge::new("A", "X", 300.0)],
//!     )
//!     .unwrap();
//! assert!((table.score("A").unwrap() - 30.0).abs() < 1e-9);
//! ```
//!
//! # References
//!
//! - Saxon & Snow (2020), "A Rational Agent Model for the Spatial
//!   Accessibility of Primary Health Care"
//! - Luo & Wang (2003), "Measures of Spatial Accessibility to Health Care
//!   in a GIS Environment" (2SFCA)

mod config;
mod engine;

pub use config::{AccessConfig, Aggregation};
pub use engine::{compute_access, RaamEngine};
