//! Spatial accessibility scoring for the U-Engine ecosystem.
//!
//! Scores how well each demand location (a population area) can reach
//! finite-capacity supply (hospitals, beds) given a travel-cost table,
//! blending travel cost with congestion at the supply sites.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `DemandPoint`, `SupplyPoint`, `CostEdge`,
//!   `AccessibilityResult`, `AccessTable`
//! - **`validation`**: Input integrity checks (duplicate IDs, dangling
//!   edges, negative or non-finite values, cutoff)
//! - **`raam`**: The two-pass scoring engine and its configuration
//! - **`scenario`**: Risk-class scenarios, paired runs, and score deltas
//! - **`summary`**: Score distribution and per-area reachable supply
//!
//! # Architecture
//!
//! Scoring is a pure, synchronous computation: no I/O, no shared state.
//! Loading tables (CSV, GeoJSON) and rendering results belong to the
//! caller. Independent runs may execute concurrently.
//!
//! # References
//!
//! - Saxon & Snow (2020), "A Rational Agent Model for the Spatial
//!   Accessibility of Primary Health Care"
//! - Luo & Wang (2003), "Measures of Spatial Accessibility to Health Care
//!   in a GIS Environment"

pub mod error;
pub mod models;
pub mod raam;
pub mod scenario;
pub mod summary;
pub mod validation;

pub use error::{AccessError, Result, Table};
pub use models::{AccessTable, AccessibilityResult, CostEdge, DemandPoint, SupplyPoint};
pub use raam::{compute_access, AccessConfig, Aggregation, RaamEngine};
