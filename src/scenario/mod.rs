//! Scenario runs and comparison.
//!
//! A scenario is one complete (demand, supply, cost, config) input set.
//! The usual question is "what happens to access if this class of
//! supply is lost": run a baseline and a restricted scenario over the
//! same demand table, then rank the demand points by how much worse
//! they got.
//!
//! # Usage
//!
//! ```
//! use u_access::scenario::{Scenario, ScenarioPair};
//! use u_access::{CostEdge, DemandPoint, SupplyPoint};
//!
//! let all = Scenario::new(
//!     "all hospitals",
//!     vec![DemandPoint::new("B1", 100.0)],
//!     vec![
//!         SupplyPoint::new("H1", 10.0).with_risk_class("High Potential"),
//!         SupplyPoint::new("H2", 10.0),
//!     ],
//!     vec![CostEdge::new("B1", "H1", 300.0), CostEdge::new("B1", "H2", 900.0)],
//! )
//! .with_cutoff(1800.0);
//!
//! let outcome = ScenarioPair::risk_exclusion(all, &["High Potential"]).run().unwrap();
//! let worst = outcome.comparison.most_affected(20);
//! assert_eq!(worst[0].demand_id, "B1");
//! assert!(worst[0].delta > 0.0);
//! ```

mod compare;
mod run;

pub use compare::{compare, ScenarioComparison, ScoreDelta};
pub use run::{PairOutcome, Scenario, ScenarioPair};
