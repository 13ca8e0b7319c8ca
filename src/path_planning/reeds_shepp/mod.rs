//! Reeds-Shepp Motion Plans
//!
//! Turns the ordered segment list produced by a Reeds-Shepp solver into
//! something a vehicle can use: a scalar cost for ranking candidate plans,
//! and a dense sequence of oriented poses for a tracking controller.
//!
//! # Components
//!
//! - `action`: primitive motions (`Steer`, `Gear`, `Action`)
//! - `action_set`: the ordered plan and its running length
//! - `cost`: reverse- and gear-switch-aware cost model
//! - `waypoints`: exact arc/chord waypoint sampling
//! - `path_word`: the 48 canonical path words shared with the solver
//!
//! # Example
//!
//! ```
//! use reeds_shepp_motion::path_planning::reeds_shepp::{ActionSet, CostWeights, Gear, Steer};
//! use reeds_shepp_motion::common::Pose2D;
//!
//! let mut plan = ActionSet::new();
//! plan.add_action(Steer::Left, Gear::Forward, std::f64::consts::FRAC_PI_2).unwrap();
//! plan.add_action(Steer::Straight, Gear::Backward, 1.0).unwrap();
//!
//! let cost = plan.cost(&CostWeights::new(1.0, 2.0, 0.5)).unwrap();
//! assert!(cost.is_finite());
//!
//! let waypoints = plan.get_waypoints(&Pose2D::origin(), 2.0).unwrap();
//! assert_eq!(waypoints.len(), 1 + 4 + 2);
//! ```
//!
//! # References
//!
//! - J. A. Reeds and L. A. Shepp, "Optimal paths for a car that goes both
//!   forwards and backwards", Pacific Journal of Mathematics, 1990
//! - PythonRobotics Reeds-Shepp path planner by Atsushi Sakai

pub mod action;
pub mod action_set;
pub mod cost;
pub mod path_word;
pub mod waypoints;

// Re-exports
pub use action::{Action, Gear, Steer};
pub use action_set::ActionSet;
pub use cost::{cheapest, CostWeights};
pub use path_word::{PathFamily, PathWord};
pub use waypoints::{step_count, MAX_WAYPOINTS};
