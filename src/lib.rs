//! ReedsSheppMotion - cost evaluation and waypoint sampling for Reeds-Shepp plans
//!
//! This crate takes the ordered segment list a Reeds-Shepp solver produces,
//! ranks candidate plans by a reverse-aware cost, and samples the chosen
//! plan into oriented poses for a path tracking controller.

// Core modules
pub mod common;
pub mod utils;

// Algorithm modules
pub mod path_planning;

// Re-export common types for convenience
pub use common::{Point2D, Pose2D, Path2D, LocalFramePose};
pub use common::{MotionError, MotionResult};
pub use path_planning::reeds_shepp::{Action, ActionSet, CostWeights, Gear, PathWord, Steer};
