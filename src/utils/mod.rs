//! Utility modules for reeds_shepp_motion

pub mod visualization;

pub use visualization::{Visualizer, PathStyle, colors};
