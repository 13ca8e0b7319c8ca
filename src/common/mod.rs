//! Common types, traits, and error definitions for reeds_shepp_motion
//!
//! This module provides the pose types and error handling shared by the
//! motion plan core and the visualization helpers.

pub mod types;
pub mod traits;
pub mod error;

pub use types::*;
pub use traits::*;
pub use error::*;
