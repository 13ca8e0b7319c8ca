//! Primitive motions of a Reeds-Shepp plan
//!
//! An [`Action`] is one constant-steer, constant-gear segment. Its length is
//! normalized by the turn radius: swept angle in radians for a curve,
//! distance / radius for a straight.

use std::fmt;

use crate::common::{MotionError, MotionResult};

/// Direction of travel along a segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gear {
    Forward,
    Backward,
}

impl Gear {
    /// +1 for forward, -1 for backward
    pub fn sign(self) -> f64 {
        match self {
            Gear::Forward => 1.0,
            Gear::Backward => -1.0,
        }
    }

    /// Opposite gear (timeflip)
    pub fn reversed(self) -> Self {
        match self {
            Gear::Forward => Gear::Backward,
            Gear::Backward => Gear::Forward,
        }
    }
}

impl fmt::Display for Gear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gear::Forward => write!(f, "forward"),
            Gear::Backward => write!(f, "backward"),
        }
    }
}

/// Curvature sign of a segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Steer {
    Left,
    Straight,
    Right,
}

impl Steer {
    /// Mirror the steering side (reflect); straight stays straight
    pub fn reflected(self) -> Self {
        match self {
            Steer::Left => Steer::Right,
            Steer::Right => Steer::Left,
            Steer::Straight => Steer::Straight,
        }
    }

    pub fn is_curved(self) -> bool {
        self != Steer::Straight
    }
}

impl fmt::Display for Steer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Steer::Left => write!(f, "left"),
            Steer::Straight => write!(f, "straight"),
            Steer::Right => write!(f, "right"),
        }
    }
}

/// One segment of a motion plan
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Action {
    steer: Steer,
    gear: Gear,
    length: f64,
}

impl Action {
    /// Create an action; `length` must be finite and non-negative.
    pub fn new(steer: Steer, gear: Gear, length: f64) -> MotionResult<Self> {
        if !length.is_finite() || length < 0.0 {
            return Err(MotionError::InvalidParameter(format!(
                "action length must be finite and non-negative, got {}",
                length
            )));
        }
        Ok(Self { steer, gear, length })
    }

    pub fn steer(&self) -> Steer {
        self.steer
    }

    pub fn gear(&self) -> Gear {
        self.gear
    }

    /// Normalized length (radians for curves, radius units for straights)
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Distance actually traveled at the given turn radius
    pub fn real_length(&self, turn_radius: f64) -> f64 {
        self.length * turn_radius
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {:.1}", self.steer, self.gear, self.length)
    }
}
