//! Ordered motion plan built by a Reeds-Shepp solver

use std::fmt;

use itertools::Itertools;

use super::action::{Action, Gear, Steer};
use crate::common::{MotionError, MotionResult};

/// An ordered, append-only list of actions with its running total length.
///
/// `length` is the sum of all action lengths, or `f64::INFINITY` when the
/// plan is marked infeasible. Appending to an infeasible plan keeps it
/// infinite.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionSet {
    actions: Vec<Action>,
    length: f64,
}

impl ActionSet {
    /// Empty plan with zero length
    pub fn new() -> Self {
        Self {
            actions: Vec::new(),
            length: 0.0,
        }
    }

    /// Empty plan starting from `initial_length`.
    ///
    /// Only `0.0` (an empty plan) and `f64::INFINITY` (the "no valid plan"
    /// sentinel) are accepted, so `length` always equals the sum of the
    /// actions or stays infinite.
    pub fn with_length(initial_length: f64) -> MotionResult<Self> {
        if initial_length != 0.0 && initial_length != f64::INFINITY {
            return Err(MotionError::InvalidParameter(format!(
                "initial plan length must be 0 or infinity, got {}",
                initial_length
            )));
        }
        Ok(Self {
            actions: Vec::new(),
            length: initial_length,
        })
    }

    /// Plan marked as infeasible (infinite length)
    pub fn infeasible() -> Self {
        Self {
            actions: Vec::new(),
            length: f64::INFINITY,
        }
    }

    /// Build a plan from `(steer, gear, length)` triples in execution order
    pub fn from_triples<I>(triples: I) -> MotionResult<Self>
    where
        I: IntoIterator<Item = (Steer, Gear, f64)>,
    {
        let mut set = Self::new();
        for (steer, gear, length) in triples {
            set.add_action(steer, gear, length)?;
        }
        Ok(set)
    }

    /// Append an action and grow the running length.
    pub fn add_action(&mut self, steer: Steer, gear: Gear, length: f64) -> MotionResult<()> {
        let action = Action::new(steer, gear, length)?;
        self.push(action);
        Ok(())
    }

    /// Append an already validated action
    pub fn push(&mut self, action: Action) {
        self.length += action.length();
        self.actions.push(action);
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// Total normalized length, or infinity for an infeasible plan
    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// A plan is usable when it has actions and a finite length
    pub fn is_feasible(&self) -> bool {
        !self.actions.is_empty() && self.length.is_finite()
    }

    /// Number of gear changes between consecutive actions
    pub fn gear_switches(&self) -> usize {
        self.actions
            .iter()
            .tuple_windows()
            .filter(|(a, b)| a.gear() != b.gear())
            .count()
    }
}

impl Default for ActionSet {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ActionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.actions.iter().join(" | "))
    }
}
