//! Cost model for ranking candidate Reeds-Shepp plans
//!
//! Reversing is weighted by a multiplier and every change of gear adds a
//! fixed penalty, so a planner comparing candidate plans prefers the one a
//! vehicle can actually drive more cheaply, not just the shortest one.
//! Infeasible plans cost `f64::INFINITY` so they always rank last.

use log::debug;
use ordered_float::OrderedFloat;

use super::action::Gear;
use super::action_set::ActionSet;
use crate::common::{MotionError, MotionResult};

/// Weights applied when costing a plan
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostWeights {
    /// Cost per unit of normalized length (typically the turn radius or 1)
    pub unit: f64,
    /// Factor applied to backward segments (>= 1)
    pub reverse_cost_multiplier: f64,
    /// Fixed penalty for each change of gear between consecutive actions
    pub gear_switch_cost: f64,
}

impl Default for CostWeights {
    fn default() -> Self {
        Self {
            unit: 1.0,
            reverse_cost_multiplier: 1.0,
            gear_switch_cost: 0.0,
        }
    }
}

impl CostWeights {
    pub fn new(unit: f64, reverse_cost_multiplier: f64, gear_switch_cost: f64) -> Self {
        Self {
            unit,
            reverse_cost_multiplier,
            gear_switch_cost,
        }
    }

    pub fn with_unit(mut self, unit: f64) -> Self {
        self.unit = unit;
        self
    }

    pub fn with_reverse_cost_multiplier(mut self, multiplier: f64) -> Self {
        self.reverse_cost_multiplier = multiplier;
        self
    }

    pub fn with_gear_switch_cost(mut self, cost: f64) -> Self {
        self.gear_switch_cost = cost;
        self
    }

    /// No reverse or switching asymmetry: cost is plain length times unit
    pub fn is_symmetric(&self) -> bool {
        self.reverse_cost_multiplier == 1.0 && self.gear_switch_cost == 0.0
    }

    /// Check the weights are usable
    pub fn validate(&self) -> MotionResult<()> {
        if !self.unit.is_finite() || self.unit <= 0.0 {
            return Err(MotionError::InvalidParameter(format!(
                "cost unit must be finite and positive, got {}",
                self.unit
            )));
        }
        if !self.reverse_cost_multiplier.is_finite() || self.reverse_cost_multiplier < 1.0 {
            return Err(MotionError::InvalidParameter(format!(
                "reverse cost multiplier must be finite and >= 1, got {}",
                self.reverse_cost_multiplier
            )));
        }
        if !self.gear_switch_cost.is_finite() || self.gear_switch_cost < 0.0 {
            return Err(MotionError::InvalidParameter(format!(
                "gear switch cost must be finite and non-negative, got {}",
                self.gear_switch_cost
            )));
        }
        Ok(())
    }
}

impl ActionSet {
    /// Cost of this plan under `weights`.
    ///
    /// Returns `Ok(f64::INFINITY)` for an empty or infeasible plan; invalid
    /// weights are an error.
    pub fn cost(&self, weights: &CostWeights) -> MotionResult<f64> {
        weights.validate()?;

        if !self.is_feasible() {
            return Ok(f64::INFINITY);
        }

        let cost = if weights.is_symmetric() {
            self.length() * weights.unit
        } else {
            self.weighted_cost(weights)
        };
        debug!(
            "Plan cost {:.3} over {} actions ({} gear switches)",
            cost,
            self.len(),
            self.gear_switches()
        );
        Ok(cost)
    }

    /// Cost with individually supplied weights, see [`ActionSet::cost`]
    pub fn calculate_cost(
        &self,
        unit: f64,
        reverse_cost_multiplier: f64,
        gear_switch_cost: f64,
    ) -> MotionResult<f64> {
        self.cost(&CostWeights::new(unit, reverse_cost_multiplier, gear_switch_cost))
    }

    // Per-action fold. Lengths are summed before scaling by `unit` so that
    // with symmetric weights this agrees bit for bit with the fast path.
    fn weighted_cost(&self, weights: &CostWeights) -> f64 {
        let mut previous_gear = match self.actions().first() {
            Some(action) => action.gear(),
            None => return f64::INFINITY,
        };

        let mut weighted_length = 0.0;
        let mut switch_penalty = 0.0;
        for action in self.actions() {
            let mut length = action.length();
            if action.gear() == Gear::Backward {
                length *= weights.reverse_cost_multiplier;
            }
            if action.gear() != previous_gear {
                switch_penalty += weights.gear_switch_cost;
            }
            previous_gear = action.gear();
            weighted_length += length;
        }

        weighted_length * weights.unit + switch_penalty
    }
}

/// Cheapest feasible plan among `plans`, or `None` when every plan is
/// infeasible.
pub fn cheapest<'a>(plans: &'a [ActionSet], weights: &CostWeights) -> MotionResult<Option<&'a ActionSet>> {
    let costed = plans
        .iter()
        .map(|plan| plan.cost(weights).map(|cost| (plan, cost)))
        .collect::<MotionResult<Vec<_>>>()?;

    Ok(costed
        .into_iter()
        .filter(|(_, cost)| cost.is_finite())
        .min_by_key(|(_, cost)| OrderedFloat(*cost))
        .map(|(plan, _)| plan))
}
