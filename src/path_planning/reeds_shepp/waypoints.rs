//! Waypoint sampling for Reeds-Shepp plans
//!
//! Each action is cut into `max(1, ceil(length * turn_radius))` pieces, so
//! there is roughly one sample per unit of real distance traveled. Curved
//! pieces advance along the exact chord of the arc rather than a tangent
//! (Euler) step, which keeps every sample on the turning circle no matter
//! how coarse the discretization is.
//!
//! Sign conventions in the pose's local frame (x forward, y left):
//! - right turns flip the lateral offset and the heading change
//! - backward gear flips the longitudinal offset and the heading change

use log::{debug, trace};

use super::action::{Action, Gear, Steer};
use super::action_set::ActionSet;
use crate::common::{LocalFramePose, MotionError, MotionResult};

/// Offset applied once per piece, in the local frame of the previous pose
#[derive(Debug, Clone, Copy, PartialEq)]
struct PieceStep {
    dx: f64,
    dy: f64,
    dyaw: f64,
}

/// Upper bound on the number of poses a single sampling call may return
pub const MAX_WAYPOINTS: usize = 10_000_000;

/// Number of pieces an action is sampled into; never zero.
///
/// Fails when `length * turn_radius` is not finite or would need more than
/// [`MAX_WAYPOINTS`] pieces.
pub fn step_count(action: &Action, turn_radius: f64) -> MotionResult<usize> {
    let n = (action.length() * turn_radius).ceil().max(1.0);
    if !n.is_finite() || n > MAX_WAYPOINTS as f64 {
        return Err(MotionError::InvalidParameter(format!(
            "action {} at turn radius {} needs {} samples, limit is {}",
            action, turn_radius, n, MAX_WAYPOINTS
        )));
    }
    Ok(n as usize)
}

fn too_many_waypoints() -> MotionError {
    MotionError::InvalidParameter(format!(
        "plan needs more than {} waypoints",
        MAX_WAYPOINTS
    ))
}

fn piece_step(action: &Action, turn_radius: f64, n: usize) -> PieceStep {
    let n = n as f64;
    let mut step = match action.steer() {
        Steer::Straight => PieceStep {
            dx: action.length() * turn_radius / n,
            dy: 0.0,
            dyaw: 0.0,
        },
        Steer::Left | Steer::Right => {
            let piece_angle = action.length() / n;
            let phi = piece_angle / 2.0;
            let chord = 2.0 * turn_radius * phi.sin();
            PieceStep {
                dx: chord * phi.cos(),
                dy: chord * phi.sin(),
                dyaw: piece_angle,
            }
        }
    };

    if action.steer() == Steer::Right {
        step.dy = -step.dy;
        step.dyaw = -step.dyaw;
    }
    let sign = action.gear().sign();
    step.dx *= sign;
    step.dyaw *= sign;
    step
}

fn validate_turn_radius(turn_radius: f64) -> MotionResult<()> {
    if !turn_radius.is_finite() || turn_radius <= 0.0 {
        return Err(MotionError::InvalidParameter(format!(
            "turn radius must be finite and positive, got {}",
            turn_radius
        )));
    }
    Ok(())
}

impl ActionSet {
    /// Sample the plan into poses, starting with a copy of `start`.
    ///
    /// The result holds `1 + sum(step_count)` poses; neither `start` nor the
    /// plan is modified.
    pub fn get_waypoints<P: LocalFramePose>(&self, start: &P, turn_radius: f64) -> MotionResult<Vec<P>> {
        Ok(self
            .get_directed_waypoints(start, turn_radius)?
            .into_iter()
            .map(|(pose, _)| pose)
            .collect())
    }

    /// Like [`ActionSet::get_waypoints`], pairing every pose with the gear it
    /// was reached in. The start pose takes the gear of the first action
    /// (forward for an empty plan).
    pub fn get_directed_waypoints<P: LocalFramePose>(
        &self,
        start: &P,
        turn_radius: f64,
    ) -> MotionResult<Vec<(P, Gear)>> {
        validate_turn_radius(turn_radius)?;

        let step_counts = self
            .actions()
            .iter()
            .map(|action| step_count(action, turn_radius))
            .collect::<MotionResult<Vec<usize>>>()?;
        let capacity = step_counts
            .iter()
            .try_fold(1usize, |total, &n| total.checked_add(n))
            .filter(|&total| total <= MAX_WAYPOINTS)
            .ok_or_else(too_many_waypoints)?;
        let first_gear = self
            .actions()
            .first()
            .map_or(Gear::Forward, |action| action.gear());

        let mut waypoints = Vec::with_capacity(capacity);
        waypoints.push((start.clone(), first_gear));
        let mut prev = start.clone();

        for (i, (action, &n)) in self.actions().iter().zip(&step_counts).enumerate() {
            let step = piece_step(action, turn_radius, n);
            trace!("Action {} ({}): {} pieces, step {:?}", i, action, n, step);

            for _ in 0..n {
                let next = if action.steer().is_curved() {
                    prev.translate_local(step.dx, step.dy).add_heading(step.dyaw)
                } else {
                    prev.translate_local(step.dx, 0.0)
                };
                if !next.is_finite() {
                    return Err(MotionError::NumericalError(format!(
                        "non-finite waypoint while sampling action {} ({})",
                        i, action
                    )));
                }
                waypoints.push((next.clone(), action.gear()));
                prev = next;
            }
        }

        debug!(
            "Sampled {} waypoints from {} actions at turn radius {}",
            waypoints.len(),
            self.len(),
            turn_radius
        );
        Ok(waypoints)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Pose2D;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn single(steer: Steer, gear: Gear, length: f64) -> ActionSet {
        ActionSet::from_triples(vec![(steer, gear, length)]).unwrap()
    }

    fn last(poses: &[Pose2D]) -> Pose2D {
        *poses.last().unwrap()
    }

    #[test]
    fn test_empty_plan_returns_start() {
        let start = Pose2D::new(1.0, 2.0, 0.3);
        let waypoints = ActionSet::new().get_waypoints(&start, 2.0).unwrap();
        assert_eq!(waypoints, vec![start]);
    }

    #[test]
    fn test_step_count_is_clamped() {
        let short = Action::new(Steer::Left, Gear::Forward, 0.1).unwrap();
        let zero = Action::new(Steer::Straight, Gear::Forward, 0.0).unwrap();
        let long = Action::new(Steer::Straight, Gear::Forward, 2.5).unwrap();
        assert_eq!(step_count(&short, 1.0).unwrap(), 1);
        assert_eq!(step_count(&zero, 5.0).unwrap(), 1);
        assert_eq!(step_count(&long, 2.0).unwrap(), 5);
        assert_eq!(step_count(&long, 1.5).unwrap(), 4);
    }

    #[test]
    fn test_short_segment_yields_finite_pose() {
        let plan = single(Steer::Right, Gear::Forward, 0.2);
        let waypoints = plan.get_waypoints(&Pose2D::origin(), 1.0).unwrap();
        assert_eq!(waypoints.len(), 2);
        assert!(waypoints[1].is_finite());
        assert_abs_diff_eq!(waypoints[1].yaw, -0.2, epsilon = 1e-12);
    }

    #[test]
    fn test_waypoint_count() {
        let plan = ActionSet::from_triples(vec![
            (Steer::Left, Gear::Forward, FRAC_PI_2),
            (Steer::Straight, Gear::Backward, 1.2),
            (Steer::Right, Gear::Backward, 0.05),
        ])
        .unwrap();
        let r = 3.0;
        let expected: usize = 1 + plan.actions().iter().map(|a| step_count(a, r).unwrap()).sum::<usize>();
        let waypoints = plan.get_waypoints(&Pose2D::origin(), r).unwrap();
        assert_eq!(waypoints.len(), expected);
        // ceil(4.71) + ceil(3.6) + ceil(0.15)
        assert_eq!(expected, 1 + 5 + 4 + 1);
    }

    #[test]
    fn test_left_quarter_turn_stays_on_circle() {
        let r = 4.0;
        let start = Pose2D::new(1.0, -2.0, 0.4);
        let plan = single(Steer::Left, Gear::Forward, FRAC_PI_2);
        let waypoints = plan.get_waypoints(&start, r).unwrap();

        let end = last(&waypoints);
        assert_abs_diff_eq!(end.yaw, start.yaw + FRAC_PI_2, epsilon = 1e-9);

        // Left-turn center sits r to the left of the start heading
        let cx = start.x - r * start.yaw.sin();
        let cy = start.y + r * start.yaw.cos();
        for pose in &waypoints {
            let d = ((pose.x - cx).powi(2) + (pose.y - cy).powi(2)).sqrt();
            assert_abs_diff_eq!(d, r, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_right_turn_mirrors_left() {
        let r = 2.0;
        let left = single(Steer::Left, Gear::Forward, 1.0)
            .get_waypoints(&Pose2D::origin(), r)
            .unwrap();
        let right = single(Steer::Right, Gear::Forward, 1.0)
            .get_waypoints(&Pose2D::origin(), r)
            .unwrap();
        let (l, rt) = (last(&left), last(&right));
        assert_abs_diff_eq!(l.x, rt.x, epsilon = 1e-12);
        assert_abs_diff_eq!(l.y, -rt.y, epsilon = 1e-12);
        assert_abs_diff_eq!(l.yaw, -rt.yaw, epsilon = 1e-12);
    }

    #[test]
    fn test_straight_forward() {
        let start = Pose2D::new(2.0, 1.0, PI / 3.0);
        let (length, r) = (2.5, 1.5);
        let waypoints = single(Steer::Straight, Gear::Forward, length)
            .get_waypoints(&start, r)
            .unwrap();
        let end = last(&waypoints);
        assert_abs_diff_eq!(end.x, start.x + length * r * start.yaw.cos(), epsilon = 1e-9);
        assert_abs_diff_eq!(end.y, start.y + length * r * start.yaw.sin(), epsilon = 1e-9);
        assert_eq!(end.yaw, start.yaw);
    }

    #[test]
    fn test_backward_mirrors_forward() {
        let r = 3.0;
        for steer in [Steer::Left, Steer::Straight, Steer::Right] {
            let fwd = last(
                &single(steer, Gear::Forward, 1.3)
                    .get_waypoints(&Pose2D::origin(), r)
                    .unwrap(),
            );
            let bwd = last(
                &single(steer, Gear::Backward, 1.3)
                    .get_waypoints(&Pose2D::origin(), r)
                    .unwrap(),
            );
            assert_abs_diff_eq!(fwd.x, -bwd.x, epsilon = 1e-9);
            assert_abs_diff_eq!(fwd.y, bwd.y, epsilon = 1e-9);
            assert_abs_diff_eq!(fwd.yaw, -bwd.yaw, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_heading_continuity() {
        let plan = single(Steer::Left, Gear::Backward, PI);
        let r = 5.0;
        let waypoints = plan.get_waypoints(&Pose2D::origin(), r).unwrap();
        let piece = PI / step_count(&plan.actions()[0], r).unwrap() as f64;
        for w in waypoints.windows(2) {
            assert_abs_diff_eq!(w[1].yaw - w[0].yaw, -piece, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_deterministic_and_inputs_untouched() {
        let plan = ActionSet::from_triples(vec![
            (Steer::Right, Gear::Forward, 0.8),
            (Steer::Straight, Gear::Forward, 2.0),
            (Steer::Left, Gear::Backward, 1.1),
        ])
        .unwrap();
        let before = plan.clone();
        let start = Pose2D::new(-1.0, 4.0, -0.7);

        let a = plan.get_waypoints(&start, 2.2).unwrap();
        let b = plan.get_waypoints(&start, 2.2).unwrap();
        assert_eq!(a, b);
        assert_eq!(a[0], start);
        assert_eq!(plan, before);
        assert_eq!(start, Pose2D::new(-1.0, 4.0, -0.7));
    }

    #[test]
    fn test_invalid_turn_radius() {
        let plan = single(Steer::Left, Gear::Forward, 1.0);
        for r in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                plan.get_waypoints(&Pose2D::origin(), r),
                Err(MotionError::InvalidParameter(_))
            ));
        }
        // Also rejected for an empty plan
        assert!(ActionSet::new().get_waypoints(&Pose2D::origin(), 0.0).is_err());
    }

    #[test]
    fn test_huge_segment_is_rejected() {
        let plan = single(Steer::Straight, Gear::Forward, 1e300);
        assert!(matches!(
            plan.get_waypoints(&Pose2D::origin(), 1e10),
            Err(MotionError::InvalidParameter(_))
        ));

        // Finite but past the per-call limit
        let plan = single(Steer::Left, Gear::Forward, MAX_WAYPOINTS as f64);
        assert!(plan.get_waypoints(&Pose2D::origin(), 2.0).is_err());
    }

    #[test]
    fn test_total_waypoints_are_capped() {
        // Each action fits on its own, together they exceed the limit
        let half = (MAX_WAYPOINTS / 2) as f64;
        let plan = ActionSet::from_triples(vec![
            (Steer::Straight, Gear::Forward, half),
            (Steer::Straight, Gear::Backward, half),
        ])
        .unwrap();
        assert!(step_count(&plan.actions()[0], 1.0).is_ok());
        assert!(matches!(
            plan.get_waypoints(&Pose2D::origin(), 1.0),
            Err(MotionError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_directed_waypoints_carry_gear() {
        let plan = ActionSet::from_triples(vec![
            (Steer::Straight, Gear::Backward, 1.0),
            (Steer::Left, Gear::Forward, 1.0),
        ])
        .unwrap();
        let directed = plan.get_directed_waypoints(&Pose2D::origin(), 1.0).unwrap();
        let gears: Vec<Gear> = directed.iter().map(|(_, g)| *g).collect();
        assert_eq!(gears, vec![Gear::Backward, Gear::Backward, Gear::Forward]);

        let poses = plan.get_waypoints(&Pose2D::origin(), 1.0).unwrap();
        assert_eq!(poses.len(), directed.len());
    }
}
