//! Common types used throughout reeds_shepp_motion

use nalgebra::{Rotation2, Vector2};

use crate::common::traits::LocalFramePose;

/// 2D point representation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// 2D pose (position + orientation)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose2D {
    pub x: f64,
    pub y: f64,
    pub yaw: f64,
}

impl Pose2D {
    pub fn new(x: f64, y: f64, yaw: f64) -> Self {
        Self { x, y, yaw }
    }

    pub fn origin() -> Self {
        Self { x: 0.0, y: 0.0, yaw: 0.0 }
    }

    pub fn position(&self) -> Point2D {
        Point2D::new(self.x, self.y)
    }
}

impl LocalFramePose for Pose2D {
    fn translate_local(&self, dx: f64, dy: f64) -> Self {
        let offset = Rotation2::new(self.yaw) * Vector2::new(dx, dy);
        Self {
            x: self.x + offset[0],
            y: self.y + offset[1],
            yaw: self.yaw,
        }
    }

    fn add_heading(&self, delta: f64) -> Self {
        Self {
            x: self.x,
            y: self.y,
            yaw: self.yaw + delta,
        }
    }

    fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.yaw.is_finite()
    }
}

/// Path represented as a sequence of 2D points
#[derive(Debug, Clone)]
pub struct Path2D {
    pub points: Vec<Point2D>,
}

impl Path2D {
    pub fn from_points(points: Vec<Point2D>) -> Self {
        Self { points }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn x_coords(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.x).collect()
    }

    pub fn y_coords(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.y).collect()
    }
}

/// Drop headings from sampled waypoints, keeping their positions in order
pub fn poses_to_path(poses: &[Pose2D]) -> Path2D {
    Path2D::from_points(poses.iter().map(Pose2D::position).collect())
}
