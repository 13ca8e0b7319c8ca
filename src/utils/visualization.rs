//! Visualization utilities for reeds_shepp_motion
//!
//! Draws sampled waypoints with gnuplot.

use gnuplot::{AutoOption, AxesCommon, Caption, Color, Figure, LineWidth, PointSize, PointSymbol};

use crate::common::{MotionError, MotionResult, Path2D, Pose2D};
use crate::path_planning::reeds_shepp::Gear;

/// Color palette for consistent styling
pub mod colors {
    pub const RED: &str = "#FF0000";
    pub const GREEN: &str = "#00FF00";
    pub const BLUE: &str = "#0000FF";
    pub const ORANGE: &str = "#FFA500";
    pub const GRAY: &str = "#808080";

    // Semantic colors
    pub const START: &str = GREEN;
    pub const GOAL: &str = BLUE;
    pub const PATH: &str = RED;
    pub const FORWARD: &str = "#35C788";
    pub const BACKWARD: &str = ORANGE;
    pub const HEADING: &str = GRAY;
}

/// Style for path rendering
#[derive(Debug, Clone)]
pub struct PathStyle {
    pub color: String,
    pub line_width: f64,
    pub caption: String,
}

impl PathStyle {
    pub fn new(color: &str, caption: &str) -> Self {
        Self {
            color: color.to_string(),
            line_width: 2.0,
            caption: caption.to_string(),
        }
    }

    pub fn with_line_width(mut self, width: f64) -> Self {
        self.line_width = width;
        self
    }
}

impl Default for PathStyle {
    fn default() -> Self {
        Self {
            color: colors::PATH.to_string(),
            line_width: 2.0,
            caption: "Path".to_string(),
        }
    }
}

/// Main visualizer struct
pub struct Visualizer {
    figure: Figure,
    title: String,
    x_label: String,
    y_label: String,
    aspect_ratio: Option<f64>,
}

impl Visualizer {
    /// Create a new visualizer
    pub fn new() -> Self {
        Self {
            figure: Figure::new(),
            title: String::new(),
            x_label: "X [m]".to_string(),
            y_label: "Y [m]".to_string(),
            aspect_ratio: Some(1.0),
        }
    }

    /// Set the plot title
    pub fn set_title(&mut self, title: &str) -> &mut Self {
        self.title = title.to_string();
        self
    }

    /// Set aspect ratio (None for auto)
    pub fn set_aspect_ratio(&mut self, ratio: Option<f64>) -> &mut Self {
        self.aspect_ratio = ratio;
        self
    }

    /// Plot a path
    pub fn plot_path(&mut self, path: &Path2D, style: &PathStyle) -> &mut Self {
        if path.is_empty() {
            return self;
        }
        self.figure.axes2d()
            .lines(&path.x_coords(), &path.y_coords(), &[
                Caption(&style.caption),
                Color(&style.color),
                LineWidth(style.line_width),
            ]);
        self
    }

    /// Plot directed waypoints, split into forward and backward samples,
    /// with a short heading tick on each
    pub fn plot_waypoints(&mut self, waypoints: &[(Pose2D, Gear)], tick: f64) -> &mut Self {
        for (gear, caption, color) in [
            (Gear::Forward, "Forward", colors::FORWARD),
            (Gear::Backward, "Backward", colors::BACKWARD),
        ] {
            let (x, y): (Vec<f64>, Vec<f64>) = waypoints
                .iter()
                .filter(|(_, g)| *g == gear)
                .map(|(p, _)| (p.x, p.y))
                .unzip();
            if x.is_empty() {
                continue;
            }
            self.figure.axes2d()
                .points(&x, &y, &[
                    Caption(caption),
                    Color(color),
                    PointSymbol('O'),
                    PointSize(0.8),
                ]);
        }

        for (pose, _) in waypoints {
            self.plot_heading(pose, tick, colors::HEADING);
        }
        self
    }

    /// Plot start pose with its heading
    pub fn plot_start(&mut self, pose: &Pose2D) -> &mut Self {
        self.plot_marked_pose(pose, "Start", colors::START)
    }

    /// Plot goal pose with its heading
    pub fn plot_goal(&mut self, pose: &Pose2D) -> &mut Self {
        self.plot_marked_pose(pose, "Goal", colors::GOAL)
    }

    fn plot_marked_pose(&mut self, pose: &Pose2D, caption: &str, color: &str) -> &mut Self {
        self.figure.axes2d()
            .points(&[pose.x], &[pose.y], &[
                Caption(caption),
                Color(color),
                PointSymbol('O'),
                PointSize(1.5),
            ]);
        self.plot_heading(pose, 0.5, color)
    }

    // Direction line (arrow substitute)
    fn plot_heading(&mut self, pose: &Pose2D, len: f64, color: &str) -> &mut Self {
        let end_x = pose.x + len * pose.yaw.cos();
        let end_y = pose.y + len * pose.yaw.sin();

        self.figure.axes2d()
            .lines(&[pose.x, end_x], &[pose.y, end_y], &[
                Color(color),
                LineWidth(1.0),
            ]);
        self
    }

    /// Finalize and show the plot
    pub fn show(&mut self) -> MotionResult<()> {
        self.apply_settings();
        self.figure
            .show()
            .map(|_| ())
            .map_err(|e| MotionError::VisualizationError(e.to_string()))
    }

    /// Save plot to PNG file
    pub fn save_png(&mut self, path: &str, width: u32, height: u32) -> MotionResult<()> {
        self.apply_settings();
        self.figure
            .save_to_png(path, width, height)
            .map_err(|e| MotionError::VisualizationError(e.to_string()))
    }

    fn apply_settings(&mut self) {
        let axes = self.figure.axes2d();

        if !self.title.is_empty() {
            axes.set_title(&self.title, &[]);
        }
        axes.set_x_label(&self.x_label, &[]);
        axes.set_y_label(&self.y_label, &[]);

        if let Some(ratio) = self.aspect_ratio {
            axes.set_aspect_ratio(AutoOption::Fix(ratio));
        }
    }
}

impl Default for Visualizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visualizer_creation() {
        let vis = Visualizer::new();
        assert!(vis.aspect_ratio.is_some());
        assert!(vis.title.is_empty());
    }

    #[test]
    fn test_path_style() {
        let style = PathStyle::new(colors::RED, "Test Path")
            .with_line_width(3.0);
        assert_eq!(style.line_width, 3.0);
        assert_eq!(style.color, colors::RED);
    }

    #[test]
    fn test_plot_waypoints_builds_without_output() {
        let waypoints = vec![
            (Pose2D::origin(), Gear::Forward),
            (Pose2D::new(1.0, 0.0, 0.0), Gear::Forward),
            (Pose2D::new(0.5, 0.0, 0.0), Gear::Backward),
        ];
        let mut vis = Visualizer::new();
        vis.set_title("Waypoints")
            .plot_start(&waypoints[0].0)
            .plot_waypoints(&waypoints, 0.2);
        assert_eq!(vis.title, "Waypoints");
    }
}
