//! Common traits defining the pose capabilities the motion core relies on

/// A 2D oriented pose that can be moved in its own heading-aligned frame.
///
/// The waypoint sampler never builds poses from scratch; every sample is
/// derived from the caller's start pose through these two operations
/// (plus `Clone` for the initial copy).
pub trait LocalFramePose: Clone {
    /// New pose displaced by `(dx, dy)` expressed in this pose's local frame
    /// (x along the heading, y to the left). Heading is unchanged.
    fn translate_local(&self, dx: f64, dy: f64) -> Self;

    /// New pose with heading incremented by `delta` radians.
    fn add_heading(&self, delta: f64) -> Self;

    /// Whether every component is finite.
    fn is_finite(&self) -> bool;
}
