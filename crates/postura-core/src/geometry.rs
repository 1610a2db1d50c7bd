//! Planar angle primitives for posture measurements.

use nalgebra::Point2;

/// Rays shorter than this are degenerate; the angle collapses to 0.
pub const RAY_EPSILON: f64 = 1e-10;

/// Smallest horizontal run substituted when a segment is near-vertical.
pub const MIN_HORIZONTAL_RUN: f64 = 1e-5;

/// Hard bound on the compressed tilt measure, degrees.
pub const MAX_LEVEL_DEVIATION_DEG: f64 = 15.0;

/// Interior angle at vertex `p2` formed by the rays toward `p1` and
/// `p3`, in degrees within `[0, 180]`.
///
/// Computed from the difference of the two rays' polar angles; values
/// over 180° are reflected. A ray shorter than [`RAY_EPSILON`] yields 0.
pub fn angle_between(p1: Point2<f64>, p2: Point2<f64>, p3: Point2<f64>) -> f64 {
    let r1 = p1 - p2;
    let r2 = p3 - p2;

    if r1.norm() < RAY_EPSILON || r2.norm() < RAY_EPSILON {
        return 0.0;
    }

    let mut angle = (r2.y.atan2(r2.x) - r1.y.atan2(r1.x)).to_degrees().abs();
    if angle > 180.0 {
        angle = 360.0 - angle;
    }
    angle
}

/// Tilt of the segment `p1 → p2` against the horizontal axis, degrees.
///
/// The raw angle is reduced modulo 180 with its sign preserved, then
/// hard-clamped to `[-15, 15]`. This is a compressed measure of tilt,
/// not a true unbounded angle; callers must not assume values outside
/// ±[`MAX_LEVEL_DEVIATION_DEG`] are representable. A horizontal run
/// smaller than [`MIN_HORIZONTAL_RUN`] is floored to that magnitude so
/// near-vertical segments stay finite.
pub fn horizontal_deviation(p1: Point2<f64>, p2: Point2<f64>) -> f64 {
    let dy = p2.y - p1.y;
    let mut dx = p2.x - p1.x;

    if dx.abs() < MIN_HORIZONTAL_RUN {
        dx = if dx < 0.0 {
            -MIN_HORIZONTAL_RUN
        } else {
            MIN_HORIZONTAL_RUN
        };
    }

    let angle = dy.atan2(dx).to_degrees();
    (angle % 180.0).clamp(-MAX_LEVEL_DEVIATION_DEG, MAX_LEVEL_DEVIATION_DEG)
}
