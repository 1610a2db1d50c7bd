//! Frontal-pose analysis: shoulder and knee levelness.

use postura_core::{horizontal_deviation, Landmark, LandmarkSet, Result};

use crate::report::{Diagnostics, Region};
use crate::rules::level_label;

/// Measure how level the shoulder and knee pairs sit for a frontally
/// framed subject.
pub fn analyze_frontal(
    landmarks: &LandmarkSet,
    width: u32,
    height: u32,
) -> Result<Diagnostics> {
    let (w, h) = (f64::from(width), f64::from(height));

    let left_shoulder = landmarks.pixel(Landmark::LeftShoulder, w, h)?;
    let right_shoulder = landmarks.pixel(Landmark::RightShoulder, w, h)?;
    let left_knee = landmarks.pixel(Landmark::LeftKnee, w, h)?;
    let right_knee = landmarks.pixel(Landmark::RightKnee, w, h)?;

    let shoulder_deviation = horizontal_deviation(left_shoulder, right_shoulder);
    let knee_deviation = horizontal_deviation(left_knee, right_knee);
    tracing::debug!(shoulder_deviation, knee_deviation, "frontal deviations");

    let mut diagnostics = Diagnostics::new();
    diagnostics.insert(Region::Shoulders, level_label(shoulder_deviation));
    diagnostics.insert(Region::Knees, level_label(knee_deviation));
    Ok(diagnostics)
}
