//! Lateral-pose analysis: dorsal and lumbar curvature.

use nalgebra::center;

use postura_core::{angle_between, LandmarkSet, Result};

use crate::report::{Diagnostics, Region};
use crate::rules::{CurvatureRuleset, DORSAL_TRIPLE, LUMBAR_TRIPLE};

/// Classify the dorsal and lumbar curvature of a laterally framed
/// subject.
///
/// Each region's reference point is the midpoint of its side landmarks
/// in pixel space; the interior angle over that region's triple is
/// mapped through the active ruleset's severity bands.
pub fn analyze_lateral(
    landmarks: &LandmarkSet,
    ruleset: CurvatureRuleset,
    width: u32,
    height: u32,
) -> Result<Diagnostics> {
    let (w, h) = (f64::from(width), f64::from(height));

    let left_shoulder = landmarks.pixel(DORSAL_TRIPLE.left, w, h)?;
    let right_shoulder = landmarks.pixel(DORSAL_TRIPLE.right, w, h)?;
    let left_hip = landmarks.pixel(LUMBAR_TRIPLE.left, w, h)?;
    let right_hip = landmarks.pixel(LUMBAR_TRIPLE.right, w, h)?;

    let dorsal_reference = center(&left_shoulder, &right_shoulder);
    let lumbar_reference = center(&left_hip, &right_hip);

    let dorsal_angle = angle_between(left_shoulder, right_shoulder, dorsal_reference);
    let lumbar_angle = angle_between(left_hip, right_hip, lumbar_reference);
    tracing::debug!(dorsal_angle, lumbar_angle, "lateral curvature angles");

    let mut diagnostics = Diagnostics::new();
    diagnostics.insert(
        Region::Dorsal,
        ruleset.classify_dorsal(dorsal_angle).to_string(),
    );
    diagnostics.insert(
        Region::Lumbar,
        ruleset.classify_lumbar(lumbar_angle).to_string(),
    );
    Ok(diagnostics)
}
