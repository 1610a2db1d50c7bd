//! Posterior-pose analysis: hip and ankle levelness plus spinal
//! alignment.

use nalgebra::Point2;

use postura_core::{horizontal_deviation, Landmark, LandmarkSet, Result};

use crate::report::{Diagnostics, Region};
use crate::rules::{correctness, level_label};

/// Measure hip and ankle levelness and spinal alignment for a subject
/// framed from behind.
///
/// Hip and ankle labels carry a correctness suffix against
/// `tolerance_deg`. The spinal check measures the shoulder pair with x
/// left in normalized units and y scaled to pixels, and applies the
/// same tolerance.
pub fn analyze_posterior(
    landmarks: &LandmarkSet,
    tolerance_deg: f64,
    width: u32,
    height: u32,
) -> Result<Diagnostics> {
    let (w, h) = (f64::from(width), f64::from(height));

    let left_hip = landmarks.pixel(Landmark::LeftHip, w, h)?;
    let right_hip = landmarks.pixel(Landmark::RightHip, w, h)?;
    let left_ankle = landmarks.pixel(Landmark::LeftAnkle, w, h)?;
    let right_ankle = landmarks.pixel(Landmark::RightAnkle, w, h)?;

    let hip_deviation = horizontal_deviation(left_hip, right_hip);
    let ankle_deviation = horizontal_deviation(left_ankle, right_ankle);

    let left_shoulder = landmarks.require(Landmark::LeftShoulder)?;
    let right_shoulder = landmarks.require(Landmark::RightShoulder)?;
    let spine_deviation = horizontal_deviation(
        Point2::new(left_shoulder.x, left_shoulder.y * h),
        Point2::new(right_shoulder.x, right_shoulder.y * h),
    );
    tracing::debug!(
        hip_deviation,
        ankle_deviation,
        spine_deviation,
        "posterior deviations"
    );

    let spine_label = if spine_deviation.abs() <= tolerance_deg {
        "spine straight (correct)".to_string()
    } else {
        format!(
            "spine deviated: {:.1}° (incorrect)",
            spine_deviation.abs()
        )
    };

    let mut diagnostics = Diagnostics::new();
    diagnostics.insert(
        Region::Hips,
        format!(
            "{} ({})",
            level_label(hip_deviation),
            correctness(hip_deviation, tolerance_deg)
        ),
    );
    diagnostics.insert(
        Region::Ankles,
        format!(
            "{} ({})",
            level_label(ankle_deviation),
            correctness(ankle_deviation, tolerance_deg)
        ),
    );
    diagnostics.insert(Region::Spine, spine_label);
    Ok(diagnostics)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::SPINE_TOLERANCE_DEG;
    use postura_core::LandmarkPoint;

    /// Builds a posterior subject whose hip pair tilts by `hip_deg`
    /// degrees in pixel space; everything else is level.
    fn posterior_subject(hip_deg: f64) -> LandmarkSet {
        // 0.2 normalized width at 256px is a 51.2px horizontal run.
        let run = 0.2 * 256.0;
        let rise = run * hip_deg.to_radians().tan();
        [
            (Landmark::LeftShoulder, LandmarkPoint::new(0.4, 0.3)),
            (Landmark::RightShoulder, LandmarkPoint::new(0.6, 0.3)),
            (Landmark::LeftHip, LandmarkPoint::new(0.4, 0.55)),
            (
                Landmark::RightHip,
                LandmarkPoint::new(0.6, 0.55 + rise / 256.0),
            ),
            (Landmark::LeftAnkle, LandmarkPoint::new(0.45, 0.9)),
            (Landmark::RightAnkle, LandmarkPoint::new(0.55, 0.9)),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_posterior_regions_present() {
        let diagnostics =
            analyze_posterior(&posterior_subject(0.0), SPINE_TOLERANCE_DEG, 256, 256).unwrap();
        assert_eq!(diagnostics.len(), 3);
        assert!(diagnostics.contains_key(&Region::Hips));
        assert!(diagnostics.contains_key(&Region::Ankles));
        assert!(diagnostics.contains_key(&Region::Spine));
    }

    #[test]
    fn test_level_subject_is_all_correct() {
        let diagnostics =
            analyze_posterior(&posterior_subject(0.0), SPINE_TOLERANCE_DEG, 256, 256).unwrap();
        assert_eq!(diagnostics[&Region::Hips], "level: 0.0° (correct)");
        assert_eq!(diagnostics[&Region::Ankles], "level: 0.0° (correct)");
        assert_eq!(diagnostics[&Region::Spine], "spine straight (correct)");
    }

    #[test]
    fn test_hip_tilt_within_tolerance_is_correct() {
        let diagnostics =
            analyze_posterior(&posterior_subject(4.0), SPINE_TOLERANCE_DEG, 256, 256).unwrap();
        let hips = &diagnostics[&Region::Hips];
        assert!(hips.starts_with("right side higher by"), "{hips}");
        assert!(hips.ends_with("(correct)"), "{hips}");
    }

    #[test]
    fn test_hip_tilt_beyond_tolerance_is_incorrect() {
        let diagnostics =
            analyze_posterior(&posterior_subject(6.0), SPINE_TOLERANCE_DEG, 256, 256).unwrap();
        let hips = &diagnostics[&Region::Hips];
        assert!(hips.ends_with("(incorrect)"), "{hips}");
    }

    #[test]
    fn test_tilted_shoulders_deviate_the_spine() {
        let mut set = posterior_subject(0.0);
        // Shoulder y gap of 0.1 normalized scales to 25.6px against an
        // unscaled x run of 0.2, saturating the deviation.
        set.insert(Landmark::RightShoulder, LandmarkPoint::new(0.6, 0.4));
        let diagnostics = analyze_posterior(&set, SPINE_TOLERANCE_DEG, 256, 256).unwrap();
        let spine = &diagnostics[&Region::Spine];
        assert!(spine.starts_with("spine deviated:"), "{spine}");
        assert!(spine.ends_with("(incorrect)"), "{spine}");
    }
}
