//! Orientation classification: which way the subject faces the camera.

use std::fmt;

use serde::{Deserialize, Serialize};

use postura_core::{Landmark, LandmarkSet, Result};

/// Depth gap between the shoulders at or above which a pose reads as
/// lateral rather than frontal.
pub const LATERAL_DEPTH_GAP: f64 = 0.1;

/// The coarse body-facing category. Exactly one is assigned per
/// landmark set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    Frontal,
    Posterior,
    LateralLeft,
    LateralRight,
}

impl Orientation {
    pub fn is_lateral(&self) -> bool {
        matches!(self, Orientation::LateralLeft | Orientation::LateralRight)
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Orientation::Frontal => "Frontal",
            Orientation::Posterior => "Posterior",
            Orientation::LateralLeft => "Lateral Left",
            Orientation::LateralRight => "Lateral Right",
        };
        f.write_str(name)
    }
}

/// The shoulder the detector reports as farther from the camera
/// (larger depth value).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FartherShoulder {
    Left,
    Right,
}

/// Farther-shoulder → lateral-side mapping.
///
/// The convention is fixed and counter-intuitive: the left shoulder
/// sitting farther from the camera means the subject shows their right
/// side. Changing either row silently swaps left/right in every
/// response, so this table is the single place the convention lives.
fn lateral_side_for(farther: FartherShoulder) -> Orientation {
    match farther {
        FartherShoulder::Left => Orientation::LateralRight,
        FartherShoulder::Right => Orientation::LateralLeft,
    }
}

/// Decide the orientation category for one landmark set.
///
/// Decision order is load-bearing and must not be reordered:
///
/// 1. no face visible → [`Orientation::Posterior`]
/// 2. shoulder depth gap ≥ [`LATERAL_DEPTH_GAP`] → lateral, side per
///    the fixed mapping
/// 3. otherwise → [`Orientation::Frontal`]
///
/// Image dimensions are accepted for interface symmetry with the
/// analyzers; the decision itself does not use them.
pub fn classify_orientation(
    landmarks: &LandmarkSet,
    face_present: bool,
    _width: u32,
    _height: u32,
) -> Result<Orientation> {
    if !face_present {
        return Ok(Orientation::Posterior);
    }

    let left = landmarks.require(Landmark::LeftShoulder)?;
    let right = landmarks.require(Landmark::RightShoulder)?;

    let depth_gap = (left.z - right.z).abs();
    tracing::debug!(depth_gap, "shoulder depth gap");

    if depth_gap >= LATERAL_DEPTH_GAP {
        let farther = if left.z > right.z {
            FartherShoulder::Left
        } else {
            FartherShoulder::Right
        };
        return Ok(lateral_side_for(farther));
    }

    Ok(Orientation::Frontal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use postura_core::LandmarkPoint;

    fn shoulders(left_z: f64, right_z: f64) -> LandmarkSet {
        [
            (
                Landmark::LeftShoulder,
                LandmarkPoint::with_depth(0.4, 0.3, left_z),
            ),
            (
                Landmark::RightShoulder,
                LandmarkPoint::with_depth(0.6, 0.3, right_z),
            ),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_no_face_is_posterior_regardless_of_depth() {
        for (lz, rz) in [(0.0, 0.0), (0.5, -0.5), (-0.5, 0.5)] {
            let orientation =
                classify_orientation(&shoulders(lz, rz), false, 256, 256).unwrap();
            assert_eq!(orientation, Orientation::Posterior);
        }
    }

    #[test]
    fn test_small_depth_gap_is_frontal() {
        let orientation =
            classify_orientation(&shoulders(0.02, -0.02), true, 256, 256).unwrap();
        assert_eq!(orientation, Orientation::Frontal);
    }

    #[test]
    fn test_left_shoulder_farther_is_lateral_right() {
        let orientation =
            classify_orientation(&shoulders(0.2, 0.0), true, 256, 256).unwrap();
        assert_eq!(orientation, Orientation::LateralRight);
    }

    #[test]
    fn test_right_shoulder_farther_is_lateral_left() {
        let orientation =
            classify_orientation(&shoulders(0.0, 0.2), true, 256, 256).unwrap();
        assert_eq!(orientation, Orientation::LateralLeft);
    }

    #[test]
    fn test_gap_exactly_at_threshold_is_lateral() {
        let orientation =
            classify_orientation(&shoulders(0.1, 0.0), true, 256, 256).unwrap();
        assert_eq!(orientation, Orientation::LateralRight);
    }

    #[test]
    fn test_missing_shoulder_errors() {
        let mut set = LandmarkSet::new();
        set.insert(Landmark::LeftShoulder, LandmarkPoint::new(0.4, 0.3));
        assert!(classify_orientation(&set, true, 256, 256).is_err());
    }
}
