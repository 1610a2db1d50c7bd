//! Dispatch: the orientation decision plus the per-category analyzer
//! battery, exposed as the engine's single entry point.

use postura_core::{Error, Landmark, LandmarkSet, Result};

use crate::config::AnalysisConfig;
use crate::frontal::analyze_frontal;
use crate::lateral::analyze_lateral;
use crate::orientation::{classify_orientation, Orientation};
use crate::posterior::analyze_posterior;
use crate::report::PostureReport;

/// The classification engine. Holds only configuration; every call is
/// a pure computation over its arguments, so one instance may serve
/// parallel workers without coordination.
#[derive(Debug, Clone, Default)]
pub struct PostureClassifier {
    config: AnalysisConfig,
}

impl PostureClassifier {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Classify one landmark set: assign the orientation category and
    /// run that category's measurement battery.
    ///
    /// `face_present` comes from the caller's face detector;
    /// `width`/`height` are the analyzed image's pixel dimensions. An
    /// empty landmark set surfaces as [`Error::MissingLandmarks`].
    pub fn classify(
        &self,
        landmarks: &LandmarkSet,
        face_present: bool,
        width: u32,
        height: u32,
    ) -> Result<PostureReport> {
        if landmarks.is_empty() {
            return Err(Error::MissingLandmarks);
        }

        let orientation = classify_orientation(landmarks, face_present, width, height)?;
        tracing::debug!(%orientation, "orientation assigned");

        let diagnostics = match orientation {
            Orientation::LateralLeft | Orientation::LateralRight => {
                analyze_lateral(landmarks, self.config.ruleset, width, height)?
            }
            Orientation::Frontal => analyze_frontal(landmarks, width, height)?,
            Orientation::Posterior => {
                analyze_posterior(landmarks, self.config.spine_tolerance_deg, width, height)?
            }
        };

        Ok(PostureReport {
            orientation,
            diagnostics,
        })
    }

    /// Standalone spinal-column check: horizontal distance between the
    /// shoulder midline and the hip midline, in pixels.
    ///
    /// Not part of the per-category battery; callers request it
    /// separately when the capture protocol asks for it.
    pub fn column_alignment(&self, landmarks: &LandmarkSet, width: u32) -> Result<String> {
        let w = f64::from(width);

        let left_shoulder = landmarks.require(Landmark::LeftShoulder)?;
        let right_shoulder = landmarks.require(Landmark::RightShoulder)?;
        let left_hip = landmarks.require(Landmark::LeftHip)?;
        let right_hip = landmarks.require(Landmark::RightHip)?;

        let shoulder_mid_x = (left_shoulder.x + right_shoulder.x) / 2.0 * w;
        let hip_mid_x = (left_hip.x + right_hip.x) / 2.0 * w;
        let deviation = (shoulder_mid_x - hip_mid_x).abs();
        tracing::debug!(deviation, "column midline deviation");

        if deviation <= self.config.column_tolerance_px {
            Ok(format!("column aligned (deviation: {deviation:.1}px)"))
        } else {
            Ok(format!("column deviated (deviation: {deviation:.1}px)"))
        }
    }
}

/// One-shot classification with the default configuration.
pub fn classify(
    landmarks: &LandmarkSet,
    face_present: bool,
    width: u32,
    height: u32,
) -> Result<PostureReport> {
    PostureClassifier::default().classify(landmarks, face_present, width, height)
}
