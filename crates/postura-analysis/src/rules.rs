//! Severity bands and labeling rules for the angular diagnostics.
//!
//! Thresholds are empirically chosen severity bands, not physically
//! derived values; they are the primary tuning surface of the engine
//! and live here as named constants. Two historical band conventions
//! exist for the curvature regions; a tagged ruleset selects one
//! instead of forking the classification code.

use serde::{Deserialize, Serialize};

use postura_core::Landmark;

/// Standard curvature bands, degrees: normal below the mild edge,
/// marked at or above the marked edge.
pub const STANDARD_MILD_DEG: f64 = 10.0;
pub const STANDARD_MARKED_DEG: f64 = 30.0;

/// Legacy curvature bands, degrees.
pub const LEGACY_MILD_DEG: f64 = 2.0;
pub const LEGACY_MARKED_DEG: f64 = 10.0;

/// Levelness tolerance for the posterior hip/ankle/spine checks, degrees.
pub const SPINE_TOLERANCE_DEG: f64 = 5.0;

/// Midline tolerance for the column-alignment check, pixels.
pub const COLUMN_TOLERANCE_PX: f64 = 10.0;

const DORSAL_NORMAL: &str = "normal dorsal curvature";
const DORSAL_MILD: &str = "upper back somewhat curved";
const DORSAL_MARKED: &str = "upper back markedly curved";

const LUMBAR_NORMAL: &str = "normal lumbar curvature";
const LUMBAR_MILD: &str = "lower back slightly sunken";
const LUMBAR_MARKED: &str = "lower back markedly sunken";

/// Which historical band convention the curvature classifiers apply.
///
/// Both rulesets measure the same landmark triples (see
/// [`RegionTriple`]); only the band edges differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurvatureRuleset {
    /// 10°/30° band edges.
    #[default]
    Standard,
    /// 2°/10° band edges kept for comparisons against older captures.
    Legacy,
}

impl CurvatureRuleset {
    /// (mild edge, marked edge) in degrees.
    pub fn bands(&self) -> (f64, f64) {
        match self {
            CurvatureRuleset::Standard => (STANDARD_MILD_DEG, STANDARD_MARKED_DEG),
            CurvatureRuleset::Legacy => (LEGACY_MILD_DEG, LEGACY_MARKED_DEG),
        }
    }

    /// Map a dorsal angle to its severity label.
    pub fn classify_dorsal(&self, angle: f64) -> &'static str {
        let (mild, marked) = self.bands();
        if angle < mild {
            DORSAL_NORMAL
        } else if angle < marked {
            DORSAL_MILD
        } else {
            DORSAL_MARKED
        }
    }

    /// Map a lumbar angle to its severity label.
    pub fn classify_lumbar(&self, angle: f64) -> &'static str {
        let (mild, marked) = self.bands();
        if angle < mild {
            LUMBAR_NORMAL
        } else if angle < marked {
            LUMBAR_MILD
        } else {
            LUMBAR_MARKED
        }
    }
}

/// The two side landmarks whose segment (and midpoint reference) a
/// curvature region is measured over. The angle vertex sits at the
/// right-side landmark, the region reference midpoint is the third
/// point; both rulesets share this one convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionTriple {
    pub left: Landmark,
    pub right: Landmark,
}

pub const DORSAL_TRIPLE: RegionTriple = RegionTriple {
    left: Landmark::LeftShoulder,
    right: Landmark::RightShoulder,
};

pub const LUMBAR_TRIPLE: RegionTriple = RegionTriple {
    left: Landmark::LeftHip,
    right: Landmark::RightHip,
};

/// Levelness label shared by the frontal and posterior analyzers.
///
/// Positive deviation reads as the right side higher, negative as the
/// left side higher; the magnitude is reported to one decimal.
pub(crate) fn level_label(deviation: f64) -> String {
    if deviation > 0.0 {
        format!("right side higher by {:.1}°", deviation.abs())
    } else if deviation < 0.0 {
        format!("left side higher by {:.1}°", deviation.abs())
    } else {
        "level: 0.0°".to_string()
    }
}

/// Correctness suffix for the posterior tolerance checks.
pub(crate) fn correctness(deviation: f64, tolerance_deg: f64) -> &'static str {
    if deviation.abs() <= tolerance_deg {
        "correct"
    } else {
        "incorrect"
    }
}
