//! Analysis configuration.

use serde::{Deserialize, Serialize};

use postura_core::{Error, Result};

use crate::rules::{CurvatureRuleset, COLUMN_TOLERANCE_PX, SPINE_TOLERANCE_DEG};

/// Tuning surface of the engine. The decision logic itself stays pure;
/// every adjustable threshold enters through this struct.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Which curvature band convention the lateral analyzer applies.
    pub ruleset: CurvatureRuleset,

    /// Levelness tolerance for the posterior hip/ankle/spine checks
    /// (degrees).
    pub spine_tolerance_deg: f64,

    /// Midline tolerance for the column-alignment check (pixels).
    pub column_tolerance_px: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            ruleset: CurvatureRuleset::Standard,
            spine_tolerance_deg: SPINE_TOLERANCE_DEG,
            column_tolerance_px: COLUMN_TOLERANCE_PX,
        }
    }
}

impl AnalysisConfig {
    /// Load configuration from a file, with `POSTURA_*` environment
    /// variables layered on top.
    pub fn from_file(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path))
            .add_source(config::Environment::with_prefix("POSTURA"))
            .build()
            .map_err(|e| Error::Config(e.to_string()))?;

        settings
            .try_deserialize()
            .map_err(|e| Error::Config(e.to_string()))
    }

    /// Load from environment variables alone.
    pub fn from_env() -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::Environment::with_prefix("POSTURA"))
            .build()
            .map_err(|e| Error::Config(e.to_string()))?;

        settings
            .try_deserialize()
            .map_err(|e| Error::Config(e.to_string()))
    }
}
