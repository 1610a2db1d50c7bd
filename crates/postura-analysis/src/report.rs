//! Diagnostic report types handed back to the hosting endpoint.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::orientation::Orientation;

/// Body regions a diagnosis can speak about. Which keys appear in a
/// report depends on the orientation category.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    Shoulders,
    Knees,
    Hips,
    Ankles,
    Dorsal,
    Lumbar,
    Spine,
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Region::Shoulders => "shoulders",
            Region::Knees => "knees",
            Region::Hips => "hips",
            Region::Ankles => "ankles",
            Region::Dorsal => "dorsal",
            Region::Lumbar => "lumbar",
            Region::Spine => "spine",
        };
        f.write_str(name)
    }
}

/// Region → label mapping produced by one classification call. Created
/// fresh per request and never mutated after construction.
pub type Diagnostics = BTreeMap<Region, String>;

/// One classification result, shaped like the JSON the hosting endpoint
/// returns to its clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostureReport {
    #[serde(rename = "pose_type")]
    pub orientation: Orientation,
    #[serde(rename = "validations")]
    pub diagnostics: Diagnostics,
}
