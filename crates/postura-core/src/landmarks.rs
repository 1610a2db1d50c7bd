//! Landmark vocabulary and the per-image landmark set.

use std::collections::BTreeMap;
use std::fmt;

use nalgebra::Point2;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Named anatomical points consumed by the analyzers.
///
/// Discriminants are the upstream detector's indices into its 33-point
/// pose topology, so a raw detection row maps straight onto this enum.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Landmark {
    LeftEye = 1,
    RightEye = 2,
    Mouth = 9,
    LeftShoulder = 11,
    RightShoulder = 12,
    LeftHip = 23,
    RightHip = 24,
    LeftKnee = 25,
    RightKnee = 26,
    LeftAnkle = 27,
    RightAnkle = 28,
}

impl Landmark {
    pub const COUNT: usize = 11;

    /// Every named landmark, in detector-index order.
    pub const ALL: [Landmark; Self::COUNT] = [
        Landmark::LeftEye,
        Landmark::RightEye,
        Landmark::Mouth,
        Landmark::LeftShoulder,
        Landmark::RightShoulder,
        Landmark::LeftHip,
        Landmark::RightHip,
        Landmark::LeftKnee,
        Landmark::RightKnee,
        Landmark::LeftAnkle,
        Landmark::RightAnkle,
    ];

    /// Index of this point in the detector's pose topology.
    pub fn pose_index(&self) -> u8 {
        *self as u8
    }

    pub fn from_pose_index(idx: u8) -> Option<Self> {
        match idx {
            1 => Some(Self::LeftEye),
            2 => Some(Self::RightEye),
            9 => Some(Self::Mouth),
            11 => Some(Self::LeftShoulder),
            12 => Some(Self::RightShoulder),
            23 => Some(Self::LeftHip),
            24 => Some(Self::RightHip),
            25 => Some(Self::LeftKnee),
            26 => Some(Self::RightKnee),
            27 => Some(Self::LeftAnkle),
            28 => Some(Self::RightAnkle),
            _ => None,
        }
    }
}

impl fmt::Display for Landmark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Landmark::LeftEye => "left_eye",
            Landmark::RightEye => "right_eye",
            Landmark::Mouth => "mouth",
            Landmark::LeftShoulder => "left_shoulder",
            Landmark::RightShoulder => "right_shoulder",
            Landmark::LeftHip => "left_hip",
            Landmark::RightHip => "right_hip",
            Landmark::LeftKnee => "left_knee",
            Landmark::RightKnee => "right_knee",
            Landmark::LeftAnkle => "left_ankle",
            Landmark::RightAnkle => "right_ankle",
        };
        f.write_str(name)
    }
}

/// One detected point with normalized planar coordinates.
///
/// `x` and `y` are in `[0, 1]` relative to image width/height. `z` is a
/// relative depth; its sign and magnitude only carry meaning when
/// comparing the left and right member of a pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LandmarkPoint {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub z: f64,
}

impl LandmarkPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, z: 0.0 }
    }

    pub fn with_depth(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Scale the normalized coordinates into pixel space.
    pub fn to_pixel(&self, width: f64, height: f64) -> Point2<f64> {
        Point2::new(self.x * width, self.y * height)
    }
}

/// The landmark set for one still image.
///
/// Produced once per image by the upstream detector and read-only for
/// the duration of a classification call. An empty set models the
/// detector's "no landmarks detected" signal.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LandmarkSet {
    points: BTreeMap<Landmark, LandmarkPoint>,
}

impl LandmarkSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, landmark: Landmark, point: LandmarkPoint) {
        self.points.insert(landmark, point);
    }

    pub fn get(&self, landmark: Landmark) -> Option<&LandmarkPoint> {
        self.points.get(&landmark)
    }

    /// Fetch a point the analysis cannot proceed without.
    pub fn require(&self, landmark: Landmark) -> Result<&LandmarkPoint> {
        if self.points.is_empty() {
            return Err(Error::MissingLandmarks);
        }
        self.points
            .get(&landmark)
            .ok_or(Error::MissingLandmark(landmark))
    }

    /// Fetch a required point already scaled into pixel space.
    pub fn pixel(&self, landmark: Landmark, width: f64, height: f64) -> Result<Point2<f64>> {
        Ok(self.require(landmark)?.to_pixel(width, height))
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl FromIterator<(Landmark, LandmarkPoint)> for LandmarkSet {
    fn from_iter<I: IntoIterator<Item = (Landmark, LandmarkPoint)>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}
