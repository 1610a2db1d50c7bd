//! # Postura-Core
//!
//! Core types and planar geometry for the postura posture-analysis
//! engine: the landmark vocabulary produced by the upstream pose
//! detector, the per-image landmark set, and the angle primitives the
//! analyzers measure with.

pub mod error;
pub mod geometry;
pub mod landmarks;

pub use error::{Error, Result};
pub use geometry::*;
pub use landmarks::*;
