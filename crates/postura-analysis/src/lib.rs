//! # Postura-Analysis
//!
//! Landmark-driven posture classification and angular diagnosis.
//!
//! Given one landmark set for one still image, a face-presence flag and
//! the image's pixel dimensions, the engine assigns exactly one
//! orientation category and runs that category's battery of angular
//! measurements, mapping each to a human-readable label.
//!
//! ## Decision flow
//!
//! 1. **Orientation**: no face visible → Posterior; shoulder depth gap
//!    ≥ 0.1 → Lateral (left/right per a fixed mapping); otherwise
//!    Frontal. First match wins.
//! 2. **Region battery**: the category selects one analyzer:
//!    - Lateral: dorsal and lumbar curvature bands
//!    - Frontal: shoulder and knee levelness
//!    - Posterior: hip/ankle levelness plus a spinal-alignment check
//! 3. **Report**: `(orientation, region → label)` handed back to the
//!    hosting endpoint; nothing is retained between calls.
//!
//! Every function is a pure computation over its arguments: no I/O, no
//! shared mutable state, no suspension points. Parallel workers may
//! classify concurrently without coordination.

pub mod classifier;
pub mod config;
pub mod frontal;
pub mod lateral;
pub mod orientation;
pub mod posterior;
pub mod report;
pub mod rules;

pub use classifier::*;
pub use config::*;
pub use frontal::*;
pub use lateral::*;
pub use orientation::*;
pub use posterior::*;
pub use report::*;
pub use rules::*;
