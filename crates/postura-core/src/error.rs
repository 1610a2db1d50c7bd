//! Error types for the postura engine.

use thiserror::Error;

use crate::landmarks::Landmark;

#[derive(Error, Debug)]
pub enum Error {
    /// The landmark provider found no detectable pose in the image.
    /// Surfaced to the caller; retrying requires a new image.
    #[error("no pose landmarks detected")]
    MissingLandmarks,

    /// A named point required by the requested analysis is absent from
    /// an otherwise non-empty detection.
    #[error("landmark {0} missing from detection")]
    MissingLandmark(Landmark),

    #[error("configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
