use thiserror::Error;

/// A landmark set that cannot be canonicalized or ingested.
///
/// These are structural faults of the producer, never coerced away: a padded
/// or truncated skeleton would silently corrupt every later match.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum InvalidPoseError {
    #[error("expected 21 landmarks, got {0}")]
    WrongLandmarkCount(usize),
    #[error("landmark {0} has a non-finite coordinate")]
    NonFiniteLandmark(usize),
    #[error("wrist and middle-finger MCP coincide, orientation angle is undefined")]
    DegenerateOrientation,
    #[error("unknown handedness label {0:?}")]
    UnknownHandedness(String),
}

/// A malformed symbol insertion.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum InvalidInputError {
    #[error("symbol name is empty")]
    EmptyName,
    #[error("expected a 63-element feature vector, got {0}")]
    WrongVectorLength(usize),
}

/// Failure while decoding an estimator wire payload.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("malformed hand payload: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Pose(#[from] InvalidPoseError),
}

/// Any per-call failure surfaced by the engine façade.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum EngineError {
    #[error(transparent)]
    Pose(#[from] InvalidPoseError),
    #[error(transparent)]
    Input(#[from] InvalidInputError),
}
