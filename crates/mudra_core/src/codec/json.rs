//! Validated ingestion of estimator wire payloads.
//!
//! The engine owns no wire protocol; these mirror types exist so that
//! everything crossing the boundary is checked once, here, instead of being
//! trusted as loose JSON deeper in the pipeline.

use serde::Deserialize;

use crate::common::hand::Hand;
use crate::common::landmarks::{Landmark, LandmarkSet};
use crate::common::types::Handedness;
use crate::error::{CodecError, InvalidPoseError};
use crate::schema::NUM_LANDMARKS;

/// Wire shape of one detected hand as the estimator publishes it:
/// a side label plus 21 `[x, y, z]` triples.
#[derive(Clone, Debug, Deserialize)]
pub struct HandRecord {
    pub handedness: String,
    pub landmarks: Vec<[f32; 3]>,
}

/// Ingestion options.
#[derive(Clone, Copy, Debug, Default)]
pub struct CodecConfig {
    /// Undo a horizontally mirrored camera feed by swapping the side label.
    /// Applied exactly once, here, never inside normalization or matching.
    pub mirror_correction: bool,
}

/// Validate one wire record into a typed [`Hand`].
///
/// # Errors
/// [`InvalidPoseError::WrongLandmarkCount`] unless exactly 21 landmarks are
/// present, [`InvalidPoseError::NonFiniteLandmark`] for NaN or infinite
/// coordinates, [`InvalidPoseError::UnknownHandedness`] for a label other
/// than `"Left"`/`"Right"`.
pub fn decode_hand(record: &HandRecord, config: &CodecConfig) -> Result<Hand, InvalidPoseError> {
    if record.landmarks.len() != NUM_LANDMARKS {
        return Err(InvalidPoseError::WrongLandmarkCount(record.landmarks.len()));
    }
    let mut points = [Landmark::default(); NUM_LANDMARKS];
    for (index, coords) in record.landmarks.iter().enumerate() {
        let [x, y, z] = *coords;
        if !(x.is_finite() && y.is_finite() && z.is_finite()) {
            return Err(InvalidPoseError::NonFiniteLandmark(index));
        }
        points[index] = Landmark::new(x, y, z);
    }
    let mut handedness = match record.handedness.as_str() {
        "Left" => Handedness::Left,
        "Right" => Handedness::Right,
        other => return Err(InvalidPoseError::UnknownHandedness(other.to_owned())),
    };
    if config.mirror_correction {
        handedness = handedness.mirrored();
    }
    Ok(Hand::new(handedness, LandmarkSet::new(points)))
}

/// Parse and validate a JSON array of hand records.
///
/// # Errors
/// [`CodecError::Json`] on malformed JSON, [`CodecError::Pose`] on the first
/// record that fails validation; a producer error poisons the whole batch
/// rather than yielding a partially trusted frame.
pub fn decode_hands(json: &str, config: &CodecConfig) -> Result<Vec<Hand>, CodecError> {
    let records: Vec<HandRecord> = serde_json::from_str(json)?;
    records
        .iter()
        .map(|record| decode_hand(record, config).map_err(CodecError::from))
        .collect()
}
