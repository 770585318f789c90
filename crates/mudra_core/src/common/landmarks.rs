use serde::{Deserialize, Serialize};

use crate::error::InvalidPoseError;
use crate::schema::{self, NUM_LANDMARKS};

/// One anatomically labeled 3-D point on a detected hand.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    /// Depth relative to the wrist, producer-defined scale. Carried through
    /// every transform translated but never rotated or rescaled.
    pub z: f32,
}

impl Landmark {
    #[must_use]
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// The ordered 21-landmark skeleton of one detected hand, index-addressed by
/// the [`schema`](crate::schema) constants.
#[derive(Clone, Debug, PartialEq)]
pub struct LandmarkSet([Landmark; NUM_LANDMARKS]);

impl LandmarkSet {
    #[must_use]
    pub fn new(points: [Landmark; NUM_LANDMARKS]) -> Self {
        Self(points)
    }

    /// Validate an arbitrary-length slice into a landmark set.
    ///
    /// # Errors
    /// [`InvalidPoseError::WrongLandmarkCount`] unless exactly 21 points are
    /// given; a producer sending anything else must be rejected before its
    /// data can reach the matching pipeline.
    pub fn from_slice(points: &[Landmark]) -> Result<Self, InvalidPoseError> {
        let points: [Landmark; NUM_LANDMARKS] = points
            .try_into()
            .map_err(|_| InvalidPoseError::WrongLandmarkCount(points.len()))?;
        Ok(Self(points))
    }

    /// The translation origin of canonicalization.
    #[must_use]
    pub fn wrist(&self) -> Landmark {
        self.0[schema::WRIST]
    }

    /// The orientation reference of canonicalization.
    #[must_use]
    pub fn middle_mcp(&self) -> Landmark {
        self.0[schema::MIDDLE_FINGER_MCP]
    }

    #[must_use]
    pub fn points(&self) -> &[Landmark; NUM_LANDMARKS] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &Landmark> {
        self.0.iter()
    }
}

impl std::ops::Index<usize> for LandmarkSet {
    type Output = Landmark;

    fn index(&self, index: usize) -> &Landmark {
        &self.0[index]
    }
}
