use super::landmarks::LandmarkSet;
use super::types::Handedness;

/// A landmark set plus the side it was detected as.
#[derive(Clone, Debug, PartialEq)]
pub struct Hand {
    handedness: Handedness,
    landmarks: LandmarkSet,
}

impl Hand {
    #[must_use]
    pub fn new(handedness: Handedness, landmarks: LandmarkSet) -> Self {
        Self { handedness, landmarks }
    }

    #[must_use]
    pub fn handedness(&self) -> Handedness {
        self.handedness
    }

    #[must_use]
    pub fn landmarks(&self) -> &LandmarkSet {
        &self.landmarks
    }
}
