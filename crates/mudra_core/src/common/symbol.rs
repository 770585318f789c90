use super::feature::FeatureVector;
use super::types::Handedness;
use crate::error::InvalidInputError;

/// A named reference pose a live hand can be matched against.
///
/// Immutable once created. Names need not be unique; duplicates are retained
/// as separate candidates and both appear in rankings.
#[derive(Clone, Debug)]
pub struct Symbol {
    name: String,
    handedness: Handedness,
    features: FeatureVector,
}

impl Symbol {
    /// # Errors
    /// [`InvalidInputError::EmptyName`] for an empty name.
    pub fn new(
        name: impl Into<String>,
        handedness: Handedness,
        features: FeatureVector,
    ) -> Result<Self, InvalidInputError> {
        let name = name.into();
        if name.is_empty() {
            return Err(InvalidInputError::EmptyName);
        }
        Ok(Self { name, handedness, features })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn handedness(&self) -> Handedness {
        self.handedness
    }

    #[must_use]
    pub fn features(&self) -> &FeatureVector {
        &self.features
    }
}

/// One entry of a ranked matching outcome.
#[derive(Clone, Debug, PartialEq)]
pub struct MatchResult {
    pub name: String,
    /// Cosine similarity against the query, in [-1, 1].
    pub score: f32,
}
