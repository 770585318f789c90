use ndarray as nd;

use crate::error::InvalidInputError;
use crate::schema::NUM_LANDMARKS;

/// Dimensionality of a canonicalized pose: 21 landmarks times (x, y, z).
pub const FEATURE_DIM: usize = NUM_LANDMARKS * 3;

/// The 63-dimensional canonicalized representation of a hand pose.
///
/// Produced only by [`normalize`](crate::conversions::normalize::normalize)
/// and consumed only as a matching key. The length invariant is enforced at
/// construction so vectors of differing length can never meet in a
/// comparison.
#[derive(Clone, Debug, PartialEq)]
pub struct FeatureVector(nd::Array1<f32>);

impl FeatureVector {
    /// Build a feature vector from raw values, e.g. when rehydrating a
    /// transmitted symbol.
    ///
    /// # Errors
    /// [`InvalidInputError::WrongVectorLength`] unless exactly
    /// [`FEATURE_DIM`] values are given; padding or truncating would corrupt
    /// matching with no visible symptom.
    pub fn from_vec(values: Vec<f32>) -> Result<Self, InvalidInputError> {
        if values.len() != FEATURE_DIM {
            return Err(InvalidInputError::WrongVectorLength(values.len()));
        }
        Ok(Self(nd::Array1::from_vec(values)))
    }

    /// Internal constructor for values whose length is guaranteed by the
    /// producing transform.
    pub(crate) fn from_raw(values: Vec<f32>) -> Self {
        debug_assert_eq!(values.len(), FEATURE_DIM);
        Self(nd::Array1::from_vec(values))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn view(&self) -> nd::ArrayView1<'_, f32> {
        self.0.view()
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<f32> {
        self.0.to_vec()
    }
}
