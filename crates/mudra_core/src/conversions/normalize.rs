use nalgebra as na;

use crate::common::feature::{FeatureVector, FEATURE_DIM};
use crate::common::landmarks::LandmarkSet;
use crate::error::InvalidPoseError;

/// Canonicalize a hand pose into its translation- and rotation-invariant
/// feature vector.
///
/// The wrist becomes the origin and the wrist-to-middle-MCP direction the
/// reference axis, so absolute position and in-plane rotation drop out of the
/// representation. The middle-MCP is the reference because it sits roughly on
/// the palm's principal axis and stays put across most poses. Scale is
/// deliberately kept: a closer or larger hand produces a proportionally
/// larger vector.
///
/// Depth values are translated along with x and y but never rotated; their
/// producer-defined scale passes through unchanged.
///
/// # Errors
/// [`InvalidPoseError::DegenerateOrientation`] when the wrist and middle-MCP
/// coincide in the image plane. No reference angle exists then, and
/// canonicalizing with an arbitrary one would corrupt every later match.
pub fn normalize(landmarks: &LandmarkSet) -> Result<FeatureVector, InvalidPoseError> {
    let wrist = landmarks.wrist();
    let mcp = landmarks.middle_mcp();

    let axis = na::Vector2::new(mcp.x - wrist.x, mcp.y - wrist.y);
    if axis.x == 0.0 && axis.y == 0.0 {
        return Err(InvalidPoseError::DegenerateOrientation);
    }
    let rotation = na::Rotation2::new(-axis.y.atan2(axis.x));

    let mut values = Vec::with_capacity(FEATURE_DIM);
    for landmark in landmarks.iter() {
        let planar = rotation * na::Vector2::new(landmark.x - wrist.x, landmark.y - wrist.y);
        values.push(planar.x);
        values.push(planar.y);
        values.push(landmark.z - wrist.z);
    }
    Ok(FeatureVector::from_raw(values))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::landmarks::Landmark;
    use crate::schema::{MIDDLE_FINGER_MCP, NUM_LANDMARKS, WRIST};
    use approx::assert_abs_diff_eq;

    fn sample_hand() -> LandmarkSet {
        let mut points = [Landmark::default(); NUM_LANDMARKS];
        for (index, point) in points.iter_mut().enumerate() {
            let i = index as f32;
            *point = Landmark::new(0.30 + 0.02 * i, 0.70 - 0.025 * i, -0.01 * i);
        }
        LandmarkSet::new(points)
    }

    fn assert_features_close(a: &FeatureVector, b: &FeatureVector) {
        for (&left, &right) in a.view().iter().zip(b.view().iter()) {
            assert_abs_diff_eq!(left, right, epsilon = 1e-4);
        }
    }

    #[test]
    fn output_has_63_elements() {
        let features = normalize(&sample_hand()).unwrap();
        assert_eq!(features.len(), FEATURE_DIM);
    }

    #[test]
    fn wrist_maps_to_the_origin() {
        let features = normalize(&sample_hand()).unwrap();
        let values = features.to_vec();
        assert_eq!(&values[..3], &[0.0, 0.0, 0.0]);
    }

    #[test]
    fn middle_mcp_lands_on_the_reference_axis() {
        let features = normalize(&sample_hand()).unwrap();
        let values = features.to_vec();
        // after rotation the orientation reference has no y component left
        assert_abs_diff_eq!(values[MIDDLE_FINGER_MCP * 3 + 1], 0.0, epsilon = 1e-5);
        assert!(values[MIDDLE_FINGER_MCP * 3] > 0.0);
    }

    #[test]
    fn translation_invariant() {
        let hand = sample_hand();
        let mut shifted = *hand.points();
        for point in &mut shifted {
            point.x += 0.17;
            point.y -= 0.31;
            point.z += 0.05;
        }
        let original = normalize(&hand).unwrap();
        let translated = normalize(&LandmarkSet::new(shifted)).unwrap();
        assert_features_close(&original, &translated);
    }

    #[test]
    fn in_plane_rotation_invariant() {
        let hand = sample_hand();
        let wrist = hand.wrist();
        let theta = 0.7_f32;
        let (sin, cos) = theta.sin_cos();
        let mut rotated = *hand.points();
        for point in &mut rotated {
            let (dx, dy) = (point.x - wrist.x, point.y - wrist.y);
            point.x = wrist.x + cos * dx - sin * dy;
            point.y = wrist.y + sin * dx + cos * dy;
        }
        let original = normalize(&hand).unwrap();
        let spun = normalize(&LandmarkSet::new(rotated)).unwrap();
        assert_features_close(&original, &spun);
    }

    #[test]
    fn coincident_wrist_and_mcp_is_an_error() {
        let mut points = *sample_hand().points();
        points[MIDDLE_FINGER_MCP].x = points[WRIST].x;
        points[MIDDLE_FINGER_MCP].y = points[WRIST].y;
        assert_eq!(
            normalize(&LandmarkSet::new(points)),
            Err(InvalidPoseError::DegenerateOrientation)
        );
    }

    #[test]
    fn depth_offset_from_wrist_is_preserved() {
        let hand = sample_hand();
        let features = normalize(&hand).unwrap();
        let values = features.to_vec();
        let wrist_z = hand.wrist().z;
        for (index, landmark) in hand.iter().enumerate() {
            assert_abs_diff_eq!(values[index * 3 + 2], landmark.z - wrist_z, epsilon = 1e-6);
        }
    }
}
