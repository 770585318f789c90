use mudra_core::common::feature::FEATURE_DIM;
use mudra_core::common::landmarks::{Landmark, LandmarkSet};
use mudra_core::conversions::normalize::normalize;
use mudra_core::schema::{MIDDLE_FINGER_MCP, NUM_LANDMARKS, WRIST};
use proptest::prelude::*;

fn arbitrary_hand() -> impl Strategy<Value = LandmarkSet> {
    prop::collection::vec((0.0f32..1.0, 0.0f32..1.0, -0.5f32..0.5), NUM_LANDMARKS)
        .prop_filter("wrist and middle-MCP must be separated", |points| {
            let (wx, wy, _) = points[WRIST];
            let (mx, my, _) = points[MIDDLE_FINGER_MCP];
            let (dx, dy) = (mx - wx, my - wy);
            // keep a real separation: a near-degenerate pair amplifies the
            // reference angle's floating-point error past any tolerance
            (dx * dx + dy * dy).sqrt() > 0.01
        })
        .prop_map(|points| {
            let mut set = [Landmark::default(); NUM_LANDMARKS];
            for (slot, (x, y, z)) in set.iter_mut().zip(points) {
                *slot = Landmark::new(x, y, z);
            }
            LandmarkSet::new(set)
        })
}

fn close(a: &[f32], b: &[f32]) -> bool {
    a.iter().zip(b).all(|(x, y)| (x - y).abs() < 1e-3)
}

#[test]
fn output_always_has_63_elements() {
    proptest!(|(hand in arbitrary_hand())| {
        let features = normalize(&hand).unwrap();
        prop_assert_eq!(features.len(), FEATURE_DIM);
    });
}

#[test]
fn translation_never_changes_the_features() {
    proptest!(|(hand in arbitrary_hand(), dx in -2.0f32..2.0, dy in -2.0f32..2.0, dz in -1.0f32..1.0)| {
        let mut shifted = *hand.points();
        for point in &mut shifted {
            point.x += dx;
            point.y += dy;
            point.z += dz;
        }
        let original = normalize(&hand).unwrap().to_vec();
        let translated = normalize(&LandmarkSet::new(shifted)).unwrap().to_vec();
        prop_assert!(close(&original, &translated));
    });
}

#[test]
fn in_plane_rotation_about_the_wrist_never_changes_the_features() {
    proptest!(|(hand in arbitrary_hand(), theta in 0.0f32..std::f32::consts::TAU)| {
        let wrist = hand.wrist();
        let (sin, cos) = theta.sin_cos();
        let mut rotated = *hand.points();
        for point in &mut rotated {
            let (dx, dy) = (point.x - wrist.x, point.y - wrist.y);
            point.x = wrist.x + cos * dx - sin * dy;
            point.y = wrist.y + sin * dx + cos * dy;
        }
        let original = normalize(&hand).unwrap().to_vec();
        let spun = normalize(&LandmarkSet::new(rotated)).unwrap().to_vec();
        prop_assert!(close(&original, &spun));
    });
}
