use image::{Rgb, RgbImage};
use mudra_core::common::hand::Hand;
use mudra_core::common::landmarks::{Landmark, LandmarkSet};
use mudra_core::common::types::Handedness;
use mudra_core::engine::{DeltaGate, EngineConfig, HandEngine};
use mudra_core::schema::NUM_LANDMARKS;

/// A stylized open palm: straight finger chains fanning out of the wrist.
fn open_palm() -> LandmarkSet {
    let mut points = [Landmark::default(); NUM_LANDMARKS];
    points[0] = Landmark::new(0.5, 0.85, 0.0);
    // thumb plus four fingers, four joints each
    for finger in 0..5 {
        let spread = (finger as f32 - 2.0) * 0.25;
        for joint in 0..4 {
            let reach = 0.08 + 0.07 * joint as f32;
            points[1 + finger * 4 + joint] = Landmark::new(
                0.5 + spread.sin() * reach,
                0.85 - spread.cos() * reach,
                -0.01 * joint as f32,
            );
        }
    }
    LandmarkSet::new(points)
}

/// The same palm with every finger folded back toward the wrist.
fn closed_fist() -> LandmarkSet {
    let mut points = *open_palm().points();
    for finger in 0..5 {
        for joint in 2..4 {
            let tip = &mut points[1 + finger * 4 + joint];
            tip.x = 0.5 + (tip.x - 0.5) * 0.3;
            tip.y = 0.85 + (tip.y - 0.85) * 0.3;
        }
    }
    LandmarkSet::new(points)
}

/// The open palm as the camera would see it a little later: shifted and
/// slightly rotated, which canonicalization must shrug off.
fn open_palm_moved() -> LandmarkSet {
    let palm = open_palm();
    let wrist = palm.wrist();
    let theta = 0.4_f32;
    let (sin, cos) = theta.sin_cos();
    let mut points = *palm.points();
    for point in &mut points {
        let (dx, dy) = (point.x - wrist.x, point.y - wrist.y);
        point.x = wrist.x + cos * dx - sin * dy + 0.12;
        point.y = wrist.y + sin * dx + cos * dy - 0.05;
    }
    LandmarkSet::new(points)
}

fn main() {
    let engine = HandEngine::new(EngineConfig::default());
    engine
        .learn("open", &Hand::new(Handedness::Right, open_palm()))
        .unwrap();
    engine
        .learn("fist", &Hand::new(Handedness::Right, closed_fist()))
        .unwrap();
    println!("learned {} symbols", engine.store().len());

    let frame = RgbImage::from_pixel(640, 480, Rgb([32, 32, 32]));
    let live = Hand::new(Handedness::Right, open_palm_moved());
    let processed = engine.process(&live, &frame);

    println!("ranking for the live {} hand:", processed.handedness);
    for result in &processed.matches {
        println!("  {:<8} {:.4}", result.name, result.score);
    }

    // a static scene is only published once
    let mut gate = DeltaGate::new();
    let again = engine.process(&live, &frame);
    println!(
        "first frame changed: {}, identical second frame changed: {}",
        gate.changed(&processed.matches),
        gate.changed(&again.matches)
    );
}
