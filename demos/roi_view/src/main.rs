use image::{Rgb, RgbImage};
use mudra_core::common::landmarks::{Landmark, LandmarkSet};
use mudra_core::display::grid::{render_grid, GridConfig};
use mudra_core::display::letterbox::letterbox;
use mudra_core::display::roi::{extract, RoiConfig};
use mudra_core::schema::NUM_LANDMARKS;

/// A synthetic camera frame with a diagonal gradient, so the crop's origin
/// is visible in the output.
fn gradient_frame(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        let r = (255 * x / width) as u8;
        let b = (255 * y / height) as u8;
        Rgb([r, 40, b])
    })
}

/// An open palm in the upper-left quarter of the frame.
fn palm() -> LandmarkSet {
    let mut points = [Landmark::default(); NUM_LANDMARKS];
    points[0] = Landmark::new(0.25, 0.45, 0.0);
    for finger in 0..5 {
        let spread = (finger as f32 - 2.0) * 0.3;
        for joint in 0..4 {
            let reach = 0.04 + 0.04 * joint as f32;
            points[1 + finger * 4 + joint] = Landmark::new(
                0.25 + spread.sin() * reach,
                0.45 - spread.cos() * reach,
                -0.01 * joint as f32,
            );
        }
    }
    LandmarkSet::new(points)
}

fn main() {
    let frame = gradient_frame(640, 480);
    let hand = palm();

    let roi = extract(&hand, &frame, &RoiConfig::default());
    println!(
        "roi: crop {}x{} placed at ({}, {})",
        roi.crop_size.0, roi.crop_size.1, roi.crop_origin.0, roi.crop_origin.1
    );
    roi.canvas.save("roi.png").unwrap();

    let grid = render_grid(&hand, &GridConfig::default());
    grid.save("grid.png").unwrap();

    let main_view = letterbox(&frame, 800, 900);
    main_view.save("main_view.png").unwrap();

    println!("wrote roi.png, grid.png and main_view.png");
}
