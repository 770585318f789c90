use image::{Rgb, RgbImage};
use log::debug;

use super::overlay;
use crate::common::landmarks::LandmarkSet;
use crate::schema::CONNECTIONS;

/// Options for the upright skeleton grid view.
#[derive(Clone, Debug)]
pub struct GridConfig {
    /// Side length of the square canvas.
    pub canvas_size: u32,
    /// Background grid line spacing in pixels.
    pub spacing: u32,
    /// Minimum normalized bounding-box extent below which no skeleton is
    /// drawn, e.g. a hand sliding off screen.
    pub min_extent: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self { canvas_size: 400, spacing: 50, min_extent: 0.01 }
    }
}

/// Background grid line color.
pub const GRID_COLOR: Rgb<u8> = Rgb([60, 60, 60]);

/// Render the hand skeleton stretched to its bounding box over a background
/// grid, with the y axis flipped relative to image coordinates.
///
/// Expects normalized landmark coordinates. Unlike the ROI crop this view
/// stretches each axis independently, trading shape fidelity for a stable,
/// position-free rendering of the pose topology. A hand collapsed below
/// `min_extent` on either axis leaves the grid empty.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn render_grid(landmarks: &LandmarkSet, config: &GridConfig) -> RgbImage {
    let size = config.canvas_size;
    let mut canvas = RgbImage::new(size, size);
    draw_background_grid(&mut canvas, config.spacing);

    let (mut min_x, mut min_y) = (f32::INFINITY, f32::INFINITY);
    let (mut max_x, mut max_y) = (f32::NEG_INFINITY, f32::NEG_INFINITY);
    for landmark in landmarks.iter() {
        min_x = min_x.min(landmark.x);
        min_y = min_y.min(landmark.y);
        max_x = max_x.max(landmark.x);
        max_y = max_y.max(landmark.y);
    }
    let (span_x, span_y) = (max_x - min_x, max_y - min_y);
    if !(span_x >= config.min_extent && span_y >= config.min_extent) {
        debug!("hand extent below {} on one axis, grid left empty", config.min_extent);
        return canvas;
    }

    let side = size as f32;
    let points: Vec<(f32, f32)> = landmarks
        .iter()
        .map(|landmark| {
            let x = (landmark.x - min_x) / span_x * side;
            let y = side - (landmark.y - min_y) / span_y * side;
            (x, y)
        })
        .collect();
    overlay::draw_skeleton(&mut canvas, &points, &CONNECTIONS);
    canvas
}

fn draw_background_grid(canvas: &mut RgbImage, spacing: u32) {
    let (width, height) = canvas.dimensions();
    let spacing = spacing.max(1) as usize;
    for x in (0..width).step_by(spacing) {
        for y in 0..height {
            canvas.put_pixel(x, y, GRID_COLOR);
        }
    }
    for y in (0..height).step_by(spacing) {
        for x in 0..width {
            canvas.put_pixel(x, y, GRID_COLOR);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::landmarks::Landmark;
    use crate::schema::NUM_LANDMARKS;

    fn hand_in_rect(x0: f32, y0: f32, x1: f32, y1: f32) -> LandmarkSet {
        let mut points = [Landmark::default(); NUM_LANDMARKS];
        for (index, point) in points.iter_mut().enumerate() {
            let t = index as f32 / (NUM_LANDMARKS - 1) as f32;
            *point = Landmark::new(x0 + (x1 - x0) * t, y0 + (y1 - y0) * t, 0.0);
        }
        LandmarkSet::new(points)
    }

    #[test]
    fn background_grid_lines_are_drawn() {
        let canvas = render_grid(&hand_in_rect(0.2, 0.2, 0.2, 0.2), &GridConfig::default());
        assert_eq!(*canvas.get_pixel(50, 17), GRID_COLOR);
        assert_eq!(*canvas.get_pixel(17, 100), GRID_COLOR);
        // off-grid background stays black
        assert_eq!(*canvas.get_pixel(17, 23), Rgb([0, 0, 0]));
    }

    #[test]
    fn collapsed_hand_leaves_the_grid_empty() {
        let canvas = render_grid(&hand_in_rect(0.5, 0.5, 0.505, 0.8), &GridConfig::default());
        // x extent 0.005 is below the threshold: no white bones anywhere
        assert!(canvas.pixels().all(|pixel| *pixel != overlay::BONE_COLOR));
    }

    #[test]
    fn y_axis_is_flipped() {
        // first point carries the box's largest y; the flip sends it to the
        // canvas top
        let hand = hand_in_rect(0.3, 0.7, 0.6, 0.3);
        let canvas = render_grid(&hand, &GridConfig::default());
        let top_left_green =
            (0..8).any(|x| (0..8).any(|y| *canvas.get_pixel(x, y) == overlay::LANDMARK_COLOR));
        assert!(top_left_green);
    }
}
