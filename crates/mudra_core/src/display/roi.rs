use image::{imageops, imageops::FilterType, RgbImage};
use log::debug;

use mudra_utils::numerical::{aspect_fit_scale, centered_offset};

use super::overlay;
use crate::common::landmarks::LandmarkSet;
use crate::common::types::CoordinateSpace;

/// Options for ROI extraction.
#[derive(Clone, Debug)]
pub struct RoiConfig {
    /// Side length of the square output canvas.
    pub canvas_size: u32,
    /// Coordinate convention of incoming landmarks.
    pub coordinate_space: CoordinateSpace,
    /// Paint joint dots onto the crop before placement.
    pub draw_overlay: bool,
}

impl Default for RoiConfig {
    fn default() -> Self {
        Self {
            canvas_size: 400,
            coordinate_space: CoordinateSpace::Normalized,
            draw_overlay: true,
        }
    }
}

/// One hand's aspect-correct crop, centered on a square canvas.
///
/// Recomputed from scratch every call; it carries no identity beyond the
/// frame it was cut from.
#[derive(Clone, Debug)]
pub struct RoiFrame {
    /// `canvas_size` x `canvas_size` buffer; area outside the crop stays
    /// zero-filled.
    pub canvas: RgbImage,
    /// Landmarks re-projected into the scaled crop's coordinate frame, one
    /// per schema index. Empty when no crop exists.
    pub points: Vec<(f32, f32)>,
    /// Top-left corner of the placed crop within the canvas.
    pub crop_origin: (u32, u32),
    /// Size of the placed crop; (0, 0) for a blank frame.
    pub crop_size: (u32, u32),
}

impl RoiFrame {
    fn blank(canvas_size: u32) -> Self {
        Self {
            canvas: RgbImage::new(canvas_size, canvas_size),
            points: Vec::new(),
            crop_origin: (0, 0),
            crop_size: (0, 0),
        }
    }

    /// True when the bounding box degenerated and nothing was cropped.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.crop_size == (0, 0)
    }
}

/// Crop the source frame around one hand and fit the crop onto the square
/// canvas, preserving aspect ratio and centering the result.
///
/// A zero-area bounding box, which happens naturally at frame edges and
/// under motion blur, yields a blank frame rather than an error.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
pub fn extract(landmarks: &LandmarkSet, frame: &RgbImage, config: &RoiConfig) -> RoiFrame {
    let (frame_w, frame_h) = frame.dimensions();
    let pixels = to_pixel_coords(landmarks, frame_w, frame_h, config.coordinate_space);
    let (min_x, min_y, max_x, max_y) = bounding_box(&pixels);

    if !(max_x - min_x > 0.0 && max_y - min_y > 0.0) {
        debug!("degenerate hand bounding box, returning blank roi");
        return RoiFrame::blank(config.canvas_size);
    }

    // integer crop window, truncated and clamped to the frame
    let x0 = min_x.max(0.0) as u32;
    let y0 = min_y.max(0.0) as u32;
    let x1 = (max_x.max(0.0) as u32).min(frame_w);
    let y1 = (max_y.max(0.0) as u32).min(frame_h);
    if x1 <= x0 || y1 <= y0 {
        debug!("hand bounding box falls outside the frame, returning blank roi");
        return RoiFrame::blank(config.canvas_size);
    }
    let (crop_w, crop_h) = (x1 - x0, y1 - y0);
    let crop = imageops::crop_imm(frame, x0, y0, crop_w, crop_h).to_image();

    let canvas_size = config.canvas_size;
    let scale = aspect_fit_scale(crop_w as f32, crop_h as f32, canvas_size as f32, canvas_size as f32);
    let scaled_w = ((crop_w as f32 * scale).round() as u32).clamp(1, canvas_size);
    let scaled_h = ((crop_h as f32 * scale).round() as u32).clamp(1, canvas_size);
    let mut scaled = imageops::resize(&crop, scaled_w, scaled_h, FilterType::Triangle);

    // same scale and bounding-box origin as the crop itself
    let points: Vec<(f32, f32)> = pixels
        .iter()
        .map(|&(x, y)| ((x - min_x) * scale, (y - min_y) * scale))
        .collect();
    if config.draw_overlay {
        overlay::draw_points(&mut scaled, &points, overlay::LANDMARK_RADIUS, overlay::LANDMARK_COLOR);
    }

    let crop_origin = (
        centered_offset(canvas_size, scaled_w),
        centered_offset(canvas_size, scaled_h),
    );
    let mut canvas = RgbImage::new(canvas_size, canvas_size);
    imageops::replace(
        &mut canvas,
        &scaled,
        i64::from(crop_origin.0),
        i64::from(crop_origin.1),
    );

    RoiFrame { canvas, points, crop_origin, crop_size: (scaled_w, scaled_h) }
}

#[allow(clippy::cast_precision_loss)]
fn to_pixel_coords(
    landmarks: &LandmarkSet,
    frame_w: u32,
    frame_h: u32,
    space: CoordinateSpace,
) -> Vec<(f32, f32)> {
    landmarks
        .iter()
        .map(|landmark| match space {
            CoordinateSpace::Normalized => {
                (landmark.x * frame_w as f32, landmark.y * frame_h as f32)
            }
            CoordinateSpace::Pixel => (landmark.x, landmark.y),
        })
        .collect()
}

fn bounding_box(points: &[(f32, f32)]) -> (f32, f32, f32, f32) {
    let mut bounds = (f32::INFINITY, f32::INFINITY, f32::NEG_INFINITY, f32::NEG_INFINITY);
    for &(x, y) in points {
        bounds.0 = bounds.0.min(x);
        bounds.1 = bounds.1.min(y);
        bounds.2 = bounds.2.max(x);
        bounds.3 = bounds.3.max(y);
    }
    bounds
}
