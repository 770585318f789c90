use image::{imageops, imageops::FilterType, RgbImage};

use mudra_utils::numerical::{aspect_fit_scale, centered_offset};

/// Aspect-fit a whole frame into a target rectangle, centered, with
/// zero-filled borders.
///
/// Shares the fit math with ROI extraction but operates on the full frame;
/// the compositing layer uses it for the main camera view next to the
/// per-hand crops.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
pub fn letterbox(frame: &RgbImage, target_w: u32, target_h: u32) -> RgbImage {
    let mut canvas = RgbImage::new(target_w, target_h);
    let (width, height) = frame.dimensions();
    if width == 0 || height == 0 || target_w == 0 || target_h == 0 {
        return canvas;
    }
    let scale = aspect_fit_scale(width as f32, height as f32, target_w as f32, target_h as f32);
    let new_w = ((width as f32 * scale) as u32).clamp(1, target_w);
    let new_h = ((height as f32 * scale) as u32).clamp(1, target_h);
    let resized = imageops::resize(frame, new_w, new_h, FilterType::Triangle);
    imageops::replace(
        &mut canvas,
        &resized,
        i64::from(centered_offset(target_w, new_w)),
        i64::from(centered_offset(target_h, new_h)),
    );
    canvas
}
