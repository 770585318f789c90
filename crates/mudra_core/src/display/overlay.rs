//! Pixel-level skeleton painting on `image` buffers.
//!
//! The canvases here are small fixed-size squares, so dots and segments are
//! written directly into the buffer, clipped at the edges.

use image::{Rgb, RgbImage};

/// Joint dot color, green as in the upstream renderer.
pub const LANDMARK_COLOR: Rgb<u8> = Rgb([0, 255, 0]);
/// Bone segment color.
pub const BONE_COLOR: Rgb<u8> = Rgb([255, 255, 255]);
/// Joint dot radius in pixels.
pub const LANDMARK_RADIUS: i32 = 3;

/// Paint a filled dot at every point.
#[allow(clippy::cast_possible_truncation)]
pub fn draw_points(image: &mut RgbImage, points: &[(f32, f32)], radius: i32, color: Rgb<u8>) {
    for &(x, y) in points {
        if !x.is_finite() || !y.is_finite() {
            continue;
        }
        draw_dot(image, x.round() as i64, y.round() as i64, radius, color);
    }
}

fn draw_dot(image: &mut RgbImage, cx: i64, cy: i64, radius: i32, color: Rgb<u8>) {
    let r = i64::from(radius);
    for dy in -r..=r {
        for dx in -r..=r {
            if dx * dx + dy * dy > r * r {
                continue;
            }
            put_pixel_clipped(image, cx + dx, cy + dy, color);
        }
    }
}

/// Paint a straight segment between two points.
#[allow(clippy::cast_possible_truncation)]
pub fn draw_segment(image: &mut RgbImage, from: (f32, f32), to: (f32, f32), color: Rgb<u8>) {
    if !(from.0.is_finite() && from.1.is_finite() && to.0.is_finite() && to.1.is_finite()) {
        return;
    }
    let (dx, dy) = (to.0 - from.0, to.1 - from.1);
    let steps = dx.abs().max(dy.abs()).ceil().max(1.0) as i32;
    for i in 0..=steps {
        let t = i as f32 / steps as f32;
        let x = (from.0 + dx * t).round() as i64;
        let y = (from.1 + dy * t).round() as i64;
        put_pixel_clipped(image, x, y, color);
    }
}

/// Bones first, then joint dots on top.
pub fn draw_skeleton(image: &mut RgbImage, points: &[(f32, f32)], connections: &[(usize, usize)]) {
    for &(a, b) in connections {
        if let (Some(&from), Some(&to)) = (points.get(a), points.get(b)) {
            draw_segment(image, from, to, BONE_COLOR);
        }
    }
    draw_points(image, points, LANDMARK_RADIUS, LANDMARK_COLOR);
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn put_pixel_clipped(image: &mut RgbImage, x: i64, y: i64, color: Rgb<u8>) {
    let (width, height) = image.dimensions();
    if x < 0 || y < 0 || x >= i64::from(width) || y >= i64::from(height) {
        return;
    }
    image.put_pixel(x as u32, y as u32, color);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_paints_its_center() {
        let mut image = RgbImage::new(20, 20);
        draw_points(&mut image, &[(10.0, 10.0)], LANDMARK_RADIUS, LANDMARK_COLOR);
        assert_eq!(*image.get_pixel(10, 10), LANDMARK_COLOR);
    }

    #[test]
    fn out_of_bounds_points_are_clipped_without_panicking() {
        let mut image = RgbImage::new(8, 8);
        draw_points(
            &mut image,
            &[(-5.0, -5.0), (100.0, 3.0), (f32::NAN, 1.0)],
            LANDMARK_RADIUS,
            LANDMARK_COLOR,
        );
        draw_segment(&mut image, (-10.0, -10.0), (30.0, 30.0), BONE_COLOR);
    }

    #[test]
    fn segment_paints_both_endpoints() {
        let mut image = RgbImage::new(30, 30);
        draw_segment(&mut image, (2.0, 2.0), (25.0, 14.0), BONE_COLOR);
        assert_eq!(*image.get_pixel(2, 2), BONE_COLOR);
        assert_eq!(*image.get_pixel(25, 14), BONE_COLOR);
    }
}
