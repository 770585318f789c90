use ndarray as nd;

/// Uniform scale that fits a source rectangle inside a destination rectangle
/// without distorting it.
#[must_use]
pub fn aspect_fit_scale(src_w: f32, src_h: f32, dst_w: f32, dst_h: f32) -> f32 {
    (dst_w / src_w).min(dst_h / src_h)
}

/// Top/left offset that centers `inner` inside `outer`. Saturates to 0 when
/// `inner` is larger.
#[must_use]
pub fn centered_offset(outer: u32, inner: u32) -> u32 {
    outer.saturating_sub(inner) / 2
}

/// Cosine of the angle between two equal-length vectors.
///
/// A zero-magnitude input yields 0.0 instead of a division fault; callers
/// treat that as "no meaningful similarity", not as an error.
#[must_use]
pub fn cosine_similarity(a: nd::ArrayView1<f32>, b: nd::ArrayView1<f32>) -> f32 {
    debug_assert_eq!(a.len(), b.len(), "vectors of differing length cannot be compared");
    let denom = a.dot(&a).sqrt() * b.dot(&b).sqrt();
    if denom <= f32::EPSILON {
        return 0.0;
    }
    a.dot(&b) / denom
}
