//! 8-bit channel arithmetic shared by the color model and the throttle.
//!
//! Float results are truncated toward zero and then narrowed with
//! wraparound, like an unchecked cast to an 8-bit integer.

/// Narrow a float to 8 bits: truncate toward zero, then wrap.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn narrow8(value: f32) -> u8 {
    libm::truncf(value) as i32 as u8
}

/// Move `a` toward `b` by `factor`
///
/// `factor` is not clamped, values outside `0.0..=1.0` extrapolate and wrap.
#[inline]
pub fn lerp8(a: u8, b: u8, factor: f32) -> u8 {
    let delta = i16::from(b) - i16::from(a);
    narrow8(f32::from(a) + f32::from(delta) * factor)
}

/// Scale `value` by `numerator / denominator` in floating point.
///
/// Used to throttle brightness: `brightness * limit / total`.
#[inline]
#[allow(clippy::cast_precision_loss)]
pub fn scale_by_ratio(value: u8, numerator: u16, denominator: u32) -> u8 {
    if denominator == 0 {
        return value;
    }
    narrow8(f32::from(value) * f32::from(numerator) / denominator as f32)
}
