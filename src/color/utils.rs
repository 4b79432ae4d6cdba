use crate::{color::Color, math8::lerp8};

/// Interpolate between two colors
///
/// # Arguments
/// * `from` - Start color
/// * `to` - End color
/// * `factor` - Position on the path (0.0 = `from`, 1.0 = `to`)
///
/// Each channel is truncated toward zero, so a fractional factor
/// approaches `to` from the `from` side and may stop one step short of it.
#[inline]
pub fn interpolate(from: Color, to: Color, factor: f32) -> Color {
    let (r1, g1, b1) = from.unpack();
    let (r2, g2, b2) = to.unpack();
    Color::pack(
        lerp8(r1, r2, factor),
        lerp8(g1, g2, factor),
        lerp8(b1, b2, factor),
    )
}
