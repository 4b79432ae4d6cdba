use crate::color::Color;

const BAND: u8 = 85;

/// Color wheel lookup
///
/// Walks red -> blue -> green -> red as `position` goes from 0 to 255.
/// Both ends of the range are pure red, so the cycle wraps without a seam.
pub const fn wheel(position: u8) -> Color {
    let mut pos = 255 - position;
    if pos < BAND {
        return Color::pack(255 - pos * 3, 0, pos * 3);
    }
    if pos < BAND * 2 {
        pos -= BAND;
        return Color::pack(0, pos * 3, 255 - pos * 3);
    }
    pos -= BAND * 2;
    Color::pack(pos * 3, 255 - pos * 3, 0)
}
