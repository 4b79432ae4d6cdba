mod utils;
mod wheel;

use smart_leds::RGB8;
pub use utils::interpolate;
pub use wheel::wheel;

pub type Rgb = RGB8;

/// 24-bit color packed as `0xRRGGBB`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Color(u32);

impl Color {
    pub const BLACK: Self = Self(0);
    pub const WHITE: Self = Self(0x00FF_FFFF);

    const MASK: u32 = 0x00FF_FFFF;

    /// Combine three channels into one packed color
    #[allow(clippy::cast_lossless)]
    pub const fn pack(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Split the color back into its channels
    #[allow(clippy::cast_possible_truncation)]
    pub const fn unpack(self) -> (u8, u8, u8) {
        (
            ((self.0 >> 16) & 0xFF) as u8,
            ((self.0 >> 8) & 0xFF) as u8,
            (self.0 & 0xFF) as u8,
        )
    }

    /// Create a color from a raw `0xRRGGBB` value
    ///
    /// Bits above 24 are discarded.
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw & Self::MASK)
    }

    /// Packed `0xRRGGBB` value
    pub const fn raw(self) -> u32 {
        self.0
    }

    pub const fn r(self) -> u8 {
        self.unpack().0
    }

    pub const fn g(self) -> u8 {
        self.unpack().1
    }

    pub const fn b(self) -> u8 {
        self.unpack().2
    }

    pub const fn is_black(self) -> bool {
        self.0 == 0
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Self::pack(rgb.r, rgb.g, rgb.b)
    }
}

impl From<Color> for Rgb {
    fn from(color: Color) -> Self {
        let (r, g, b) = color.unpack();
        Rgb { r, g, b }
    }
}
