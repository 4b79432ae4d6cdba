//! Per-ring pixel state
//!
//! Every ring keeps two buffers indexed by logical pixel position: `current`
//! is what was last sent to the hardware and `target` is what the caller
//! wants to see. Rendering moves `current` toward `target` and writes the
//! result at the rotated physical index.

use core::fmt;

use crate::{
    RingDriver,
    color::{Color, interpolate, wheel},
    current::estimate_current,
};

/// Default LED count of the outer ring
pub const OUTER_RING_LED_COUNT: usize = 90;
/// Default LED count of the inner ring
pub const INNER_RING_LED_COUNT: usize = 12;

/// Ring selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RingId {
    Outer,
    Inner,
}

impl RingId {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Outer => "outer",
            Self::Inner => "inner",
        }
    }
}

impl fmt::Display for RingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Initial settings of a ring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RingConfig {
    /// Configured brightness (0-255)
    pub brightness: u8,
    /// Rotation between logical and physical pixel index
    pub offset: i32,
}

impl Default for RingConfig {
    fn default() -> Self {
        Self {
            brightness: 255,
            offset: 0,
        }
    }
}

/// Pixel buffers and settings of one ring with `N` LEDs
#[derive(Debug, Clone)]
pub struct Ring<const N: usize> {
    current: [Color; N],
    target: [Color; N],
    offset: i32,
    brightness: u8,
}

impl<const N: usize> Ring<N> {
    /// Create a black ring
    pub const fn new(config: RingConfig) -> Self {
        Self {
            current: [Color::BLACK; N],
            target: [Color::BLACK; N],
            offset: config.offset,
            brightness: config.brightness,
        }
    }

    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Colors as last rendered, by logical index
    pub fn current(&self) -> &[Color; N] {
        &self.current
    }

    /// Requested colors, by logical index
    pub fn target(&self) -> &[Color; N] {
        &self.target
    }

    pub const fn offset(&self) -> i32 {
        self.offset
    }

    pub const fn set_offset(&mut self, offset: i32) {
        self.offset = offset;
    }

    pub const fn brightness(&self) -> u8 {
        self.brightness
    }

    pub const fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness;
    }

    /// Set the target color of a logical pixel
    ///
    /// Returns `false` and leaves the buffer untouched if `index` is out of range.
    pub fn set_target(&mut self, index: usize, color: Color) -> bool {
        match self.target.get_mut(index) {
            Some(slot) => {
                *slot = color;
                true
            }
            None => false,
        }
    }

    /// Set every target to `color`
    pub fn fill(&mut self, color: Color) {
        self.target = [color; N];
    }

    /// Set every target to black
    ///
    /// `current` is kept, so the next render fades out instead of snapping.
    pub fn flush(&mut self) {
        self.fill(Color::BLACK);
    }

    /// Spread one full turn of the color wheel around the ring
    #[allow(clippy::cast_possible_truncation)]
    pub fn fill_rainbow(&mut self, phase: u8) {
        for (index, slot) in self.target.iter_mut().enumerate() {
            let step = (index * 256 / N) as u8;
            *slot = wheel(phase.wrapping_add(step));
        }
    }

    /// Map a logical index to the wire-order index
    pub const fn physical_index(&self, index: usize) -> usize {
        remap::<N>(index, self.offset)
    }

    /// Step every pixel toward its target and write it to `driver`
    ///
    /// Returns the estimated draw of the new frame at the configured
    /// brightness, in mA.
    pub fn draw<D: RingDriver + ?Sized>(&mut self, driver: &mut D, factor: f32) -> u32 {
        let offset = self.offset;
        let brightness = self.brightness;
        let mut total_current = 0u32;

        let pixels = self.current.iter_mut().zip(self.target.iter());
        for (index, (current, target)) in pixels.enumerate() {
            let color = interpolate(*current, *target, factor);
            driver.set_pixel(remap::<N>(index, offset), color);
            *current = color;

            total_current += u32::from(estimate_current(color, brightness));
        }
        total_current
    }
}

/// `(count + index + offset) mod count`, always in `0..count`
#[allow(
    clippy::cast_lossless,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss
)]
const fn remap<const N: usize>(index: usize, offset: i32) -> usize {
    if N == 0 {
        return 0;
    }
    let count = N as i64;
    (count + index as i64 + offset as i64).rem_euclid(count) as usize
}

impl<const N: usize> Default for Ring<N> {
    fn default() -> Self {
        Self::new(RingConfig::default())
    }
}
