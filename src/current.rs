//! Per-LED current estimation
//!
//! A linear model: every fully lit channel draws [`MILLIAMPS_PER_CHANNEL`] at
//! full brightness. Integer math only, truncating in a fixed order so the
//! numbers line up with existing supply calibrations.

use crate::color::Color;

/// Draw of one fully lit channel at full brightness
pub const MILLIAMPS_PER_CHANNEL: u32 = 20;

/// Estimate the draw of one LED showing `color` at `brightness`, in mA
#[allow(clippy::cast_possible_truncation, clippy::cast_lossless)]
pub const fn estimate_current(color: Color, brightness: u8) -> u16 {
    let (r, g, b) = color.unpack();

    let mut estimated = MILLIAMPS_PER_CHANNEL * r as u32
        + MILLIAMPS_PER_CHANNEL * g as u32
        + MILLIAMPS_PER_CHANNEL * b as u32;
    estimated /= 255;
    estimated = (estimated * brightness as u32) / 255;

    estimated as u16
}
