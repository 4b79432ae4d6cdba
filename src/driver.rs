//! Ring driver adapter for `smart-leds` writers.
//!
//! Addressable strip drivers usually take a whole frame at once, while the
//! renderer addresses pixels one by one and sets brightness separately. The
//! adapter buffers the frame and applies brightness when it is shown.

use smart_leds::{SmartLedsWrite, brightness};

use crate::{
    RingDriver,
    color::{Color, Rgb},
};

/// Buffered [`RingDriver`] on top of any [`SmartLedsWrite`] strip
///
/// `N` is the number of LEDs on the strip.
pub struct SmartLedsRing<W, const N: usize>
where
    W: SmartLedsWrite<Color = Rgb>,
{
    writer: W,
    pixels: [Rgb; N],
    brightness: u8,
    last_error: Option<W::Error>,
}

impl<W, const N: usize> SmartLedsRing<W, N>
where
    W: SmartLedsWrite<Color = Rgb>,
{
    /// Wrap a strip writer, starting black at full brightness
    pub const fn new(writer: W) -> Self {
        Self {
            writer,
            pixels: [Rgb { r: 0, g: 0, b: 0 }; N],
            brightness: 255,
            last_error: None,
        }
    }

    /// Buffered frame, before brightness is applied
    pub fn pixels(&self) -> &[Rgb; N] {
        &self.pixels
    }

    /// Brightness that will be applied on the next show
    pub const fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Take the error of the last failed write, if any
    pub fn take_error(&mut self) -> Option<W::Error> {
        self.last_error.take()
    }

    /// Get a reference to the wrapped writer
    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Release the wrapped writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W, const N: usize> RingDriver for SmartLedsRing<W, N>
where
    W: SmartLedsWrite<Color = Rgb>,
{
    fn begin(&mut self) {
        self.pixels = [Rgb::default(); N];
        self.last_error = None;
    }

    fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness;
    }

    fn set_pixel(&mut self, index: usize, color: Color) {
        if let Some(pixel) = self.pixels.get_mut(index) {
            *pixel = color.into();
        }
    }

    fn show(&mut self) {
        let frame = brightness(self.pixels.iter().copied(), self.brightness);
        if let Err(err) = self.writer.write(frame) {
            self.last_error = Some(err);
        }
    }
}
