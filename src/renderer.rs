use core::fmt;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::{
    RingDriver,
    color::Color,
    log::{LogSink, format_line},
    math8::scale_by_ratio,
    ring::{INNER_RING_LED_COUNT, OUTER_RING_LED_COUNT, Ring, RingConfig, RingId},
};

/// Current limit used when none is configured, in mA
pub const DEFAULT_CURRENT_LIMIT: u16 = 9999;

/// Blend factor that reaches the target in one frame
pub const INSTANT: f32 = 1.0;

/// Configuration for the ring renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RingsConfig {
    /// Ceiling on the estimated draw of both rings, in mA
    pub current_limit: u16,
    pub outer: RingConfig,
    pub inner: RingConfig,
}

impl Default for RingsConfig {
    fn default() -> Self {
        Self {
            current_limit: DEFAULT_CURRENT_LIMIT,
            outer: RingConfig::default(),
            inner: RingConfig::default(),
        }
    }
}

/// Error returned when a pixel write is rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelError {
    /// The index is not below the ring's pixel count
    IndexOutOfRange {
        ring: RingId,
        index: usize,
        count: usize,
    },
}

impl fmt::Display for PixelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange { ring, index, count } => write!(
                f,
                "pixel {} out of range for {} ring ({} pixels)",
                index, ring, count
            ),
        }
    }
}

/// What a single render pushed to the hardware
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameReport {
    /// Estimated draw of both rings at configured brightness, in mA
    pub total_current: u32,
    /// Brightness sent to the outer ring for this frame
    pub outer_brightness: u8,
    /// Brightness sent to the inner ring for this frame
    pub inner_brightness: u8,
    /// Whether brightness was reduced to respect the current limit
    pub throttled: bool,
}

/// Renderer for an outer and an inner LED ring sharing one power supply
///
/// Owns the pixel buffers of both rings and is the only component that
/// writes to the ring drivers. Callers set target colors and then call
/// [`Renderer::render`] once per frame.
pub struct Renderer<
    O,
    I,
    L,
    const OUTER_LEDS: usize = OUTER_RING_LED_COUNT,
    const INNER_LEDS: usize = INNER_RING_LED_COUNT,
> {
    // External dependencies
    outer_driver: O,
    inner_driver: I,
    logger: L,

    // Internal state
    outer: Ring<OUTER_LEDS>,
    inner: Ring<INNER_LEDS>,
    current_limit: u16,
}

impl<O, I, L, const OUTER_LEDS: usize, const INNER_LEDS: usize>
    Renderer<O, I, L, OUTER_LEDS, INNER_LEDS>
where
    O: RingDriver,
    I: RingDriver,
    L: LogSink,
{
    /// Create a renderer with black rings
    pub fn new(outer_driver: O, inner_driver: I, logger: L, config: &RingsConfig) -> Self {
        Self {
            outer_driver,
            inner_driver,
            logger,
            outer: Ring::new(config.outer),
            inner: Ring::new(config.inner),
            current_limit: config.current_limit,
        }
    }

    /// Initialize both drivers and latch a black frame
    pub fn setup(&mut self) {
        self.outer_driver.begin();
        self.inner_driver.begin();
        self.outer_driver.set_brightness(self.outer.brightness());
        self.inner_driver.set_brightness(self.inner.brightness());
        self.outer_driver.show();
        self.inner_driver.show();
    }

    /// Set the target color of a logical pixel
    ///
    /// Out of range writes are dropped and reported to the log sink.
    pub fn set_pixel(&mut self, ring: RingId, index: usize, color: Color) -> Result<(), PixelError> {
        let accepted = match ring {
            RingId::Outer => self.outer.set_target(index, color),
            RingId::Inner => self.inner.set_target(index, color),
        };
        if accepted {
            return Ok(());
        }

        let err = PixelError::IndexOutOfRange {
            ring,
            index,
            count: self.pixel_count(ring),
        };
        self.logger.log(&format_line(format_args!("ERROR: {}", err)));
        Err(err)
    }

    /// Fade the ring to black on the next renders
    pub fn flush(&mut self, ring: RingId) {
        match ring {
            RingId::Outer => self.outer.flush(),
            RingId::Inner => self.inner.flush(),
        }
    }

    /// Set every target of the ring to `color`
    pub fn fill(&mut self, ring: RingId, color: Color) {
        match ring {
            RingId::Outer => self.outer.fill(color),
            RingId::Inner => self.inner.fill(color),
        }
    }

    /// Target one turn of the color wheel around the ring, starting at `phase`
    pub fn fill_rainbow(&mut self, ring: RingId, phase: u8) {
        match ring {
            RingId::Outer => self.outer.fill_rainbow(phase),
            RingId::Inner => self.inner.fill_rainbow(phase),
        }
    }

    /// Render one frame
    ///
    /// Moves every pixel toward its target by `factor`, then reduces the
    /// brightness of both rings for this frame if the estimated draw exceeds
    /// the current limit.
    pub fn render(&mut self, factor: f32) -> FrameReport {
        let outer_current = self.outer.draw(&mut self.outer_driver, factor);
        let inner_current = self.inner.draw(&mut self.inner_driver, factor);
        let total_current = outer_current + inner_current;

        let limit = self.current_limit;
        let throttled = total_current > u32::from(limit);
        let (outer_brightness, inner_brightness) = if throttled {
            #[cfg(feature = "esp32-log")]
            println!(
                "[Renderer.render] current limit reached: {} mA > {} mA",
                total_current, limit
            );
            (
                scale_by_ratio(self.outer.brightness(), limit, total_current),
                scale_by_ratio(self.inner.brightness(), limit, total_current),
            )
        } else {
            (self.outer.brightness(), self.inner.brightness())
        };
        self.outer_driver.set_brightness(outer_brightness);
        self.inner_driver.set_brightness(inner_brightness);

        self.outer_driver.show();
        self.inner_driver.show();

        FrameReport {
            total_current,
            outer_brightness,
            inner_brightness,
            throttled,
        }
    }

    /// Render the targets as they are
    pub fn render_instant(&mut self) -> FrameReport {
        self.render(INSTANT)
    }

    /// Render one step of a fade toward the targets
    ///
    /// Typical factors are around 0.1 at a fixed frame rate.
    pub fn render_smooth(&mut self, factor: f32) -> FrameReport {
        self.render(factor)
    }

    pub fn set_brightness(&mut self, ring: RingId, brightness: u8) {
        match ring {
            RingId::Outer => self.outer.set_brightness(brightness),
            RingId::Inner => self.inner.set_brightness(brightness),
        }
    }

    /// Configured brightness, unaffected by throttling
    pub fn brightness(&self, ring: RingId) -> u8 {
        match ring {
            RingId::Outer => self.outer.brightness(),
            RingId::Inner => self.inner.brightness(),
        }
    }

    pub fn set_current_limit(&mut self, current_limit: u16) {
        self.current_limit = current_limit;
    }

    pub fn current_limit(&self) -> u16 {
        self.current_limit
    }

    pub fn set_offset(&mut self, ring: RingId, offset: i32) {
        match ring {
            RingId::Outer => self.outer.set_offset(offset),
            RingId::Inner => self.inner.set_offset(offset),
        }
    }

    pub fn set_offsets(&mut self, outer: i32, inner: i32) {
        self.outer.set_offset(outer);
        self.inner.set_offset(inner);
    }

    pub fn offset(&self, ring: RingId) -> i32 {
        match ring {
            RingId::Outer => self.outer.offset(),
            RingId::Inner => self.inner.offset(),
        }
    }

    pub fn pixel_count(&self, ring: RingId) -> usize {
        match ring {
            RingId::Outer => OUTER_LEDS,
            RingId::Inner => INNER_LEDS,
        }
    }

    /// Colors as last rendered, by logical index
    pub fn current(&self, ring: RingId) -> &[Color] {
        match ring {
            RingId::Outer => self.outer.current(),
            RingId::Inner => self.inner.current(),
        }
    }

    /// Requested colors, by logical index
    pub fn target(&self, ring: RingId) -> &[Color] {
        match ring {
            RingId::Outer => self.outer.target(),
            RingId::Inner => self.inner.target(),
        }
    }

    pub fn outer_ring(&self) -> &Ring<OUTER_LEDS> {
        &self.outer
    }

    pub fn inner_ring(&self) -> &Ring<INNER_LEDS> {
        &self.inner
    }

    pub fn outer_driver(&self) -> &O {
        &self.outer_driver
    }

    pub fn outer_driver_mut(&mut self) -> &mut O {
        &mut self.outer_driver
    }

    pub fn inner_driver(&self) -> &I {
        &self.inner_driver
    }

    pub fn inner_driver_mut(&mut self) -> &mut I {
        &mut self.inner_driver
    }

    pub fn logger(&self) -> &L {
        &self.logger
    }
}
