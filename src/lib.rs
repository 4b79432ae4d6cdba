#![no_std]

pub mod color;
pub mod current;
pub mod driver;
pub mod frame_scheduler;
pub mod log;
pub mod math8;
pub mod renderer;
pub mod ring;

pub use color::{Color, Rgb, interpolate, wheel};
pub use current::estimate_current;
pub use driver::SmartLedsRing;
pub use frame_scheduler::{FrameResult, FrameScheduler};
pub use log::{LogLine, LogQueue, LogSink, QueueSink};
pub use renderer::{DEFAULT_CURRENT_LIMIT, FrameReport, PixelError, Renderer, RingsConfig};
pub use ring::{INNER_RING_LED_COUNT, OUTER_RING_LED_COUNT, Ring, RingConfig, RingId};
pub use embassy_time::{Duration, Instant};

/// Abstract LED ring driver trait
///
/// Implement this trait to support different hardware platforms.
/// The renderer is generic over this trait, one instance per ring.
pub trait RingDriver {
    /// Prepare the hardware for output
    fn begin(&mut self);

    /// Set the brightness applied to the whole ring (0-255)
    fn set_brightness(&mut self, brightness: u8);

    /// Buffer the color of a pixel by its wire-order index
    fn set_pixel(&mut self, index: usize, color: Color);

    /// Latch the buffered pixels onto the LEDs
    fn show(&mut self);
}

impl<D: RingDriver + ?Sized> RingDriver for &mut D {
    fn begin(&mut self) {
        (**self).begin();
    }

    fn set_brightness(&mut self, brightness: u8) {
        (**self).set_brightness(brightness);
    }

    fn set_pixel(&mut self, index: usize, color: Color) {
        (**self).set_pixel(index, color);
    }

    fn show(&mut self) {
        (**self).show();
    }
}
