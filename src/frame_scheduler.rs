//! Frame scheduling and timing utilities.
//!
//! Provides portable frame pacing for smooth fades without async/await or
//! platform-specific timers. The caller is responsible for sleeping/waiting
//! between frames.

use embassy_time::{Duration, Instant};

use crate::{
    RingDriver,
    log::LogSink,
    renderer::{FrameReport, Renderer},
};

/// Default target frame rate (50 FPS).
pub const DEFAULT_FPS: u32 = 50;

/// Default frame duration based on target FPS.
pub const DEFAULT_FRAME_DURATION: Duration = Duration::from_millis(1000 / DEFAULT_FPS as u64);

/// Default blend factor applied on every frame.
pub const DEFAULT_BLEND_FACTOR: f32 = 0.1;

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// The deadline for the next frame.
    pub next_deadline: Instant,
    /// How long to wait until the next frame (may be zero if behind schedule).
    pub sleep_duration: Duration,
    /// What the rendered frame pushed to the rings.
    pub report: FrameReport,
}

/// Fixed-rate driver for smooth ring fades.
///
/// This scheduler:
/// - Tracks frame timing with drift correction
/// - Renders one fade step per frame
/// - Returns timing info so the caller can sleep appropriately
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = FrameScheduler::new(renderer);
///
/// loop {
///     let now = get_current_time_ms();
///     let result = scheduler.tick(Instant::from_millis(now));
///
///     // Platform-specific sleep
///     sleep_ms(result.sleep_duration.as_millis() as u64);
/// }
/// ```
pub struct FrameScheduler<O, I, L, const OUTER_LEDS: usize, const INNER_LEDS: usize> {
    renderer: Renderer<O, I, L, OUTER_LEDS, INNER_LEDS>,
    next_frame: Instant,
    frame_duration: Duration,
    blend_factor: f32,
}

impl<O, I, L, const OUTER_LEDS: usize, const INNER_LEDS: usize>
    FrameScheduler<O, I, L, OUTER_LEDS, INNER_LEDS>
where
    O: RingDriver,
    I: RingDriver,
    L: LogSink,
{
    /// Create a new frame scheduler.
    ///
    /// Uses `DEFAULT_FRAME_DURATION` (50 FPS) and `DEFAULT_BLEND_FACTOR`.
    pub fn new(renderer: Renderer<O, I, L, OUTER_LEDS, INNER_LEDS>) -> Self {
        Self::with_frame_duration(renderer, DEFAULT_FRAME_DURATION)
    }

    /// Create a new frame scheduler with custom frame duration.
    pub fn with_frame_duration(
        renderer: Renderer<O, I, L, OUTER_LEDS, INNER_LEDS>,
        frame_duration: Duration,
    ) -> Self {
        Self {
            renderer,
            next_frame: Instant::from_millis(0),
            frame_duration,
            blend_factor: DEFAULT_BLEND_FACTOR,
        }
    }

    /// Set the blend factor used for every frame.
    #[must_use]
    pub fn with_blend_factor(mut self, blend_factor: f32) -> Self {
        self.blend_factor = blend_factor;
        self
    }

    /// Process one frame and return timing information.
    ///
    /// This method:
    /// 1. Applies drift correction if we've fallen too far behind
    /// 2. Renders one fade step
    /// 3. Returns the deadline for the next frame
    ///
    /// The caller is responsible for waiting until `next_deadline` before
    /// calling `tick` again.
    pub fn tick(&mut self, now: Instant) -> FrameResult {
        // Skip the backlog after a long stall instead of bursting to catch up
        let max_drift_ms = self.frame_duration.as_millis() * 2;
        if now.as_millis() > self.next_frame.as_millis() + max_drift_ms {
            self.next_frame = now;
        }

        let report = self.renderer.render_smooth(self.blend_factor);

        self.next_frame += self.frame_duration;

        let sleep_duration = if self.next_frame.as_millis() > now.as_millis() {
            Duration::from_millis(self.next_frame.as_millis() - now.as_millis())
        } else {
            Duration::from_millis(0)
        };

        FrameResult {
            next_deadline: self.next_frame,
            sleep_duration,
            report,
        }
    }

    pub fn blend_factor(&self) -> f32 {
        self.blend_factor
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame_duration
    }

    /// Get a reference to the renderer.
    pub fn renderer(&self) -> &Renderer<O, I, L, OUTER_LEDS, INNER_LEDS> {
        &self.renderer
    }

    /// Get a mutable reference to the renderer.
    pub fn renderer_mut(&mut self) -> &mut Renderer<O, I, L, OUTER_LEDS, INNER_LEDS> {
        &mut self.renderer
    }

    /// Release the renderer.
    pub fn into_renderer(self) -> Renderer<O, I, L, OUTER_LEDS, INNER_LEDS> {
        self.renderer
    }
}
