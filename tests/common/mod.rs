//! Shared fakes for the ring composer integration tests

#![allow(dead_code)] // Each test file uses a different subset

use myrtio_ring_composer::{Color, LogSink, Renderer, RingDriver, RingsConfig};

pub const RED: Color = Color::pack(255, 0, 0);
pub const GREEN: Color = Color::pack(0, 255, 0);
pub const BLUE: Color = Color::pack(0, 0, 255);
pub const WHITE: Color = Color::WHITE;
pub const BLACK: Color = Color::BLACK;

/// Ring driver that keeps the latest frame and counts calls
#[derive(Debug, Clone)]
pub struct MockDriver {
    pub pixels: Vec<Color>,
    pub brightness: Option<u8>,
    pub brightness_history: Vec<u8>,
    pub writes: usize,
    pub begins: usize,
    pub shows: usize,
}

impl MockDriver {
    pub fn new(count: usize) -> Self {
        Self {
            pixels: vec![BLACK; count],
            brightness: None,
            brightness_history: Vec::new(),
            writes: 0,
            begins: 0,
            shows: 0,
        }
    }
}

impl RingDriver for MockDriver {
    fn begin(&mut self) {
        self.begins += 1;
    }

    fn set_brightness(&mut self, brightness: u8) {
        self.brightness = Some(brightness);
        self.brightness_history.push(brightness);
    }

    fn set_pixel(&mut self, index: usize, color: Color) {
        self.pixels[index] = color;
        self.writes += 1;
    }

    fn show(&mut self) {
        self.shows += 1;
    }
}

/// Log sink that keeps every message
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub messages: Vec<String>,
}

impl LogSink for RecordingSink {
    fn log(&mut self, message: &str) {
        self.messages.push(message.to_owned());
    }
}

pub type TestRenderer = Renderer<MockDriver, MockDriver, RecordingSink>;

/// Renderer with the default 90 + 12 LED rings
pub fn renderer(config: &RingsConfig) -> TestRenderer {
    Renderer::new(
        MockDriver::new(90),
        MockDriver::new(12),
        RecordingSink::default(),
        config,
    )
}
