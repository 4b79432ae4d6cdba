//! Log sinks for renderer diagnostics.
//!
//! The renderer only reports rejected pixel writes. Where those messages end
//! up is the host's choice: a [`LogQueue`] hands them to a transport task
//! (UDP, serial, ...), [`PrintlnSink`] prints them directly and `()` drops
//! them.

use core::{
    cell::RefCell,
    fmt::{self, Write},
};

use critical_section::Mutex;
use heapless::{Deque, String};

#[cfg(feature = "esp32-log")]
use esp_println::println;

/// Maximum length of a single log line in bytes
pub const LOG_LINE_CAPACITY: usize = 96;

/// A single fixed-capacity log line
pub type LogLine = String<LOG_LINE_CAPACITY>;

/// Destination for text log messages
pub trait LogSink {
    /// Record one message
    fn log(&mut self, message: &str);
}

impl LogSink for () {
    fn log(&mut self, _message: &str) {}
}

impl<S: LogSink + ?Sized> LogSink for &mut S {
    fn log(&mut self, message: &str) {
        (**self).log(message);
    }
}

/// Format a message into a log line
///
/// Output that does not fit is cut at the capacity.
pub fn format_line(args: fmt::Arguments<'_>) -> LogLine {
    let mut line = LogLine::new();
    // On overflow the failing chunk is skipped, whatever fit before it stays.
    let _ = line.write_fmt(args);
    line
}

/// Copy a message into a log line, cutting it on a char boundary
fn to_line(message: &str) -> LogLine {
    let mut end = message.len().min(LOG_LINE_CAPACITY);
    while !message.is_char_boundary(end) {
        end -= 1;
    }
    let mut line = LogLine::new();
    // `end` never exceeds the capacity
    let _ = line.push_str(&message[..end]);
    line
}

struct QueueState<const DEPTH: usize> {
    lines: Deque<LogLine, DEPTH>,
    dropped: u32,
}

/// A bounded log queue shared between the renderer and a log transport.
///
/// Synchronized with critical sections, so it can live in a `static` and be
/// drained from another task or interrupt. When full, new lines are dropped
/// and counted.
pub struct LogQueue<const DEPTH: usize> {
    inner: Mutex<RefCell<QueueState<DEPTH>>>,
}

impl<const DEPTH: usize> LogQueue<DEPTH> {
    /// Create a new empty queue.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(QueueState {
                lines: Deque::new(),
                dropped: 0,
            })),
        }
    }

    /// Get a sink that appends to this queue.
    pub const fn sink(&self) -> QueueSink<'_, DEPTH> {
        QueueSink { queue: self }
    }

    /// Append a message.
    ///
    /// Returns `false` if the queue was full and the message was dropped.
    pub fn push(&self, message: &str) -> bool {
        let line = to_line(message);
        critical_section::with(|cs| {
            let mut state = self.inner.borrow(cs).borrow_mut();
            if state.lines.push_back(line).is_err() {
                state.dropped = state.dropped.saturating_add(1);
                return false;
            }
            true
        })
    }

    /// Pop the oldest line, if any.
    pub fn try_receive(&self) -> Option<LogLine> {
        critical_section::with(|cs| self.inner.borrow(cs).borrow_mut().lines.pop_front())
    }

    /// Number of queued lines.
    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().lines.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of lines dropped because the queue was full.
    pub fn dropped(&self) -> u32 {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().dropped)
    }
}

impl<const DEPTH: usize> Default for LogQueue<DEPTH> {
    fn default() -> Self {
        Self::new()
    }
}

/// A [`LogSink`] handle for a [`LogQueue`].
#[derive(Clone, Copy)]
pub struct QueueSink<'a, const DEPTH: usize> {
    queue: &'a LogQueue<DEPTH>,
}

impl<const DEPTH: usize> LogSink for QueueSink<'_, DEPTH> {
    fn log(&mut self, message: &str) {
        self.queue.push(message);
    }
}

/// Sink printing every message to the ESP console
#[cfg(feature = "esp32-log")]
#[derive(Debug, Clone, Copy, Default)]
pub struct PrintlnSink;

#[cfg(feature = "esp32-log")]
impl LogSink for PrintlnSink {
    fn log(&mut self, message: &str) {
        println!("{}", message);
    }
}
