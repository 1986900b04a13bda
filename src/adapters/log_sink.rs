//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing one line per touch event to the
//! ESP-IDF logger (UART / USB-CDC in production).

use log::info;

use crate::app::events::TouchEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`TouchEvent`] to the serial console as
/// `"<n> touch <press|hold|release>"`.
#[derive(Debug, Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &TouchEvent) {
        info!("{}", event);
    }
}
