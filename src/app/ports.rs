//! Port traits — the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ ControlState (domain)
//! ```
//!
//! Driven adapters (GPIO, clock, event sinks) implement these traits.  The
//! [`ControlState`](super::service::ControlState) and
//! [`PollTask`](crate::poll_task::PollTask) consume them via generics, so the
//! domain core never touches hardware directly.

use embedded_hal::digital::PinState;

use crate::drivers::hw_init::{HwInitError, PinDirection};

use super::events::TouchEvent;

/// Monotonic, wrapping millisecond counter.
pub type Tick = u32;

// ───────────────────────────────────────────────────────────────
// GPIO port (driven adapter: domain ↔ pins)
// ───────────────────────────────────────────────────────────────

/// Pin-level access by GPIO number.
///
/// Reads are defined never to fail: the hardware always yields a level.
pub trait GpioPort {
    /// Configure `pin` once at start-up.
    fn configure(&mut self, pin: i32, direction: PinDirection) -> Result<(), HwInitError>;

    /// Sample the digital level of an input pin.
    fn read_level(&mut self, pin: i32) -> PinState;

    /// Drive an output pin.
    fn write_level(&mut self, pin: i32, level: PinState);
}

// ───────────────────────────────────────────────────────────────
// Time port
// ───────────────────────────────────────────────────────────────

pub trait TimePort {
    /// Milliseconds since boot, wrapping at `u32::MAX`.
    fn now_ms(&self) -> Tick;
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging)
// ───────────────────────────────────────────────────────────────

/// The polling task reports every [`TouchEvent`] through this port.
/// Adapters decide where they go (serial log, test recorder, etc.).
pub trait EventSink {
    fn emit(&mut self, event: &TouchEvent);
}
