//! The button polling task.
//!
//! Wakes every `poll_interval_ms`, takes the control-state lock for one
//! whole iteration (read all levels → advance all channels → LED writes),
//! releases it, then reports the iteration's events through the
//! [`EventSink`].  Runs for the lifetime of the firmware.
//!
//! ```text
//!  ┌──────── loop ─────────────────────────────────────────────┐
//!  │ lock ─▶ now_ms ─▶ ControlState::poll ─▶ unlock ─▶ emit    │
//!  │                                   feed watchdog ─▶ sleep  │
//!  └───────────────────────────────────────────────────────────┘
//! ```

use std::sync::MutexGuard;

use embedded_hal::delay::DelayNs;
use log::{debug, info, warn};

use crate::app::ports::{EventSink, GpioPort, TimePort};
use crate::app::service::{ControlState, SharedControl, TickEvents};
use crate::config::TouchConfig;
use crate::drivers::watchdog::Watchdog;

/// Log poll statistics every this many polls (10 s at the default 50 ms).
pub const STATS_EVERY_POLLS: u64 = 200;

/// Acquire the control-state lock, waiting as long as it takes.
///
/// A poisoned lock only means another holder panicked mid-iteration; the
/// state itself is still a valid bitmask plus channel records, so polling
/// carries on with it.
pub fn lock_control<G>(shared: &SharedControl<G>) -> MutexGuard<'_, ControlState<G>> {
    shared.lock().unwrap_or_else(|poisoned| {
        warn!("control state lock poisoned, recovering");
        poisoned.into_inner()
    })
}

pub struct PollTask<G, C, S, D> {
    shared: SharedControl<G>,
    clock: C,
    sink: S,
    delay: D,
    poll_interval_ms: u32,
}

impl<G, C, S, D> PollTask<G, C, S, D>
where
    G: GpioPort,
    C: TimePort,
    S: EventSink,
    D: DelayNs,
{
    pub fn new(shared: SharedControl<G>, clock: C, sink: S, delay: D, config: &TouchConfig) -> Self {
        Self {
            shared,
            clock,
            sink,
            delay,
            poll_interval_ms: config.poll_interval_ms,
        }
    }

    /// One iteration without the trailing sleep.
    pub fn poll_once(&mut self) -> TickEvents {
        let events = {
            let mut state = lock_control(&self.shared);
            let events = state.poll(self.clock.now_ms());
            if state.poll_count() % STATS_EVERY_POLLS == 0 {
                debug!(
                    "poll stats: polls={} presses={} leds=0b{:04b}",
                    state.poll_count(),
                    state.press_count(),
                    state.led_bits()
                );
            }
            events
        };

        for event in &events {
            self.sink.emit(event);
        }
        events
    }

    /// Poll forever.  Call from the dedicated task; the watchdog subscribes
    /// the calling task.
    pub fn run(mut self) -> ! {
        let watchdog = Watchdog::new();
        info!("button task running (period {}ms)", self.poll_interval_ms);

        loop {
            self.poll_once();
            watchdog.feed();
            self.delay.delay_ms(self.poll_interval_ms);
        }
    }
}
