//! Mock hardware for integration tests.
//!
//! Records every GPIO call so tests can assert on the full pin history
//! without touching real registers, and lets tests drive touch levels and
//! the tick counter by hand.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::PinState;
use touchled::app::channel::ChannelId;
use touchled::app::events::TouchEvent;
use touchled::app::led_registry::LedId;
use touchled::app::ports::{EventSink, GpioPort, Tick, TimePort};
use touchled::drivers::hw_init::{HwInitError, PinDirection};

// ── GPIO call record ──────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum GpioCall {
    Configure { pin: i32, direction: PinDirection },
    Read { pin: i32 },
    Write { pin: i32, level: PinState },
}

// ── MockGpio ──────────────────────────────────────────────────

pub struct MockGpio {
    pub calls: Vec<GpioCall>,
    inputs: HashMap<i32, PinState>,
    outputs: HashMap<i32, PinState>,
    /// `configure` on this pin fails.
    pub fail_pin: Option<i32>,
}

#[allow(dead_code)]
impl MockGpio {
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            inputs: HashMap::new(),
            outputs: HashMap::new(),
            fail_pin: None,
        }
    }

    pub fn press(&mut self, ch: ChannelId) {
        self.inputs.insert(ch.touch_pin(), PinState::Low);
    }

    pub fn release(&mut self, ch: ChannelId) {
        self.inputs.insert(ch.touch_pin(), PinState::High);
    }

    pub fn set_input(&mut self, ch: ChannelId, level: PinState) {
        self.inputs.insert(ch.touch_pin(), level);
    }

    /// Last level written to the LED's pin, if any.
    pub fn led_level(&self, led: LedId) -> Option<PinState> {
        self.outputs.get(&led.pin()).copied()
    }

    pub fn writes_to(&self, pin: i32) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, GpioCall::Write { pin: p, .. } if *p == pin))
            .count()
    }

    pub fn configured(&self) -> Vec<(i32, PinDirection)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                GpioCall::Configure { pin, direction } => Some((*pin, *direction)),
                _ => None,
            })
            .collect()
    }
}

impl Default for MockGpio {
    fn default() -> Self {
        Self::new()
    }
}

impl GpioPort for MockGpio {
    fn configure(&mut self, pin: i32, direction: PinDirection) -> Result<(), HwInitError> {
        if self.fail_pin == Some(pin) {
            return Err(HwInitError::GpioConfigFailed { pin, rc: -1 });
        }
        self.calls.push(GpioCall::Configure { pin, direction });
        Ok(())
    }

    fn read_level(&mut self, pin: i32) -> PinState {
        self.calls.push(GpioCall::Read { pin });
        self.inputs.get(&pin).copied().unwrap_or(PinState::High)
    }

    fn write_level(&mut self, pin: i32, level: PinState) {
        self.calls.push(GpioCall::Write { pin, level });
        self.outputs.insert(pin, level);
    }
}

// ── ManualClock ───────────────────────────────────────────────

/// Clock advanced by the test; clones share the same counter.
#[derive(Clone, Default)]
pub struct ManualClock {
    now: Arc<AtomicU32>,
}

#[allow(dead_code)]
impl ManualClock {
    pub fn starting_at(ms: Tick) -> Self {
        Self {
            now: Arc::new(AtomicU32::new(ms)),
        }
    }

    pub fn advance(&self, ms: u32) {
        let now = self.now.load(Ordering::SeqCst);
        self.now.store(now.wrapping_add(ms), Ordering::SeqCst);
    }
}

impl TimePort for ManualClock {
    fn now_ms(&self) -> Tick {
        self.now.load(Ordering::SeqCst)
    }
}

// ── RecordingSink ─────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct RecordingSink {
    pub events: Arc<Mutex<Vec<TouchEvent>>>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .map(ToString::to_string)
            .collect()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &TouchEvent) {
        self.events.lock().unwrap().push(*event);
    }
}

// ── CountingDelay ─────────────────────────────────────────────

/// Returns immediately; remembers how long it was asked to wait.
#[derive(Default)]
pub struct CountingDelay {
    pub total_ns: u64,
}

impl DelayNs for CountingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += u64::from(ns);
    }
}
