//! Shared control state — the hexagonal core.
//!
//! [`ControlState`] owns the LED registry, the four button channels and the
//! GPIO port that both of them drive.  It lives behind one
//! `Arc<Mutex<_>>` ([`SharedControl`]); whoever holds the lock owns the
//! whole read → advance → toggle sequence, so a second writer (say a remote
//! control task) can never interleave with a poll.
//!
//! ```text
//!  GpioPort ──▶ ┌──────────────────────────────┐ ──▶ TouchEvents
//!  (levels)     │         ControlState          │
//!  GpioPort ◀── │ ButtonChannel ×4 · LedRegistry│
//!  (LEDs)       └──────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use embedded_hal::digital::PinState;
use log::info;

use crate::config::{HoldPolicy, TouchConfig};
use crate::drivers::hw_init::PinDirection;
use crate::error::Result;
use crate::pins::CHANNEL_COUNT;

use super::channel::{ButtonChannel, ChannelId};
use super::events::{TouchEvent, TouchKind};
use super::led_registry::{LedId, LedRegistry};
use super::ports::{GpioPort, Tick};

/// Events produced by one poll; at most one per channel.
pub type TickEvents = heapless::Vec<TouchEvent, CHANNEL_COUNT>;

/// Handle shared between the polling task and any other writer.
pub type SharedControl<G> = Arc<Mutex<ControlState<G>>>;

pub struct ControlState<G> {
    gpio: G,
    leds: LedRegistry,
    channels: [ButtonChannel; CHANNEL_COUNT],
    long_press_ms: u32,
    hold_policy: HoldPolicy,
    poll_count: u64,
    press_count: u64,
}

impl<G: GpioPort> ControlState<G> {
    /// All channels idle, all LEDs logically off.  Call [`init`](Self::init)
    /// before the first poll.
    pub fn new(gpio: G, config: &TouchConfig) -> Self {
        Self {
            gpio,
            leds: LedRegistry::new(),
            channels: ChannelId::ALL.map(ButtonChannel::new),
            long_press_ms: config.long_press_ms,
            hold_policy: config.hold_policy,
            poll_count: 0,
            press_count: 0,
        }
    }

    /// Wrap into the shared handle.
    pub fn into_shared(self) -> SharedControl<G> {
        Arc::new(Mutex::new(self))
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Configure the touch inputs and LED outputs, then drive every LED to
    /// the registry's (all-off) state.
    pub fn init(&mut self) -> Result<()> {
        for channel in &self.channels {
            self.gpio.configure(channel.input_pin(), PinDirection::Input)?;
        }
        for id in LedId::ALL {
            self.gpio.configure(id.pin(), PinDirection::Output)?;
        }
        self.leds.sync_outputs(&mut self.gpio);
        info!("ControlState: {} channels configured", CHANNEL_COUNT);
        Ok(())
    }

    // ── Per-tick orchestration ────────────────────────────────

    /// Run one poll: sample every input once, then advance channels in index
    /// order, toggling LEDs on press edges.
    pub fn poll(&mut self, now: Tick) -> TickEvents {
        let levels: [PinState; CHANNEL_COUNT] =
            core::array::from_fn(|i| self.gpio.read_level(self.channels[i].input_pin()));

        let mut events = TickEvents::new();
        for (channel, level) in self.channels.iter_mut().zip(levels) {
            let Some(kind) = channel.step(level, now, self.long_press_ms, self.hold_policy) else {
                continue;
            };
            if kind == TouchKind::Press {
                self.leds.toggle(channel.led(), &mut self.gpio);
                self.press_count += 1;
            }
            // Capacity is one slot per channel.
            let _ = events.push(TouchEvent::new(channel.id(), kind));
        }

        self.poll_count += 1;
        events
    }

    // ── LED access for other writers ──────────────────────────

    /// Set LED `index` (0-based).  Fails with `InvalidChannel` out of range.
    pub fn set_led(&mut self, index: usize, on: bool) -> Result<()> {
        let id = LedId::try_from(index)?;
        self.leds.set(id, on, &mut self.gpio);
        Ok(())
    }

    /// State of LED `index` (0-based).  Fails with `InvalidChannel` out of range.
    pub fn led(&self, index: usize) -> Result<bool> {
        Ok(self.leds.get(LedId::try_from(index)?))
    }

    pub fn toggle_led(&mut self, id: LedId) -> bool {
        self.leds.toggle(id, &mut self.gpio)
    }

    /// Re-drive every LED pin from the registry.
    pub fn resync_leds(&mut self) {
        self.leds.sync_outputs(&mut self.gpio);
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn led_bits(&self) -> u8 {
        self.leds.bits()
    }

    pub fn channel(&self, id: ChannelId) -> &ButtonChannel {
        &self.channels[id.index()]
    }

    /// Polls completed since start-up.
    pub fn poll_count(&self) -> u64 {
        self.poll_count
    }

    /// Press edges (LED toggles) since start-up.
    pub fn press_count(&self) -> u64 {
        self.press_count
    }

    pub fn gpio(&self) -> &G {
        &self.gpio
    }

    pub fn gpio_mut(&mut self) -> &mut G {
        &mut self.gpio
    }
}
