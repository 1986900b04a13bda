//! Per-channel press / hold / release state machine.
//!
//! ## Transitions (one evaluation per poll)
//!
//! | Level | Stored state              | Result                              |
//! |-------|---------------------------|-------------------------------------|
//! | Low   | idle                      | stamp press start, `Press`          |
//! | Low   | pressed, not yet toggled  | `Press`                             |
//! | Low   | pressed, toggled          | `Hold` if the [`HoldPolicy`] allows |
//! | High  | pressed                   | `Release`, clear all press state    |
//! | High  | idle                      | nothing                             |
//!
//! The LED toggle fires on the press edge, not on release.  The machine
//! only reports the step; [`ControlState`](super::service::ControlState)
//! performs the toggle.

use embedded_hal::digital::PinState;

use crate::config::HoldPolicy;
use crate::error::Error;
use crate::pins::{CHANNEL_COUNT, CHANNEL_PINS};

use super::events::TouchKind;
use super::led_registry::LedId;
use super::ports::Tick;

/// One of the four touch channels.  Channel *i* controls LED *i*.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelId {
    Ch1 = 0,
    Ch2 = 1,
    Ch3 = 2,
    Ch4 = 3,
}

impl ChannelId {
    pub const ALL: [ChannelId; CHANNEL_COUNT] = [Self::Ch1, Self::Ch2, Self::Ch3, Self::Ch4];

    pub const fn index(self) -> usize {
        self as usize
    }

    /// Number printed on the board silk (1-based).
    pub const fn number(self) -> usize {
        self.index() + 1
    }

    pub const fn led(self) -> LedId {
        LedId::ALL[self.index()]
    }

    pub const fn touch_pin(self) -> i32 {
        CHANNEL_PINS[self.index()].touch
    }
}

impl TryFrom<usize> for ChannelId {
    type Error = Error;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(Error::InvalidChannel(index))
    }
}

#[derive(Debug, Clone)]
pub struct ButtonChannel {
    id: ChannelId,
    press_started_at: Option<Tick>,
    toggled_this_press: bool,
    hold_reported: bool,
}

impl ButtonChannel {
    pub const fn new(id: ChannelId) -> Self {
        Self {
            id,
            press_started_at: None,
            toggled_this_press: false,
            hold_reported: false,
        }
    }

    pub fn id(&self) -> ChannelId {
        self.id
    }

    pub fn input_pin(&self) -> i32 {
        self.id.touch_pin()
    }

    pub fn led(&self) -> LedId {
        self.id.led()
    }

    pub fn press_started_at(&self) -> Option<Tick> {
        self.press_started_at
    }

    pub fn toggled_this_press(&self) -> bool {
        self.toggled_this_press
    }

    pub fn is_pressed(&self) -> bool {
        self.press_started_at.is_some()
    }

    /// Advance the machine with this poll's sampled `level` (Low = pressed).
    ///
    /// Returns the event for this tick, if any.  A `Press` obliges the
    /// caller to toggle [`led()`](Self::led).
    pub fn step(
        &mut self,
        level: PinState,
        now: Tick,
        long_press_ms: u32,
        policy: HoldPolicy,
    ) -> Option<TouchKind> {
        match level {
            PinState::Low => {
                let started = *self.press_started_at.get_or_insert(now);

                if !self.toggled_this_press {
                    self.toggled_this_press = true;
                    return Some(TouchKind::Press);
                }

                let held_ms = now.wrapping_sub(started);
                match policy {
                    HoldPolicy::Suppressed => None,
                    HoldPolicy::OncePerPress => {
                        if !self.hold_reported && held_ms >= long_press_ms {
                            self.hold_reported = true;
                            Some(TouchKind::Hold)
                        } else {
                            None
                        }
                    }
                }
            }
            PinState::High => {
                if self.press_started_at.is_none() {
                    return None;
                }
                self.press_started_at = None;
                self.toggled_this_press = false;
                self.hold_reported = false;
                Some(TouchKind::Release)
            }
        }
    }
}
