//! LED state registry.
//!
//! One bit per indicator LED; bit *i* is the logical state of LED *i*.
//! Every mutation writes the new level to the LED's pin before returning,
//! so the mask and the pin outputs never disagree once the call completes.
//!
//! No locking here. Callers hold the [`ControlState`](super::service::ControlState)
//! lock for the whole poll iteration.

use embedded_hal::digital::PinState;

use crate::error::Error;
use crate::pins::{CHANNEL_COUNT, CHANNEL_PINS};

use super::ports::GpioPort;

/// One of the four indicator LEDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LedId {
    Led1 = 0,
    Led2 = 1,
    Led3 = 2,
    Led4 = 3,
}

impl LedId {
    pub const ALL: [LedId; CHANNEL_COUNT] = [Self::Led1, Self::Led2, Self::Led3, Self::Led4];

    pub const fn index(self) -> usize {
        self as usize
    }

    /// Output pin this LED is wired to.
    pub const fn pin(self) -> i32 {
        CHANNEL_PINS[self.index()].led
    }

    const fn mask(self) -> u8 {
        1 << self as u8
    }
}

impl TryFrom<usize> for LedId {
    type Error = Error;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(Error::InvalidChannel(index))
    }
}

#[derive(Debug, Default)]
pub struct LedRegistry {
    bits: u8,
}

impl LedRegistry {
    /// All LEDs off.
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    pub fn get(&self, id: LedId) -> bool {
        self.bits & id.mask() != 0
    }

    pub fn set(&mut self, id: LedId, on: bool, out: &mut impl GpioPort) {
        if on {
            self.bits |= id.mask();
        } else {
            self.bits &= !id.mask();
        }
        out.write_level(id.pin(), PinState::from(on));
    }

    /// Flip `id` and return its new state.
    pub fn toggle(&mut self, id: LedId, out: &mut impl GpioPort) -> bool {
        let on = !self.get(id);
        self.set(id, on, out);
        on
    }

    /// Re-drive every pin from the mask (after something else touched the
    /// outputs, e.g. the boot lamp test).
    pub fn sync_outputs(&self, out: &mut impl GpioPort) {
        for id in LedId::ALL {
            out.write_level(id.pin(), PinState::from(self.get(id)));
        }
    }

    /// Raw mask, LED 1 in bit 0.
    pub fn bits(&self) -> u8 {
        self.bits
    }
}
