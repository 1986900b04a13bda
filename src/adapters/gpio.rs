//! GPIO adapter — bridges the raw `hw_init` pin helpers to [`GpioPort`].
//!
//! This is the only module that touches pin registers at runtime.  On
//! non-espidf targets the underlying helpers are simulation stubs: inputs
//! read HIGH (nothing touched) and writes are dropped.

use embedded_hal::digital::PinState;

use crate::app::ports::GpioPort;
use crate::drivers::hw_init::{self, HwInitError, PinDirection};

/// Concrete adapter over the ESP-IDF GPIO driver.
#[derive(Debug, Default)]
pub struct EspGpio;

impl EspGpio {
    pub fn new() -> Self {
        Self
    }
}

impl GpioPort for EspGpio {
    fn configure(&mut self, pin: i32, direction: PinDirection) -> Result<(), HwInitError> {
        hw_init::configure_pin(pin, direction)
    }

    fn read_level(&mut self, pin: i32) -> PinState {
        PinState::from(hw_init::gpio_read(pin))
    }

    fn write_level(&mut self, pin: i32, level: PinState) {
        hw_init::gpio_write(pin, bool::from(level));
    }
}
