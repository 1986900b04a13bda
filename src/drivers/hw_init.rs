//! One-shot GPIO configuration and raw level access.
//!
//! Configures pin directions and reads/writes digital levels using raw
//! ESP-IDF sys calls.  Pin configuration happens once from start-up
//! before the polling task is spawned.

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

use crate::pins;

// ── Error type ────────────────────────────────────────────────

/// Errors during one-shot peripheral initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HwInitError {
    GpioConfigFailed { pin: i32, rc: i32 },
    InvalidPin(i32),
}

impl core::fmt::Display for HwInitError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::GpioConfigFailed { pin, rc } => {
                write!(f, "GPIO{} config failed (rc={})", pin, rc)
            }
            Self::InvalidPin(pin) => write!(f, "GPIO{} does not exist", pin),
        }
    }
}

/// Pin direction requested from [`configure_pin`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinDirection {
    Input,
    Output,
}

fn check_pin(pin: i32) -> Result<(), HwInitError> {
    if (0..=pins::MAX_GPIO).contains(&pin) {
        Ok(())
    } else {
        Err(HwInitError::InvalidPin(pin))
    }
}

// ── Configuration ─────────────────────────────────────────────

#[cfg(target_os = "espidf")]
pub fn configure_pin(pin: i32, direction: PinDirection) -> Result<(), HwInitError> {
    check_pin(pin)?;

    let mode = match direction {
        PinDirection::Input => gpio_mode_t_GPIO_MODE_INPUT,
        PinDirection::Output => gpio_mode_t_GPIO_MODE_OUTPUT,
    };
    let cfg = gpio_config_t {
        pin_bit_mask: 1u64 << pin,
        mode,
        pull_up_en: gpio_pullup_t_GPIO_PULLUP_DISABLE,
        pull_down_en: gpio_pulldown_t_GPIO_PULLDOWN_DISABLE,
        intr_type: gpio_int_type_t_GPIO_INTR_DISABLE,
    };
    // SAFETY: gpio_config only touches the IO MUX / GPIO matrix registers of
    // the pin in `pin_bit_mask`, which was range-checked above.
    let ret = unsafe { gpio_config(&cfg) };
    if ret != ESP_OK as i32 {
        return Err(HwInitError::GpioConfigFailed { pin, rc: ret });
    }

    log::debug!("hw_init: GPIO{} configured as {:?}", pin, direction);
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn configure_pin(pin: i32, direction: PinDirection) -> Result<(), HwInitError> {
    check_pin(pin)?;
    log::debug!("hw_init(sim): GPIO{} as {:?}", pin, direction);
    Ok(())
}

// ── Levels ────────────────────────────────────────────────────

/// Read the digital level of `pin`; `true` = HIGH.
#[cfg(target_os = "espidf")]
pub fn gpio_read(pin: i32) -> bool {
    // SAFETY: gpio_get_level is a read-only register access on an
    // already-configured input pin.
    (unsafe { gpio_get_level(pin) }) != 0
}

/// Host simulation: inputs idle HIGH (pull-up, nothing touched).
#[cfg(not(target_os = "espidf"))]
pub fn gpio_read(_pin: i32) -> bool {
    true
}

#[cfg(target_os = "espidf")]
pub fn gpio_write(pin: i32, high: bool) {
    // SAFETY: gpio_set_level writes to an output pin configured during
    // start-up; callers hold the control-state lock.
    unsafe {
        gpio_set_level(pin, u32::from(high));
    }
}

#[cfg(not(target_os = "espidf"))]
pub fn gpio_write(_pin: i32, _high: bool) {}
