//! Boot-time lamp test.
//!
//! Before the polling task starts, logs which touch pads currently read
//! pressed and blinks all four LEDs so a technician can see every output
//! and input path is alive.  Afterwards every LED pin is re-driven from the
//! registry, so the LED bitmask invariant holds again when polling starts.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::PinState;
use log::{info, warn};

use crate::app::channel::ChannelId;
use crate::app::led_registry::LedId;
use crate::app::ports::GpioPort;
use crate::app::service::ControlState;
use crate::pins::CHANNEL_COUNT;

/// Off and on phase length of one blink.
pub const LAMP_TEST_HALF_PERIOD_MS: u32 = 200;
/// Blinks performed at boot.
pub const LAMP_TEST_CYCLES: u32 = 2;

/// Sample every touch pad, then blink all LEDs `cycles` times
/// (off for `LAMP_TEST_HALF_PERIOD_MS`, on for the same).
///
/// Returns the sampled touch levels, channel 1 first.
pub fn lamp_test<G: GpioPort>(
    state: &mut ControlState<G>,
    delay: &mut impl DelayNs,
    cycles: u32,
) -> [PinState; CHANNEL_COUNT] {
    let gpio = state.gpio_mut();

    let levels = ChannelId::ALL.map(|ch| gpio.read_level(ch.touch_pin()));
    for (ch, level) in ChannelId::ALL.iter().zip(levels) {
        if level == PinState::Low {
            // A pad held at boot is usually a wiring or threshold fault.
            warn!("lamp test: {} touch reads pressed at boot", ch.number());
        }
    }

    for _ in 0..cycles {
        drive_all(gpio, PinState::Low);
        delay.delay_ms(LAMP_TEST_HALF_PERIOD_MS);
        drive_all(gpio, PinState::High);
        delay.delay_ms(LAMP_TEST_HALF_PERIOD_MS);
    }

    state.resync_leds();
    info!("lamp test: {} cycle(s) done, leds=0b{:04b}", cycles, state.led_bits());
    levels
}

fn drive_all(gpio: &mut impl GpioPort, level: PinState) {
    for id in LedId::ALL {
        gpio.write_level(id.pin(), level);
    }
}
