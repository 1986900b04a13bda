//! GPIO pin assignments for the four-pad touch board.
//!
//! Single source of truth: every driver references this module rather than
//! hard-coding pin numbers.  Change a pin here and it propagates everywhere.

// ---------------------------------------------------------------------------
// Touch pads (active-low digital outputs from the touch controller)
// ---------------------------------------------------------------------------

pub const TOUCH_1_GPIO: i32 = 3;
pub const TOUCH_2_GPIO: i32 = 19;
pub const TOUCH_3_GPIO: i32 = 1;
pub const TOUCH_4_GPIO: i32 = 0;

// ---------------------------------------------------------------------------
// Indicator LEDs (active HIGH)
// ---------------------------------------------------------------------------

pub const LED_1_GPIO: i32 = 4;
pub const LED_2_GPIO: i32 = 18;
pub const LED_3_GPIO: i32 = 6;
pub const LED_4_GPIO: i32 = 7;

// ---------------------------------------------------------------------------
// Channel table
// ---------------------------------------------------------------------------

/// Number of touch / LED channels on the board.
pub const CHANNEL_COUNT: usize = 4;

/// One touch input paired with the LED it controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelPins {
    pub touch: i32,
    pub led: i32,
}

/// Channel *i* reads `CHANNEL_PINS[i].touch` and drives `CHANNEL_PINS[i].led`.
pub const CHANNEL_PINS: [ChannelPins; CHANNEL_COUNT] = [
    ChannelPins { touch: TOUCH_1_GPIO, led: LED_1_GPIO },
    ChannelPins { touch: TOUCH_2_GPIO, led: LED_2_GPIO },
    ChannelPins { touch: TOUCH_3_GPIO, led: LED_3_GPIO },
    ChannelPins { touch: TOUCH_4_GPIO, led: LED_4_GPIO },
];

/// Highest GPIO number accepted by `hw_init::configure_pin`.
pub const MAX_GPIO: i32 = 48;
