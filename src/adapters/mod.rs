//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter    | Implements | Connects to               |
//! |------------|------------|---------------------------|
//! | `gpio`     | GpioPort   | ESP32 GPIO (touch + LEDs) |
//! | `log_sink` | EventSink  | Serial log output         |
//! | `time`     | TimePort   | ESP32 system timer        |

pub mod gpio;
pub mod log_sink;
pub mod time;
