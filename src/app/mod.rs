//! Application core — pure domain logic, zero I/O.
//!
//! The LED registry, the per-channel button state machine and the shared
//! control state that ties them together.  All interaction with hardware
//! happens through **port traits** defined in [`ports`], keeping this layer
//! fully testable without real peripherals.

pub mod channel;
pub mod events;
pub mod led_registry;
pub mod ports;
pub mod service;
