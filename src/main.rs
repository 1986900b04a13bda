//! TouchLED Firmware — Main Entry Point
//!
//! Four touch pads, four LEDs, one polling task.
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                   Adapters (outer ring)                    │
//! │   EspGpio (GpioPort)  Esp32Clock (TimePort)               │
//! │   LogEventSink (EventSink)                                 │
//! │                                                            │
//! │  ──────────────── Port Trait Boundary ───────────────      │
//! │                                                            │
//! │  ┌──────────────────────────────────────────────────┐     │
//! │  │  ControlState (Arc<Mutex<_>>)                     │     │
//! │  │  ButtonChannel ×4 · LedRegistry                   │     │
//! │  └──────────────────────────────────────────────────┘     │
//! │                                                            │
//! │  PollTask (core-pinned FreeRTOS task, 50 ms period)       │
//! └───────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::{Result, anyhow};
use esp_idf_hal::delay::FreeRtos;
use log::info;

use touchled::adapters::gpio::EspGpio;
use touchled::adapters::log_sink::LogEventSink;
use touchled::adapters::time::Esp32Clock;
use touchled::app::service::ControlState;
use touchled::config::TouchConfig;
use touchled::diagnostics::{self, LAMP_TEST_CYCLES};
use touchled::drivers::task_pin::{self, BUTTON_TASK_PRIORITY, BUTTON_TASK_STACK_KB, Core};
use touchled::poll_task::PollTask;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("TouchLED v{}", env!("CARGO_PKG_VERSION"));

    // ── 2. Configuration ──────────────────────────────────────
    let config = TouchConfig::default();
    config.validate()?;
    let config_json =
        serde_json::to_string(&config).map_err(|e| anyhow!("config encode failed: {e}"))?;
    info!("Config: {}", config_json);

    // ── 3. Pins + shared state ────────────────────────────────
    let mut control = ControlState::new(EspGpio::new(), &config);
    control.init()?;

    if config.lamp_test {
        diagnostics::lamp_test(&mut control, &mut FreeRtos, LAMP_TEST_CYCLES);
    }

    let shared = control.into_shared();

    // ── 4. Button task ────────────────────────────────────────
    let task = PollTask::new(
        shared,
        Esp32Clock::new(),
        LogEventSink::new(),
        FreeRtos,
        &config,
    );
    task_pin::spawn_on_core(
        Core::Any,
        BUTTON_TASK_PRIORITY,
        BUTTON_TASK_STACK_KB,
        "button_task\0",
        move || task.run(),
    )?;

    // The button task owns the loop from here; returning hands this core
    // back to the scheduler.
    info!("System ready.");
    Ok(())
}
