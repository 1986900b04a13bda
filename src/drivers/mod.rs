//! Hardware initialisation, task spawning, and watchdog helpers.

pub mod hw_init;
pub mod task_pin;
pub mod watchdog;
