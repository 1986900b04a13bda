//! System configuration parameters
//!
//! The two control-loop timing constants plus the boot options.  Values are
//! compiled in; there is no persisted configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// What happens once a press has been held past `long_press_ms`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HoldPolicy {
    /// Hold is only eligible before the press toggle has fired, which the
    /// press edge always does first.  No hold is ever reported.
    #[default]
    Suppressed,
    /// Report one hold per press once the threshold is reached.
    OncePerPress,
}

/// Core system configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TouchConfig {
    // --- Timing ---
    /// Poll period of the button task (milliseconds)
    pub poll_interval_ms: u32,
    /// Press duration after which a hold becomes eligible (milliseconds)
    pub long_press_ms: u32,

    // --- Behaviour ---
    pub hold_policy: HoldPolicy,

    // --- Boot ---
    /// Blink every LED once at boot before polling starts
    pub lamp_test: bool,
}

impl Default for TouchConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: 50, // 20 Hz
            long_press_ms: 500,
            hold_policy: HoldPolicy::Suppressed,
            lamp_test: true,
        }
    }
}

impl TouchConfig {
    /// Reject values the poll loop cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.poll_interval_ms == 0 {
            return Err(Error::Config("poll_interval_ms must be non-zero"));
        }
        if self.long_press_ms == 0 {
            return Err(Error::Config("long_press_ms must be non-zero"));
        }
        if self.long_press_ms < self.poll_interval_ms {
            return Err(Error::Config("long_press_ms shorter than one poll interval"));
        }
        Ok(())
    }
}
