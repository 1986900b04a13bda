//! Outbound touch events.
//!
//! Produced by [`ControlState::poll`](super::service::ControlState::poll)
//! and reported through the [`EventSink`](super::ports::EventSink) port.

use core::fmt;

use super::channel::ChannelId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchKind {
    /// Press edge; the channel's LED was toggled.
    Press,
    /// Press sustained past the long-press threshold.
    Hold,
    /// Release edge; the channel returned to idle.
    Release,
}

impl TouchKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Press => "press",
            Self::Hold => "hold",
            Self::Release => "release",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TouchEvent {
    pub channel: ChannelId,
    pub kind: TouchKind,
}

impl TouchEvent {
    pub fn new(channel: ChannelId, kind: TouchKind) -> Self {
        Self { channel, kind }
    }
}

/// `"<channel number> touch <kind>"`, channels numbered from 1.
impl fmt::Display for TouchEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} touch {}", self.channel.number(), self.kind.as_str())
    }
}
