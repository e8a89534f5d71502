//! Observable events emitted by the command-line front end.
//!
//! Events are explicit and typed.

use std::fmt;

use super::Severity;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Configuration file loaded
    ConfigLoaded,
    /// Input read and parsed as JSON
    InputRead,
    /// A record passed validation
    RecordAccepted,
    /// A record failed validation
    RecordRejected,
    /// Every record of a batch has been checked
    BatchComplete,
    /// A semantic frame was rendered
    FrameRendered,
    /// A command aborted
    CommandFailed,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::InputRead => "INPUT_READ",
            Event::RecordAccepted => "RECORD_ACCEPTED",
            Event::RecordRejected => "RECORD_REJECTED",
            Event::BatchComplete => "BATCH_COMPLETE",
            Event::FrameRendered => "FRAME_RENDERED",
            Event::CommandFailed => "COMMAND_FAILED",
        }
    }

    /// Severity the event is logged at
    pub fn severity(&self) -> Severity {
        match self {
            Event::RecordAccepted => Severity::Trace,
            Event::RecordRejected => Severity::Warn,
            Event::CommandFailed => Severity::Error,
            _ => Severity::Info,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
