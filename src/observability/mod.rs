//! Observability for the command-line front end
//!
//! Provides:
//! - Structured logging (JSON lines on stderr)
//! - Typed lifecycle events
//! - Validation counters
//!
//! The library core never logs; validators stay pure. Only `cli` uses
//! this module.
//!
//! ```
//! use startup_schema::observability::{log_event, Event, Logger, Severity};
//!
//! let logger = Logger::new(Severity::Info);
//! log_event(&logger, Event::BatchComplete, &[("checked", "42")]);
//! ```

mod events;
mod logger;
mod metrics;

pub use events::Event;
pub use logger::{Logger, Severity};
pub use metrics::{MetricsSnapshot, ValidationMetrics};

/// Log a lifecycle event at its own severity
pub fn log_event(logger: &Logger, event: Event, fields: &[(&str, &str)]) {
    logger.log(event.severity(), event.as_str(), fields);
}
