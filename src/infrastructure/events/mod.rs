//! Event Sink Implementations
//!
//! Provides concrete implementations of NavigationEventSink:
//! - JsonEventSink: NDJSON output for automation
//! - ConsoleEventSink: Human-readable log lines for `-v`

mod console;
mod json;

pub use console::{format_event, ConsoleEventSink};
pub use json::JsonEventSink;
