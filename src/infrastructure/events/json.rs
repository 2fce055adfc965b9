//! JSON Event Sink
//!
//! Outputs navigation events as NDJSON for automation consumption.

use crate::domain::ports::{NavigationEvent, NavigationEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a JSON event sink writing to stderr, keeping stdout for results
    pub fn stderr() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stderr())),
        }
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, mut event: serde_json::Value) {
        if let Some(object) = event.as_object_mut() {
            object.insert(
                "timestamp".to_string(),
                serde_json::Value::String(chrono::Utc::now().to_rfc3339()),
            );
        }
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl NavigationEventSink for JsonEventSink {
    fn on_event(&self, event: NavigationEvent) {
        let json = match event {
            NavigationEvent::PathChanged {
                path,
                selected_key,
                expanded_group_keys,
                matched,
            } => {
                serde_json::json!({
                    "event": "path_changed",
                    "path": path,
                    "selected_key": selected_key,
                    "expanded_group_keys": expanded_group_keys,
                    "matched": matched,
                })
            }

            NavigationEvent::PathUnchanged { path } => {
                serde_json::json!({
                    "event": "path_unchanged",
                    "path": path,
                })
            }

            NavigationEvent::NavigationRequested { key, target } => {
                serde_json::json!({
                    "event": "navigate",
                    "key": key,
                    "target": target,
                })
            }

            NavigationEvent::ActivationIgnored { key } => {
                serde_json::json!({
                    "event": "activation_ignored",
                    "key": key,
                })
            }

            NavigationEvent::GroupToggled { key, expanded } => {
                serde_json::json!({
                    "event": "group_toggled",
                    "key": key,
                    "expanded": expanded,
                })
            }

            NavigationEvent::OperationInvoked { service, method } => {
                serde_json::json!({
                    "event": "invoke",
                    "service": service,
                    "method": method,
                })
            }

            NavigationEvent::OperationFailed {
                service,
                method,
                error,
            } => {
                serde_json::json!({
                    "event": "invoke_error",
                    "service": service,
                    "method": method,
                    "error": error,
                })
            }
        };

        self.write_event(json);
    }

    fn wants_detailed_events(&self) -> bool {
        true // JSON mode wants all events
    }
}
