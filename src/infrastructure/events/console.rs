//! Console Event Sink
//!
//! Human-readable log lines for `-v`. Unchanged-path notifications only show
//! at `-vv` and above.

use crate::domain::ports::{NavigationEvent, NavigationEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that writes one line per event
pub struct ConsoleEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
    verbose: u8,
}

impl ConsoleEventSink {
    /// Log to stderr at the given verbosity
    pub fn stderr(verbose: u8) -> Self {
        Self::with_writer(io::stderr(), verbose)
    }

    pub fn with_writer<W: Write + Send + 'static>(writer: W, verbose: u8) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            verbose,
        }
    }
}

/// Format an event as a single log line
pub fn format_event(event: &NavigationEvent) -> String {
    match event {
        NavigationEvent::PathChanged {
            path,
            selected_key,
            expanded_group_keys,
            matched,
        } => {
            let expanded = if expanded_group_keys.is_empty() {
                "-".to_string()
            } else {
                expanded_group_keys.join(",")
            };
            let how = if *matched { "matched" } else { "fallback" };
            format!(
                "path {} ({}): selected={} expanded={}",
                path, how, selected_key, expanded
            )
        }
        NavigationEvent::PathUnchanged { path } => format!("path {} unchanged", path),
        NavigationEvent::NavigationRequested { key, target } => {
            format!("activate {} -> {}", key, target)
        }
        NavigationEvent::ActivationIgnored { key } => format!("activate {} ignored", key),
        NavigationEvent::GroupToggled { key, expanded } => {
            let verb = if *expanded { "expand" } else { "collapse" };
            format!("{} {}", verb, key)
        }
        NavigationEvent::OperationInvoked { service, method } => {
            format!("invoke {}.{}", service, method)
        }
        NavigationEvent::OperationFailed {
            service,
            method,
            error,
        } => format!("invoke {}.{} failed: {}", service, method, error),
    }
}

impl NavigationEventSink for ConsoleEventSink {
    fn on_event(&self, event: NavigationEvent) {
        if self.verbose == 0 {
            return;
        }
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "[nav] {}", format_event(&event));
        }
    }

    fn wants_detailed_events(&self) -> bool {
        self.verbose >= 2
    }
}
