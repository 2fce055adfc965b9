//! Navigation Event Port
//!
//! Provides an observable interface for navigation and invocation.
//! Enables verbose logging, JSON event streams, and debugging.

/// Event emitted by the navigation synchronizer and invoke use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationEvent {
    /// A new path was observed and the state recomputed
    PathChanged {
        path: String,
        selected_key: String,
        expanded_group_keys: Vec<String>,
        matched: bool,
    },

    /// The same path was observed again; state kept as-is
    PathUnchanged { path: String },

    /// A menu key was activated and navigation requested
    NavigationRequested { key: String, target: String },

    /// A menu key was activated but is not navigable
    ActivationIgnored { key: String },

    /// A group was expanded or collapsed by the user
    GroupToggled { key: String, expanded: bool },

    /// An operation was forwarded to the client
    OperationInvoked { service: String, method: String },

    /// The client returned an error for an operation
    OperationFailed {
        service: String,
        method: String,
        error: String,
    },
}

/// Trait for receiving navigation events
///
/// Implementations can be:
/// - ConsoleEventSink: Human-readable log lines on stderr
/// - JsonEventSink: NDJSON event stream
/// - NoopEventSink: Silent operation
pub trait NavigationEventSink {
    /// Handle a navigation event
    fn on_event(&self, event: NavigationEvent);

    /// Whether this sink wants high-frequency events such as `PathUnchanged`
    fn wants_detailed_events(&self) -> bool {
        true
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl NavigationEventSink for NoopEventSink {
    fn on_event(&self, _event: NavigationEvent) {}

    fn wants_detailed_events(&self) -> bool {
        false
    }
}
