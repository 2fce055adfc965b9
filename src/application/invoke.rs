//! Invoke Use Case
//!
//! An operation screen collects form parameters and forwards them, unchanged,
//! to a single `service.method` call on the injected SDK client.

use serde::Serialize;
use serde_json::Value;

use crate::domain::entities::MenuTree;
use crate::domain::ports::{ApiClient, NavigationEvent, NavigationEventSink, NoopEventSink};
use crate::domain::services::resolve_label;
use crate::domain::value_objects::split_composite_key;
use crate::error::{ConsoleError, ConsoleResult};

/// Result of a forwarded operation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvocationOutcome {
    /// Composite key of the operation
    pub key: String,
    /// Breadcrumb label of the operation
    pub label: String,
    pub service: String,
    pub method: String,
    pub params: Value,
    /// Value returned by the client
    pub result: Value,
}

/// Parse form input into call parameters.
///
/// Blank input means "no parameters" and becomes an empty object.
pub fn parse_params(input: &str) -> ConsoleResult<Value> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(Value::Object(serde_json::Map::new()));
    }
    serde_json::from_str(trimmed).map_err(|e| ConsoleError::InvalidParams {
        message: e.to_string(),
    })
}

/// Forwards operation screens to the SDK client
pub struct InvokeUseCase<C: ApiClient> {
    client: C,
    events: Box<dyn NavigationEventSink>,
}

impl<C: ApiClient> InvokeUseCase<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            events: Box::new(NoopEventSink),
        }
    }

    /// Attach an event sink
    pub fn with_event_sink(mut self, events: Box<dyn NavigationEventSink>) -> Self {
        self.events = events;
        self
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Invoke the operation behind `selected_key` with `params`.
    ///
    /// The key must be a composite `<service>-<method>` key present in the
    /// menu; the default key and group keys are not operations.
    pub fn execute(
        &self,
        tree: &MenuTree,
        selected_key: &str,
        params: Value,
    ) -> ConsoleResult<InvocationOutcome> {
        let (service, method) =
            split_composite_key(selected_key).ok_or_else(|| ConsoleError::NotAnOperation {
                key: selected_key.to_string(),
            })?;

        match tree.find(selected_key) {
            Some(entry) if entry.is_group() => {
                return Err(ConsoleError::NotAnOperation {
                    key: selected_key.to_string(),
                })
            }
            Some(_) => {}
            None => {
                return Err(ConsoleError::UnknownOperation {
                    key: selected_key.to_string(),
                })
            }
        }

        self.events.on_event(NavigationEvent::OperationInvoked {
            service: service.to_string(),
            method: method.to_string(),
        });

        let result = self
            .client
            .invoke(service, method, &params)
            .inspect_err(|e| {
                self.events.on_event(NavigationEvent::OperationFailed {
                    service: service.to_string(),
                    method: method.to_string(),
                    error: e.to_string(),
                });
            })?;

        Ok(InvocationOutcome {
            key: selected_key.to_string(),
            label: resolve_label(tree, selected_key),
            service: service.to_string(),
            method: method.to_string(),
            params,
            result,
        })
    }
}
