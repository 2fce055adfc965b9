//! Echo client
//!
//! Stand-in SDK handle for the demo console. It accepts any service whose
//! name starts with the configured prefix and answers with the request it
//! received, so every screen has something to print.

use std::cell::Cell;

use serde_json::{json, Value};

use crate::domain::ports::{ApiClient, ClientError, ClientResult};

/// Service prefix accepted by default
pub const DEFAULT_SERVICE_PREFIX: &str = "V2NIM";

/// Demo client that echoes requests back
#[derive(Debug)]
pub struct EchoClient {
    service_prefix: String,
    calls: Cell<u64>,
}

impl Default for EchoClient {
    fn default() -> Self {
        Self::new(DEFAULT_SERVICE_PREFIX)
    }
}

impl EchoClient {
    pub fn new(service_prefix: impl Into<String>) -> Self {
        Self {
            service_prefix: service_prefix.into(),
            calls: Cell::new(0),
        }
    }

    /// Number of calls answered so far
    pub fn call_count(&self) -> u64 {
        self.calls.get()
    }
}

impl ApiClient for EchoClient {
    fn invoke(&self, service: &str, method: &str, params: &Value) -> ClientResult<Value> {
        if !service.starts_with(&self.service_prefix) {
            return Err(ClientError::UnknownService {
                service: service.to_string(),
            });
        }
        if method.is_empty() {
            return Err(ClientError::UnknownMethod {
                service: service.to_string(),
                method: method.to_string(),
            });
        }

        let seq = self.calls.get() + 1;
        self.calls.set(seq);

        Ok(json!({
            "code": 200,
            "seq": seq,
            "service": service,
            "method": method,
            "params": params,
        }))
    }
}
