//! API Client Port
//!
//! The communication SDK handle. Each operation screen forwards its form
//! parameters to one `service.method` call; the SDK owns all semantics.
//! The handle is injected into whatever needs it, never reached globally.

use serde_json::Value;
use thiserror::Error;

/// Result type for client calls
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors reported by an SDK client
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// The client does not expose the requested service
    #[error("unknown service '{service}'")]
    UnknownService { service: String },

    /// The service does not expose the requested method
    #[error("unknown method '{method}' on service '{service}'")]
    UnknownMethod { service: String, method: String },

    /// The SDK rejected the call
    #[error("request failed with code {code}: {message}")]
    Rejected { code: i64, message: String },
}

/// Opaque SDK handle
pub trait ApiClient {
    /// Forward `params` to `service.method` and return the SDK's result
    fn invoke(&self, service: &str, method: &str, params: &Value) -> ClientResult<Value>;
}

impl<C: ApiClient + ?Sized> ApiClient for &C {
    fn invoke(&self, service: &str, method: &str, params: &Value) -> ClientResult<Value> {
        (**self).invoke(service, method, params)
    }
}

impl<C: ApiClient + ?Sized> ApiClient for Box<C> {
    fn invoke(&self, service: &str, method: &str, params: &Value) -> ClientResult<Value> {
        (**self).invoke(service, method, params)
    }
}
