//! SDK client implementations

mod echo;

pub use echo::{EchoClient, DEFAULT_SERVICE_PREFIX};
