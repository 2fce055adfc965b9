//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod api_client;
pub mod navigation_events;
pub mod router;

pub use api_client::{ApiClient, ClientError, ClientResult};
pub use navigation_events::{NavigationEvent, NavigationEventSink, NoopEventSink};
pub use router::Router;
