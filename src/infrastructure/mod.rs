//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//!
//! ## Structure
//!
//! - `router/` - In-memory history router
//! - `events/` - Event sinks (console, NDJSON)
//! - `client/` - Demo SDK client

pub mod client;
pub mod events;
pub mod router;

// Re-export for convenience
pub use client::EchoClient;
pub use events::{ConsoleEventSink, JsonEventSink};
pub use router::MemoryRouter;
