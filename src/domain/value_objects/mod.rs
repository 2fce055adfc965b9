//! Domain Value Objects
//!
//! Immutable value types that represent navigation concepts.

mod composite_key;
mod route;

pub use composite_key::{composite_key, split_composite_key, SEPARATOR};
pub use route::{match_path, route_path, RouteMatch};
