//! apiconsole - SDK demonstration console
//!
//! Each operation screen forwards form input to one method of an SDK client.
//! The operation menu (service -> method) is kept in step with the current
//! location by the [`NavigationSynchronizer`]: location changes select and
//! reveal menu entries, menu activations request navigation.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{
    parse_params, Activation, InvocationOutcome, InvokeUseCase, NavigationOptions,
    NavigationState, NavigationSynchronizer,
};
pub use config::{ConsoleConfig, LoadedConfig};
pub use domain::entities::{MenuEntry, MenuTree};
pub use domain::ports::{ApiClient, ClientError, NavigationEvent, NavigationEventSink, Router};
pub use domain::services::{find_ancestor_groups, resolve_label, resolve_selected_key};
pub use domain::value_objects::{
    composite_key, match_path, route_path, split_composite_key, RouteMatch,
};
pub use error::{ConsoleError, ConsoleResult};
pub use infrastructure::{EchoClient, MemoryRouter};
