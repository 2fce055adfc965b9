//! Application Layer
//!
//! Use cases that orchestrate the console flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain resolution rules (those are in Domain)
//! - Coordinates between the router, the menu and the SDK client
//!
//! ## Components
//!
//! - `NavigationSynchronizer` - Keeps menu selection and location in step
//! - `InvokeUseCase` - Forwards an operation screen to the SDK client

pub mod invoke;
pub mod navigation;

pub use invoke::{parse_params, InvocationOutcome, InvokeUseCase};
pub use navigation::{Activation, NavigationOptions, NavigationState, NavigationSynchronizer};
