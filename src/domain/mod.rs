//! Domain Layer
//!
//! Menu model and navigation rules without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - The menu tree (groups and leaves)
//! - `value_objects/` - Routes and composite keys
//! - `services/` - Selection and label resolution
//! - `ports/` - Interface definitions for the router, events and SDK client
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the terminal or the file system
//! 2. **Total functions** - Resolution never fails; unknown input falls back
//! 3. **Ports & Adapters** - Routing and SDK access go through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
