//! Interactive operation menu widget.
//!
//! - `menu` - visible rows, cursor, action handling
//! - `render` - row, status and help rendering
//! - `input` - key mapping and the interactive loop
//! - `log` - recent-event buffer drawn under the menu

mod input;
mod log;
mod menu;
mod render;

pub use input::run_interactive;
pub use log::EventLog;
