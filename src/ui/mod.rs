//! Terminal UI for the binary: capability detection, theme tokens and the
//! interactive operation menu.

pub mod context;
pub mod json;
pub mod output;
pub mod terminal;
pub mod theme;
pub mod widgets;
