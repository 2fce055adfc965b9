//! Domain Entities
//!
//! - `MenuTree` - The ordered operation menu (groups and leaves)

mod menu;

pub use menu::{MenuEntry, MenuIter, MenuTree};
