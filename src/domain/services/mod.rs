//! Domain Services
//!
//! Pure resolution functions over the menu tree. They never fail: unknown
//! keys and unmatched paths resolve to defined fallback values.

mod label;
mod selection;

pub use label::{resolve_label, LABEL_SEPARATOR};
pub use selection::{find_ancestor_groups, resolve_selected_key};
