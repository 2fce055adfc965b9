//! Breadcrumb label resolution

use crate::domain::entities::{MenuEntry, MenuTree};

/// Separator placed between parent and child labels
pub const LABEL_SEPARATOR: &str = " - ";

/// Human-readable title for `selected_key`.
///
/// Root entries use their own label; nested entries are prefixed with their
/// immediate parent's label. Unknown keys are returned unchanged.
pub fn resolve_label(tree: &MenuTree, selected_key: &str) -> String {
    find_label(tree.roots(), None, selected_key).unwrap_or_else(|| selected_key.to_string())
}

fn find_label(entries: &[MenuEntry], parent_label: Option<&str>, key: &str) -> Option<String> {
    for entry in entries {
        if entry.key() == key {
            return Some(match parent_label {
                Some(parent) => format!("{}{}{}", parent, LABEL_SEPARATOR, entry.label()),
                None => entry.label().to_string(),
            });
        }
        if let Some(label) = find_label(entry.children(), Some(entry.label()), key) {
            return Some(label);
        }
    }
    None
}
