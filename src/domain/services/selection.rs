//! Selection resolution
//!
//! Computes which menu key is active for a matched route and which groups
//! must be expanded to reveal it.

use crate::domain::entities::{MenuEntry, MenuTree};
use crate::domain::value_objects::composite_key;

/// Composite key for a matched route, or `default_key` when either segment
/// is missing.
pub fn resolve_selected_key(
    group_key: Option<&str>,
    leaf_key: Option<&str>,
    default_key: &str,
) -> String {
    match (group_key, leaf_key) {
        (Some(group), Some(leaf)) if !group.is_empty() && !leaf.is_empty() => {
            composite_key(group, leaf)
        }
        _ => default_key.to_string(),
    }
}

/// Every group on the path from the root to `target_key`, outermost first.
///
/// Returns an empty list when the key is absent or sits at the root level.
/// With duplicate keys the first match in depth-first order wins.
pub fn find_ancestor_groups(tree: &MenuTree, target_key: &str) -> Vec<String> {
    let mut chain = Vec::new();
    if collect_ancestors(tree.roots(), target_key, &mut chain) {
        chain.into_iter().map(str::to_string).collect()
    } else {
        Vec::new()
    }
}

fn collect_ancestors<'a>(entries: &'a [MenuEntry], target_key: &str, chain: &mut Vec<&'a str>) -> bool {
    for entry in entries {
        if entry.key() == target_key {
            return true;
        }
        if let MenuEntry::Group { key, children, .. } = entry {
            chain.push(key);
            if collect_ancestors(children, target_key, chain) {
                return true;
            }
            chain.pop();
        }
    }
    false
}
