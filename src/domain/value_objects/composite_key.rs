//! Composite Key Value Object
//!
//! Identifies a leaf operation by its group and leaf segment.

/// Separator between the group and leaf parts of a composite key
pub const SEPARATOR: char = '-';

/// Generate a composite key from group and leaf segments
///
/// Keys are formatted as `{group}-{leaf}`.
pub fn composite_key(group: &str, leaf: &str) -> String {
    format!("{}{}{}", group, SEPARATOR, leaf)
}

/// Split a composite key on its first separator.
///
/// Returns `None` when the key has no separator or either side is empty,
/// which is the case for bare group keys and the default key.
pub fn split_composite_key(key: &str) -> Option<(&str, &str)> {
    let (group, leaf) = key.split_once(SEPARATOR)?;
    if group.is_empty() || leaf.is_empty() {
        return None;
    }
    Some((group, leaf))
}
