//! Route Value Object
//!
//! Operation screens live at `<base>/<group>/<leaf>`. Matching is literal on
//! the base prefix and requires exactly two non-empty segments after it.

/// Group and leaf segments extracted from a matching path
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RouteMatch {
    pub group_key: String,
    pub leaf_key: String,
}

impl RouteMatch {
    pub fn new(group_key: impl Into<String>, leaf_key: impl Into<String>) -> Self {
        Self {
            group_key: group_key.into(),
            leaf_key: leaf_key.into(),
        }
    }
}

/// Match `current_path` against `<base_path>/<group>/<leaf>`.
///
/// The base path is compared verbatim, so characters that carry meaning in
/// patterns (`.`, `*`, `(`) only match themselves. Segments are returned
/// as-is without decoding. Any other shape (wrong depth, trailing slash,
/// foreign prefix) yields `None`.
pub fn match_path(base_path: &str, current_path: &str) -> Option<RouteMatch> {
    let rest = current_path.strip_prefix(base_path)?.strip_prefix('/')?;
    let (group, leaf) = rest.split_once('/')?;
    if group.is_empty() || leaf.is_empty() || leaf.contains('/') {
        return None;
    }
    Some(RouteMatch::new(group, leaf))
}

/// Build the path of an operation screen
pub fn route_path(base_path: &str, group_key: &str, leaf_key: &str) -> String {
    format!("{}/{}/{}", base_path, group_key, leaf_key)
}
