//! Menu Tree Entity
//!
//! An ordered tree of labeled menu entries. Groups hold children and can be
//! expanded; leaves are the selectable operations. Keys share one namespace
//! across the whole tree.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A single entry in the operation menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawEntry", into = "RawEntry")]
pub enum MenuEntry {
    /// A directly selectable operation
    Leaf { key: String, label: String },
    /// An expandable group of entries
    Group {
        key: String,
        label: String,
        children: Vec<MenuEntry>,
    },
}

impl MenuEntry {
    /// Create a leaf entry
    pub fn leaf(key: impl Into<String>, label: impl Into<String>) -> Self {
        MenuEntry::Leaf {
            key: key.into(),
            label: label.into(),
        }
    }

    /// Create a group entry
    pub fn group(key: impl Into<String>, label: impl Into<String>, children: Vec<MenuEntry>) -> Self {
        MenuEntry::Group {
            key: key.into(),
            label: label.into(),
            children,
        }
    }

    pub fn key(&self) -> &str {
        match self {
            MenuEntry::Leaf { key, .. } | MenuEntry::Group { key, .. } => key,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            MenuEntry::Leaf { label, .. } | MenuEntry::Group { label, .. } => label,
        }
    }

    /// Children of a group; empty for leaves
    pub fn children(&self) -> &[MenuEntry] {
        match self {
            MenuEntry::Leaf { .. } => &[],
            MenuEntry::Group { children, .. } => children,
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self, MenuEntry::Group { .. })
    }

    /// Count of leaves beneath this entry (a leaf counts itself)
    pub fn leaf_count(&self) -> usize {
        match self {
            MenuEntry::Leaf { .. } => 1,
            MenuEntry::Group { children, .. } => children.iter().map(MenuEntry::leaf_count).sum(),
        }
    }
}

/// Configuration shape of an entry: presence of `children` makes a group.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawEntry {
    key: String,
    label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    children: Option<Vec<RawEntry>>,
}

impl From<RawEntry> for MenuEntry {
    fn from(raw: RawEntry) -> Self {
        match raw.children {
            Some(children) => MenuEntry::Group {
                key: raw.key,
                label: raw.label,
                children: children.into_iter().map(MenuEntry::from).collect(),
            },
            None => MenuEntry::Leaf {
                key: raw.key,
                label: raw.label,
            },
        }
    }
}

impl From<MenuEntry> for RawEntry {
    fn from(entry: MenuEntry) -> Self {
        match entry {
            MenuEntry::Leaf { key, label } => RawEntry {
                key,
                label,
                children: None,
            },
            MenuEntry::Group {
                key,
                label,
                children,
            } => RawEntry {
                key,
                label,
                children: Some(children.into_iter().map(RawEntry::from).collect()),
            },
        }
    }
}

/// Immutable, ordered menu configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuTree {
    roots: Vec<MenuEntry>,
}

impl MenuTree {
    pub fn new(roots: Vec<MenuEntry>) -> Self {
        Self { roots }
    }

    /// Top-level entries in configured order
    pub fn roots(&self) -> &[MenuEntry] {
        &self.roots
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Depth-first pre-order iteration over every entry
    pub fn iter(&self) -> MenuIter<'_> {
        MenuIter {
            stack: self.roots.iter().rev().collect(),
        }
    }

    /// Find the first entry with the given key
    pub fn find(&self, key: &str) -> Option<&MenuEntry> {
        self.iter().find(|entry| entry.key() == key)
    }

    /// Whether `key` names a group anywhere in the tree
    pub fn is_group_key(&self, key: &str) -> bool {
        self.find(key).is_some_and(MenuEntry::is_group)
    }

    /// Keys of all leaves, depth-first
    pub fn leaf_keys(&self) -> Vec<&str> {
        self.iter()
            .filter(|entry| !entry.is_group())
            .map(MenuEntry::key)
            .collect()
    }

    /// Keys that appear more than once, in order of first repetition
    pub fn duplicate_keys(&self) -> Vec<String> {
        let mut seen: HashMap<&str, usize> = HashMap::new();
        let mut duplicates = Vec::new();
        for entry in self.iter() {
            let count = seen.entry(entry.key()).or_insert(0);
            *count += 1;
            if *count == 2 {
                duplicates.push(entry.key().to_string());
            }
        }
        duplicates
    }
}

impl<'a> IntoIterator for &'a MenuTree {
    type Item = &'a MenuEntry;
    type IntoIter = MenuIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Pre-order iterator over a [`MenuTree`]
pub struct MenuIter<'a> {
    stack: Vec<&'a MenuEntry>,
}

impl<'a> Iterator for MenuIter<'a> {
    type Item = &'a MenuEntry;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.stack.pop()?;
        self.stack.extend(entry.children().iter().rev());
        Some(entry)
    }
}
