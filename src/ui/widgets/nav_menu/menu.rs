//! NavMenu state and action handling.
//!
//! The widget shows the visible part of the operation tree. It owns only the
//! cursor; selection and expansion come from the [`NavigationState`] it is
//! rebuilt from, and user intents are returned as [`MenuCommand`]s for the
//! host loop to apply through the synchronizer.

use apiconsole::{MenuEntry, MenuTree, NavigationState};

use super::render::render_menu_row;

/// A visible menu row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuRow {
    pub key: String,
    pub label: String,
    /// Depth level (0 = root entry)
    pub depth: usize,
    pub is_group: bool,
    /// Whether the group's children are visible
    pub expanded: bool,
    /// Operations under this group
    pub leaf_count: usize,
    /// Row index of the enclosing group
    pub parent: Option<usize>,
}

/// Menu action from the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Up,
    Down,
    Activate,
    Expand,
    Collapse,
    /// Open every group
    ExpandAll,
    /// Close every group
    CollapseAll,
    Back,
    Quit,
}

/// What the host loop should do after an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuCommand {
    None,
    /// Activate a leaf
    Activate(String),
    /// Expand or collapse a group
    Toggle(String),
    /// Replace the whole open set
    SetExpanded(Vec<String>),
    /// Go back in history
    Back,
    Quit,
}

/// Interactive two-level operation menu
#[derive(Debug, Default)]
pub struct NavMenu {
    rows: Vec<MenuRow>,
    cursor: usize,
    /// Every group key in the tree, visible or not
    groups: Vec<String>,
}

impl NavMenu {
    pub fn new(tree: &MenuTree, state: &NavigationState) -> Self {
        let mut menu = Self::default();
        menu.rebuild(tree, state);
        menu.focus(&state.selected_key);
        menu
    }

    /// Re-flatten the visible rows, keeping the cursor on the same key when
    /// it is still visible
    pub fn rebuild(&mut self, tree: &MenuTree, state: &NavigationState) {
        let current = self.current().map(|row| row.key.clone());

        self.groups = tree
            .iter()
            .filter(|entry| entry.is_group())
            .map(|entry| entry.key().to_string())
            .collect();

        self.rows.clear();
        for entry in tree.roots() {
            Self::flatten_entry(entry, 0, None, state, &mut self.rows);
        }

        if let Some(key) = current {
            if self.focus(&key) {
                return;
            }
        }
        if !self.rows.is_empty() && self.cursor >= self.rows.len() {
            self.cursor = self.rows.len() - 1;
        }
    }

    fn flatten_entry(
        entry: &MenuEntry,
        depth: usize,
        parent: Option<usize>,
        state: &NavigationState,
        rows: &mut Vec<MenuRow>,
    ) {
        let index = rows.len();
        let expanded = entry.is_group() && state.is_expanded(entry.key());
        rows.push(MenuRow {
            key: entry.key().to_string(),
            label: entry.label().to_string(),
            depth,
            is_group: entry.is_group(),
            expanded,
            leaf_count: entry.leaf_count(),
            parent,
        });

        if expanded {
            for child in entry.children() {
                Self::flatten_entry(child, depth + 1, Some(index), state, rows);
            }
        }
    }

    /// Move the cursor to `key`. Returns `false` if the key is not visible.
    pub fn focus(&mut self, key: &str) -> bool {
        match self.rows.iter().position(|row| row.key == key) {
            Some(index) => {
                self.cursor = index;
                true
            }
            None => false,
        }
    }

    /// Row under the cursor
    pub fn current(&self) -> Option<&MenuRow> {
        self.rows.get(self.cursor)
    }

    /// Handle a menu action
    pub fn handle_action(&mut self, action: MenuAction) -> MenuCommand {
        match action {
            MenuAction::Up => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                }
                MenuCommand::None
            }
            MenuAction::Down => {
                if self.cursor + 1 < self.rows.len() {
                    self.cursor += 1;
                }
                MenuCommand::None
            }
            MenuAction::Activate => match self.current() {
                Some(row) if row.is_group => MenuCommand::Toggle(row.key.clone()),
                Some(row) => MenuCommand::Activate(row.key.clone()),
                None => MenuCommand::None,
            },
            MenuAction::Expand => match self.current() {
                Some(row) if row.is_group && !row.expanded => MenuCommand::Toggle(row.key.clone()),
                _ => MenuCommand::None,
            },
            MenuAction::Collapse => {
                let Some(row) = self.current() else {
                    return MenuCommand::None;
                };
                if row.is_group && row.expanded {
                    return MenuCommand::Toggle(row.key.clone());
                }
                // Collapsing inside a group jumps to its header.
                if let Some(parent) = row.parent {
                    self.cursor = parent;
                }
                MenuCommand::None
            }
            MenuAction::ExpandAll => MenuCommand::SetExpanded(self.groups.clone()),
            MenuAction::CollapseAll => MenuCommand::SetExpanded(Vec::new()),
            MenuAction::Back => MenuCommand::Back,
            MenuAction::Quit => MenuCommand::Quit,
        }
    }

    /// Render the visible rows, one per line
    pub fn render(&self, selected_key: &str, unicode: bool, color: bool, width: u16) -> String {
        let mut out = String::new();
        for (i, row) in self.rows.iter().enumerate() {
            let line = render_menu_row(
                row,
                i == self.cursor,
                row.key == selected_key,
                unicode,
                color,
                width,
            );
            out.push_str(&line);
            out.push('\n');
        }
        out
    }
}
