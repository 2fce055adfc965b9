//! Navigation Synchronizer
//!
//! Keeps the two-level operation menu consistent with the current location
//! and turns menu activations back into navigation requests.
//!
//! ## Transitions
//!
//! 1. **Path changed** - derive a fresh [`NavigationState`] from the path
//! 2. **Activated** - compute a target path and hand it to the [`Router`]
//! 3. **Toggled** - expand or collapse a group locally, independent of the URL
//!
//! Activation never touches the state directly; the router reports the new
//! location later and transition 1 picks it up.

use serde::Serialize;

use crate::domain::entities::MenuTree;
use crate::domain::ports::{NavigationEvent, NavigationEventSink, NoopEventSink, Router};
use crate::domain::services::{find_ancestor_groups, resolve_label, resolve_selected_key};
use crate::domain::value_objects::{match_path, route_path, split_composite_key};

/// Route prefix and fallback selection for one menu instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationOptions {
    /// Prefix under which every `<group>/<leaf>` route is nested
    pub base_path: String,
    /// Key selected when the location is not an operation route
    pub default_key: String,
}

impl NavigationOptions {
    pub fn new(base_path: impl Into<String>, default_key: impl Into<String>) -> Self {
        Self {
            base_path: base_path.into(),
            default_key: default_key.into(),
        }
    }
}

/// Derived menu state: the highlighted key and the groups revealing it
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct NavigationState {
    pub selected_key: String,
    pub expanded_group_keys: Vec<String>,
}

impl NavigationState {
    /// State for an unmatched location
    pub fn fallback(default_key: &str) -> Self {
        Self {
            selected_key: default_key.to_string(),
            expanded_group_keys: Vec::new(),
        }
    }

    /// Derive the state for `path`. Pure and deterministic.
    pub fn derive(tree: &MenuTree, options: &NavigationOptions, path: &str) -> Self {
        match match_path(&options.base_path, path) {
            Some(route) => {
                let selected_key = resolve_selected_key(
                    Some(route.group_key.as_str()),
                    Some(route.leaf_key.as_str()),
                    &options.default_key,
                );
                let expanded_group_keys = find_ancestor_groups(tree, &selected_key);
                Self {
                    selected_key,
                    expanded_group_keys,
                }
            }
            None => Self::fallback(&options.default_key),
        }
    }

    pub fn is_expanded(&self, group_key: &str) -> bool {
        self.expanded_group_keys.iter().any(|k| k == group_key)
    }
}

/// Outcome of activating a menu key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    /// Navigation to `target` was requested
    Navigate { target: String },
    /// The key is not navigable (bare group header)
    Ignored,
}

/// Stateful bridge between the menu and the router
pub struct NavigationSynchronizer<R: Router> {
    tree: MenuTree,
    options: NavigationOptions,
    router: R,
    state: NavigationState,
    observed_path: String,
    events: Box<dyn NavigationEventSink>,
}

impl<R: Router> NavigationSynchronizer<R> {
    /// Create a synchronizer and derive the state for the router's current
    /// location.
    pub fn new(tree: MenuTree, options: NavigationOptions, router: R) -> Self {
        let observed_path = router.current_path();
        let state = NavigationState::derive(&tree, &options, &observed_path);
        Self {
            tree,
            options,
            router,
            state,
            observed_path,
            events: Box::new(NoopEventSink),
        }
    }

    /// Attach an event sink
    pub fn with_event_sink(mut self, events: Box<dyn NavigationEventSink>) -> Self {
        self.events = events;
        self
    }

    pub fn tree(&self) -> &MenuTree {
        &self.tree
    }

    pub fn options(&self) -> &NavigationOptions {
        &self.options
    }

    pub fn router(&self) -> &R {
        &self.router
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn selected_key(&self) -> &str {
        &self.state.selected_key
    }

    pub fn expanded_group_keys(&self) -> &[String] {
        &self.state.expanded_group_keys
    }

    /// Last location fed into transition 1
    pub fn observed_path(&self) -> &str {
        &self.observed_path
    }

    /// Transition 1: the location changed.
    ///
    /// Returns `false` when `path` equals the last observed path; the state,
    /// including manual expansion, is left untouched in that case.
    pub fn on_path_changed(&mut self, path: &str) -> bool {
        if path == self.observed_path {
            if self.events.wants_detailed_events() {
                self.events.on_event(NavigationEvent::PathUnchanged {
                    path: path.to_string(),
                });
            }
            return false;
        }

        self.state = NavigationState::derive(&self.tree, &self.options, path);
        self.observed_path = path.to_string();

        self.events.on_event(NavigationEvent::PathChanged {
            path: path.to_string(),
            selected_key: self.state.selected_key.clone(),
            expanded_group_keys: self.state.expanded_group_keys.clone(),
            matched: match_path(&self.options.base_path, path).is_some(),
        });
        true
    }

    /// Re-read the router's location and run transition 1 on it
    pub fn sync_with_router(&mut self) -> bool {
        let path = self.router.current_path();
        self.on_path_changed(&path)
    }

    /// Transition 2: a menu key was activated.
    pub fn activate(&self, key: &str) -> Activation {
        let target = if key == self.options.default_key {
            Some(self.options.base_path.clone())
        } else {
            split_composite_key(key)
                .map(|(group, leaf)| route_path(&self.options.base_path, group, leaf))
        };

        match target {
            Some(target) => {
                self.router.navigate(&target);
                self.events.on_event(NavigationEvent::NavigationRequested {
                    key: key.to_string(),
                    target: target.clone(),
                });
                Activation::Navigate { target }
            }
            None => {
                self.events.on_event(NavigationEvent::ActivationIgnored {
                    key: key.to_string(),
                });
                Activation::Ignored
            }
        }
    }

    /// Manual expand/collapse of a group.
    ///
    /// Keys that do not name a group in the tree are ignored. Returns the
    /// new expansion state, or `None` when ignored.
    pub fn toggle_group(&mut self, key: &str) -> Option<bool> {
        if !self.tree.is_group_key(key) {
            return None;
        }

        let expanded = &mut self.state.expanded_group_keys;
        let now_expanded = match expanded.iter().position(|k| k == key) {
            Some(index) => {
                expanded.remove(index);
                false
            }
            None => {
                expanded.push(key.to_string());
                true
            }
        };

        self.events.on_event(NavigationEvent::GroupToggled {
            key: key.to_string(),
            expanded: now_expanded,
        });
        Some(now_expanded)
    }

    /// Replace the expanded set wholesale, keeping only group keys.
    pub fn set_expanded<I, S>(&mut self, keys: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut expanded: Vec<String> = Vec::new();
        for key in keys {
            let key = key.into();
            if self.tree.is_group_key(&key) && !expanded.contains(&key) {
                expanded.push(key);
            }
        }
        self.state.expanded_group_keys = expanded;
    }

    /// Breadcrumb label for `key`
    pub fn resolve_label(&self, key: &str) -> String {
        resolve_label(&self.tree, key)
    }

    /// Breadcrumb label for the current selection
    pub fn selected_label(&self) -> String {
        self.resolve_label(&self.state.selected_key)
    }
}
