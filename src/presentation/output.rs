//! Output Rendering
//!
//! Text and JSON renderings of navigation results. Text renderers return
//! strings so the binary decides where they go.

use serde_json::{json, Value};

use crate::application::{Activation, InvocationOutcome, NavigationState};
use crate::domain::entities::{MenuEntry, MenuTree};

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for scripting
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// Icons for output rendering
struct Icons {
    group: &'static str,
    leaf: &'static str,
    check: &'static str,
}

impl Icons {
    fn unicode() -> Self {
        Self {
            group: "▸",
            leaf: "•",
            check: "✓",
        }
    }

    fn ascii() -> Self {
        Self {
            group: "+",
            leaf: "-",
            check: "[OK]",
        }
    }

    fn pick(unicode: bool) -> Self {
        if unicode {
            Self::unicode()
        } else {
            Self::ascii()
        }
    }
}

/// Render a derived navigation state
pub fn render_state(path: &str, state: &NavigationState, label: &str) -> String {
    let expanded = if state.expanded_group_keys.is_empty() {
        "(none)".to_string()
    } else {
        state.expanded_group_keys.join(", ")
    };
    format!(
        "Path:     {}\nSelected: {}\nLabel:    {}\nExpanded: {}",
        path, state.selected_key, label, expanded
    )
}

pub fn state_json(path: &str, state: &NavigationState, label: &str) -> Value {
    json!({
        "path": path,
        "selected_key": state.selected_key,
        "expanded_group_keys": state.expanded_group_keys,
        "label": label,
    })
}

/// Render the outcome of an activation
pub fn render_activation(key: &str, activation: &Activation) -> String {
    match activation {
        Activation::Navigate { target } => format!("{} -> {}", key, target),
        Activation::Ignored => format!("{} is not navigable (group header)", key),
    }
}

pub fn activation_json(key: &str, activation: &Activation) -> Value {
    match activation {
        Activation::Navigate { target } => json!({
            "key": key,
            "navigate": true,
            "target": target,
        }),
        Activation::Ignored => json!({
            "key": key,
            "navigate": false,
            "target": null,
        }),
    }
}

/// Render the whole menu tree, one entry per line
pub fn render_tree(tree: &MenuTree, unicode: bool) -> String {
    let icons = Icons::pick(unicode);
    let mut lines = Vec::new();
    for entry in tree.roots() {
        render_entry(entry, 0, &icons, &mut lines);
    }
    lines.join("\n")
}

fn render_entry(entry: &MenuEntry, depth: usize, icons: &Icons, lines: &mut Vec<String>) {
    let indent = "    ".repeat(depth);
    match entry {
        MenuEntry::Leaf { key, label } => {
            lines.push(format!("{}{} {} ({})", indent, icons.leaf, label, key));
        }
        MenuEntry::Group {
            key,
            label,
            children,
        } => {
            let count = entry.leaf_count();
            let noun = if count == 1 { "operation" } else { "operations" };
            lines.push(format!(
                "{}{} {} ({}, {} {})",
                indent, icons.group, label, key, count, noun
            ));
            for child in children {
                render_entry(child, depth + 1, icons, lines);
            }
        }
    }
}

pub fn tree_json(tree: &MenuTree) -> Value {
    serde_json::to_value(tree).unwrap_or(Value::Null)
}

/// Render a forwarded operation and its result
pub fn render_invocation(outcome: &InvocationOutcome, unicode: bool) -> String {
    let icons = Icons::pick(unicode);
    let result = serde_json::to_string_pretty(&outcome.result)
        .unwrap_or_else(|_| outcome.result.to_string());
    format!(
        "{} {}\n  {}.{}\n{}",
        icons.check, outcome.label, outcome.service, outcome.method, result
    )
}

pub fn invocation_json(outcome: &InvocationOutcome) -> Value {
    serde_json::to_value(outcome).unwrap_or(Value::Null)
}
