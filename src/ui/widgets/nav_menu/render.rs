//! Terminal rendering functions for the navigation menu.

use crossterm::style::Stylize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::ui::theme::{colors, icon, icons, icons_ascii};

use super::menu::MenuRow;

/// Render a single menu row, truncated to `width` columns
pub fn render_menu_row(
    row: &MenuRow,
    is_cursor: bool,
    is_selected: bool,
    unicode: bool,
    color: bool,
    width: u16,
) -> String {
    let cursor = if is_cursor {
        format!("{} ", icon(unicode, icons::CURSOR, icons_ascii::CURSOR))
    } else {
        " ".repeat(icon(unicode, icons::CURSOR, icons_ascii::CURSOR).width() + 1)
    };
    let indent = "  ".repeat(row.depth);

    let marker = if row.is_group {
        if row.expanded {
            icon(unicode, icons::EXPAND, icons_ascii::EXPAND)
        } else {
            icon(unicode, icons::COLLAPSE, icons_ascii::COLLAPSE)
        }
    } else if is_selected {
        icon(unicode, icons::SELECTED, icons_ascii::SELECTED)
    } else {
        icon(unicode, icons::UNSELECTED, icons_ascii::UNSELECTED)
    };

    let suffix = if row.is_group {
        format!(" ({})", row.leaf_count)
    } else {
        String::new()
    };

    let prefix = format!("{}{}{} ", cursor, indent, marker);
    let budget = (width as usize).saturating_sub(prefix.width() + suffix.width());
    let label = truncate_to_width(&row.label, budget, unicode);

    if !color {
        return format!("{}{}{}", prefix, label, suffix);
    }

    let label = if is_selected {
        format!("{}", label.as_str().with(colors::SUCCESS).bold())
    } else if is_cursor {
        format!("{}", label.as_str().with(colors::INFO))
    } else {
        label
    };
    format!("{}{}{}", prefix, label, suffix.as_str().with(colors::DIM))
}

/// Truncate `text` so it occupies at most `max` terminal columns
pub fn truncate_to_width(text: &str, max: usize, unicode: bool) -> String {
    if text.width() <= max {
        return text.to_string();
    }

    let ellipsis = if unicode { "…" } else { "..." };
    let keep = max.saturating_sub(ellipsis.width());
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > keep {
            break;
        }
        used += w;
        out.push(ch);
    }
    if max >= ellipsis.width() {
        out.push_str(ellipsis);
    }
    out
}

/// Render the status bar: current location and breadcrumb
pub fn render_status_bar(path: &str, label: &str, unicode: bool, width: u16) -> String {
    let budget = (width as usize).saturating_sub(10);
    format!(
        "Location: {}\nCurrent:  {}",
        truncate_to_width(path, budget, unicode),
        truncate_to_width(label, budget, unicode)
    )
}

/// Render the help bar showing keyboard shortcuts
pub fn render_help_bar() -> String {
    String::from(
        "[Enter] Open    [b] Back    [q] Quit\n\
         [a] Expand all  [n] Collapse all\n\
         (Use ↑↓ to navigate, →← to expand/collapse)",
    )
}
