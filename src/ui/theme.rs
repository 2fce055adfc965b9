use crossterm::style::Color;

/// Design tokens for the console UI.
///
/// Design constraints:
/// - Only 4 semantic colors (`colors::*`)
/// - All icons must be sourced from this module
pub mod colors {
    use super::Color;

    /// #22C55E
    pub const SUCCESS: Color = Color::Green;
    /// #EF4444
    pub const ERROR: Color = Color::Red;
    /// #06B6D4
    pub const INFO: Color = Color::Cyan;
    /// #6B7280
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";

    // Menu rows.
    pub const SELECTED: &str = "●";
    pub const UNSELECTED: &str = "○";
    pub const CURSOR: &str = "❯";

    // Group expansion.
    pub const EXPAND: &str = "▼";
    pub const COLLAPSE: &str = "▶";

    pub const CONSOLE: &str = "⌘";
    pub const SEPARATOR: &str = "─";
}

pub mod icons_ascii {
    pub const ERROR: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";

    pub const SELECTED: &str = "(*)";
    pub const UNSELECTED: &str = "( )";
    pub const CURSOR: &str = ">";

    pub const EXPAND: &str = "[v]";
    pub const COLLAPSE: &str = "[>]";

    pub const CONSOLE: &str = "[API]";
    pub const SEPARATOR: &str = "-";
}

/// Pick the Unicode or ASCII variant of an icon
pub fn icon(unicode: bool, unicode_icon: &'static str, ascii_icon: &'static str) -> &'static str {
    if unicode {
        unicode_icon
    } else {
        ascii_icon
    }
}
