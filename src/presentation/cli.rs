//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--config, --json, --color, --verbose) are inherited by all subcommands
//! - Running without a subcommand opens the interactive menu

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// apiconsole - SDK demonstration console with a URL-synchronized menu
#[derive(Parser, Debug)]
#[command(name = "apiconsole")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'apiconsole' without arguments to open the interactive menu.")]
pub struct Cli {
    /// Configuration file (overrides APICONSOLE_CONFIG and discovery)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Machine-readable JSON output
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Open the interactive operation menu
    Menu {
        /// Location to open at (defaults to navigation.start_path)
        #[arg(long)]
        path: Option<String>,
    },

    /// Show the menu state derived from a location
    Resolve {
        /// Location path, e.g. /apis/V2NIMLoginService/login
        path: String,
    },

    /// Show where activating a menu key navigates
    Activate {
        /// Menu key, e.g. V2NIMLoginService-login
        key: String,
    },

    /// Show the breadcrumb label of a menu key
    Label {
        /// Menu key
        key: String,
    },

    /// Print the configured menu tree
    Tree,

    /// Invoke the operation at a location
    Invoke {
        /// Location path of the operation screen
        path: String,

        /// JSON parameters forwarded to the SDK call
        #[arg(short, long, default_value = "")]
        params: String,
    },
}
