//! apiconsole - SDK demonstration console
//!
//! Usage: apiconsole [OPTIONS] [COMMAND]
//!
//! Commands:
//!   menu      Open the interactive operation menu (default)
//!   resolve   Show the menu state derived from a location
//!   activate  Show where activating a menu key navigates
//!   label     Show the breadcrumb label of a menu key
//!   tree      Print the configured menu tree
//!   invoke    Invoke the operation at a location

mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;

use apiconsole::config;
use apiconsole::presentation::{Cli, Commands};

use crate::ui::context::UiContext;
use crate::ui::output::print_config_warnings;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let cwd = std::env::current_dir()?;
    let loaded = config::load(cli.config.as_deref(), &cwd)?;
    let ui = UiContext::new(cli.json, cli.verbose, cli.color, &loaded.config);

    print_config_warnings(&loaded.warnings, ui.unicode);
    if ui.verbose > 0 && !ui.json {
        match &loaded.source {
            Some(path) => eprintln!("[config] {}", path.display()),
            None => eprintln!("[config] built-in defaults"),
        }
    }

    let config = &loaded.config;
    match cli.command.unwrap_or(Commands::Menu { path: None }) {
        Commands::Menu { path } => commands::menu::cmd_menu(config, path.as_deref(), &ui),
        Commands::Resolve { path } => commands::resolve::cmd_resolve(config, &path, &ui),
        Commands::Activate { key } => commands::activate::cmd_activate(config, &key, &ui),
        Commands::Label { key } => commands::label::cmd_label(config, &key, &ui),
        Commands::Tree => commands::tree::cmd_tree(config, &ui),
        Commands::Invoke { path, params } => {
            commands::invoke::cmd_invoke(config, &path, &params, &ui)
        }
    }
}
