use anyhow::Result;

use apiconsole::config::ConsoleConfig;
use apiconsole::presentation::output::{render_tree, tree_json};

use crate::ui::context::UiContext;

pub fn cmd_tree(config: &ConsoleConfig, ui: &UiContext) -> Result<()> {
    if ui.json {
        crate::ui::json::emit(tree_json(&config.menu))?;
    } else if config.menu.is_empty() {
        println!("(empty menu)");
    } else {
        println!("{}", render_tree(&config.menu, ui.unicode));
    }
    Ok(())
}
