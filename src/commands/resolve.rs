use anyhow::Result;

use apiconsole::config::ConsoleConfig;
use apiconsole::presentation::output::{render_state, state_json};

use crate::ui::context::UiContext;

pub fn cmd_resolve(config: &ConsoleConfig, path: &str, ui: &UiContext) -> Result<()> {
    let sync = super::synchronizer_at(config, path, ui);
    let label = sync.selected_label();

    if ui.json {
        crate::ui::json::emit(state_json(path, sync.state(), &label))?;
    } else {
        println!("{}", render_state(path, sync.state(), &label));
    }
    Ok(())
}
