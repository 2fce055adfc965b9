use anyhow::Result;

use apiconsole::config::ConsoleConfig;
use apiconsole::resolve_label;

use crate::ui::context::UiContext;

pub fn cmd_label(config: &ConsoleConfig, key: &str, ui: &UiContext) -> Result<()> {
    let label = resolve_label(&config.menu, key);

    if ui.json {
        crate::ui::json::emit(serde_json::json!({
            "key": key,
            "label": label,
        }))?;
    } else {
        println!("{}", label);
    }
    Ok(())
}
