use anyhow::Result;

use apiconsole::config::ConsoleConfig;
use apiconsole::presentation::output::{activation_json, render_activation};
use apiconsole::Activation;

use crate::ui::context::UiContext;

/// Activate `key` from the configured start location and report the target.
///
/// The navigation is committed and fed back, so `-v` shows the full round
/// trip.
pub fn cmd_activate(config: &ConsoleConfig, key: &str, ui: &UiContext) -> Result<()> {
    let mut sync = super::synchronizer_at(config, config.navigation.start_path(), ui);
    let activation = sync.activate(key);

    if let Activation::Navigate { .. } = activation {
        if let Some(path) = sync.router().poll_all() {
            sync.on_path_changed(&path);
        }
    }

    if ui.json {
        let mut value = activation_json(key, &activation);
        value["selected_key"] = sync.selected_key().into();
        crate::ui::json::emit(value)?;
    } else {
        println!("{}", render_activation(key, &activation));
    }
    Ok(())
}
