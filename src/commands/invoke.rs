use anyhow::Result;

use apiconsole::config::ConsoleConfig;
use apiconsole::presentation::output::{invocation_json, render_invocation};
use apiconsole::{parse_params, EchoClient, InvokeUseCase};

use crate::ui::context::UiContext;

/// Open the operation screen at `path` and submit `params` once.
pub fn cmd_invoke(config: &ConsoleConfig, path: &str, params: &str, ui: &UiContext) -> Result<()> {
    let sync = super::synchronizer_at(config, path, ui);
    let params = parse_params(params)?;

    let client = EchoClient::new(config.client.service_prefix.clone());
    let invoke = InvokeUseCase::new(client).with_event_sink(super::build_event_sink(ui));
    let outcome = invoke.execute(sync.tree(), sync.selected_key(), params)?;

    if ui.json {
        crate::ui::json::emit(invocation_json(&outcome))?;
    } else {
        println!("{}", render_invocation(&outcome, ui.unicode));
    }
    Ok(())
}
