use anyhow::{bail, Result};

use apiconsole::config::ConsoleConfig;
use apiconsole::{EchoClient, InvokeUseCase, MemoryRouter, NavigationSynchronizer};

use crate::ui::context::UiContext;
use crate::ui::widgets::nav_menu::{run_interactive, EventLog};

const RECENT_EVENTS: usize = 6;

pub fn cmd_menu(config: &ConsoleConfig, path: Option<&str>, ui: &UiContext) -> Result<()> {
    if !ui.caps.is_tty {
        bail!(
            "The interactive menu needs a terminal. Use a subcommand instead, e.g. 'apiconsole tree'."
        );
    }

    let capacity = if ui.verbose > 0 { RECENT_EVENTS } else { 0 };
    let log = EventLog::new(capacity, ui.verbose >= 2);

    let start = path.unwrap_or_else(|| config.navigation.start_path());
    let mut sync = NavigationSynchronizer::new(
        config.menu.clone(),
        config.navigation.options(),
        MemoryRouter::new(start),
    )
    .with_event_sink(log.sink());

    let client = EchoClient::new(config.client.service_prefix.clone());
    let invoke = InvokeUseCase::new(client).with_event_sink(log.sink());

    run_interactive(&mut sync, &invoke, &log, ui)
}
