//! Command handlers, one per subcommand.

pub mod activate;
pub mod invoke;
pub mod label;
pub mod menu;
pub mod resolve;
pub mod tree;

use apiconsole::config::ConsoleConfig;
use apiconsole::domain::ports::NoopEventSink;
use apiconsole::infrastructure::{ConsoleEventSink, JsonEventSink};
use apiconsole::{MemoryRouter, NavigationEventSink, NavigationSynchronizer};

use crate::ui::context::UiContext;

/// Event sink for non-interactive commands: NDJSON with `--json`, log lines
/// with `-v`, silent otherwise. Events always go to stderr.
pub fn build_event_sink(ui: &UiContext) -> Box<dyn NavigationEventSink> {
    if ui.json {
        Box::new(JsonEventSink::stderr())
    } else if ui.verbose > 0 {
        Box::new(ConsoleEventSink::stderr(ui.verbose))
    } else {
        Box::new(NoopEventSink)
    }
}

/// Synchronizer over a fresh in-memory router opened at `path`
pub fn synchronizer_at(
    config: &ConsoleConfig,
    path: &str,
    ui: &UiContext,
) -> NavigationSynchronizer<MemoryRouter> {
    NavigationSynchronizer::new(
        config.menu.clone(),
        config.navigation.options(),
        MemoryRouter::new(path),
    )
    .with_event_sink(build_event_sink(ui))
}
