#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Config parsing, and resolving against whatever menu it yields, never panics
        if let Ok(config) = toml::from_str::<apiconsole::ConsoleConfig>(content) {
            let options = config.navigation.options();
            let state = apiconsole::NavigationState::derive(&config.menu, &options, "/apis/a/b");
            let _ = apiconsole::resolve_label(&config.menu, &state.selected_key);
            let _ = config.menu.duplicate_keys();
        }
    }
});
