#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(path) = std::str::from_utf8(data) {
        // Path matching must never panic, and a match must rebuild the same path
        if let Some(route) = apiconsole::match_path("/apis", path) {
            assert_eq!(
                apiconsole::route_path("/apis", &route.group_key, &route.leaf_key),
                path
            );
        }
    }
});
