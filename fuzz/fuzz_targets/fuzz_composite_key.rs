#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(key) = std::str::from_utf8(data) {
        if let Some((group, leaf)) = apiconsole::split_composite_key(key) {
            assert!(!group.is_empty() && !leaf.is_empty());
            assert!(!group.contains('-'));
            assert_eq!(apiconsole::composite_key(group, leaf), key);
        }
    }
});
