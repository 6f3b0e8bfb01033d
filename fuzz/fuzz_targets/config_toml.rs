#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        if let Ok(config) = fetchbench::fuzzing::apply_config_from_toml(input) {
            debug_assert!(config.url.starts_with("http"));
            if let Some(timeout) = config.client.timeout {
                debug_assert!(!timeout.is_zero());
            }
        }
    }
});
