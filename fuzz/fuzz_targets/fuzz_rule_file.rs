//! Fuzz target for rule file parsing (JSON and TOML).
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_rule_file
//! ```

#![no_main]

use godepr_settings::ConfigFormat;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    for format in [ConfigFormat::Json, ConfigFormat::Toml] {
        if let Ok(cfg) = godepr_settings::parse_config(text, format) {
            let _ = godepr_settings::resolve_rules(cfg);
        }
    }
});
