//! Fuzz target for `go list -json` stream decoding.
//!
//! Goal: decoding should **never panic** on any input.
//! It may return errors, but panics are unacceptable.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_manifest_stream
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = godepr_manifest::fuzz::parse_stream(text);
    }

    let _ = godepr_manifest::read_packages(data);
});
