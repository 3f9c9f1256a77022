//! Deny pattern matching.
//!
//! A pattern ending in [`WILDCARD`] is a raw string prefix: `pkg*` matches
//! `pkg`, `pkg/sub` and `pkgextra`. Anything else must equal the import exactly.
//! Only a single trailing wildcard is recognized.

pub const WILDCARD: char = '*';

pub fn matches(import_path: &str, pattern: &str) -> bool {
    match pattern.strip_suffix(WILDCARD) {
        Some(prefix) => import_path.starts_with(prefix),
        None => import_path == pattern,
    }
}

/// The first pattern in `patterns` that matches `import_path`.
pub fn first_match<'a>(import_path: &str, patterns: &'a [String]) -> Option<&'a str> {
    patterns
        .iter()
        .map(String::as_str)
        .find(|pattern| matches(import_path, pattern))
}
