//! Directory scope matching for rules.
//!
//! A package is in scope of a rule when ANY of three loose, string-based
//! predicates holds on the separator-terminated directories:
//!
//! 1. [`prefix_match`]: the package dir starts with the rule dir.
//! 2. [`suffix_segment_match`]: the package dir ends with `/<rule dir>/`.
//! 3. [`contains_segment_match`]: the package dir contains `/<rule dir>/`.
//!
//! (2) is subsumed by (3). All three are kept as separate named checks and
//! none is an ancestor-directory test: `api/` covers `/srv/other/api/v1/` too.

pub const SEPARATOR: char = '/';

/// Append a trailing separator unless one is already present. Idempotent.
pub fn normalize_directory(dir: &str) -> String {
    if dir.ends_with(SEPARATOR) {
        dir.to_string()
    } else {
        format!("{dir}{SEPARATOR}")
    }
}

/// Both arguments must already be normalized.
pub fn prefix_match(package_dir: &str, rule_dir: &str) -> bool {
    package_dir.starts_with(rule_dir)
}

/// Both arguments must already be normalized.
pub fn suffix_segment_match(package_dir: &str, rule_dir: &str) -> bool {
    package_dir.ends_with(&bounded_segment(rule_dir))
}

/// Both arguments must already be normalized.
pub fn contains_segment_match(package_dir: &str, rule_dir: &str) -> bool {
    package_dir.contains(&bounded_segment(rule_dir))
}

/// `true` when `package_dir` falls under the scope of `rule_dir`.
pub fn in_scope(package_dir: &str, rule_dir: &str) -> bool {
    ScopeMatcher::new(rule_dir).contains(package_dir)
}

/// Rule directory normalized once and reused across every package of a rule.
#[derive(Clone, Debug)]
pub struct ScopeMatcher {
    rule_dir: String,
}

impl ScopeMatcher {
    pub fn new(rule_dir: &str) -> Self {
        Self {
            rule_dir: normalize_directory(rule_dir),
        }
    }

    pub fn rule_dir(&self) -> &str {
        &self.rule_dir
    }

    pub fn contains(&self, package_dir: &str) -> bool {
        let package_dir = normalize_directory(package_dir);
        prefix_match(&package_dir, &self.rule_dir)
            || suffix_segment_match(&package_dir, &self.rule_dir)
            || contains_segment_match(&package_dir, &self.rule_dir)
    }
}

/// `/<dir>/` with exactly one trailing separator of `dir` dropped first.
fn bounded_segment(rule_dir: &str) -> String {
    let trimmed = rule_dir.strip_suffix(SEPARATOR).unwrap_or(rule_dir);
    format!("{SEPARATOR}{trimmed}{SEPARATOR}")
}
