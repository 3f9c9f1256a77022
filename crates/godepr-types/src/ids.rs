//! Stable identifiers for rule kinds and violation codes.
//!
//! Rule kinds are the `ruletype` strings users write in `.godepr`. Codes are
//! short snake_case discriminators attached to violations.

// Rule kinds
pub const RULE_KIND_DENIED_LIST: &str = "denied-list";

// Codes: denied-list
pub const CODE_DENIED_IMPORT: &str = "denied_import";
