//! Explain registry for rule kinds and codes.
//!
//! Maps rule kinds and violation codes to human-readable explanations with remediation guidance.

use crate::ids;

/// Explanation entry for a rule kind or code.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the rule kind/code.
    pub title: &'static str,
    /// What the rule does and why it exists.
    pub description: &'static str,
    /// How to fix violations.
    pub remediation: &'static str,
    /// Before/after examples.
    pub examples: ExamplePair,
}

/// Before and after examples.
#[derive(Debug, Clone)]
pub struct ExamplePair {
    /// Configuration or code that would trigger a violation.
    pub before: &'static str,
    /// Configuration or code that passes the rule.
    pub after: &'static str,
}

/// Look up an explanation by rule kind or code.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    match identifier {
        // Rule kinds
        ids::RULE_KIND_DENIED_LIST => Some(explain_denied_list()),

        // Codes
        ids::CODE_DENIED_IMPORT => Some(explain_denied_import()),

        _ => None,
    }
}

/// List all known rule kinds.
pub fn all_rule_kinds() -> &'static [&'static str] {
    &[ids::RULE_KIND_DENIED_LIST]
}

/// List all known codes.
pub fn all_codes() -> &'static [&'static str] {
    &[ids::CODE_DENIED_IMPORT]
}

fn explain_denied_list() -> Explanation {
    Explanation {
        title: "Denied Import List",
        description: "\
Forbids packages under a directory from importing listed packages.

The rule applies to every package whose directory contains `directory` as a
path segment (for example `internal/domain/` covers `/repo/internal/domain/` and
`/repo/internal/domain/model/`). Each entry of `rulebody` is either an exact
import path or a prefix ending in `*`. The prefix is matched as raw text, so
`github.com/acme*` also covers `github.com/acme-tools`.

Rule kinds this version does not know are ignored, so a `.godepr` file written
for a newer godepr still works with an older one.",
        remediation: "\
Move the offending code out of the restricted directory, or depend on an
abstraction that lives inside it instead of the denied package. If the import
is intended, narrow the pattern in `.godepr`.",
        examples: ExamplePair {
            before: r#"{
  "rules": [
    { "directory": "internal/domain/", "ruletype": "denied-list", "rulebody": ["internal/infrastructure/*"] }
  ]
}
// internal/domain/order.go
import "example.com/app/internal/infrastructure/db""#,
            after: r#"// internal/domain/order.go
import "example.com/app/internal/domain/repository""#,
        },
    }
}

fn explain_denied_import() -> Explanation {
    Explanation {
        title: "Denied Import",
        description: "\
A package in the scope of a `denied-list` rule imports a package matched by one
of the rule's patterns. Only direct imports are checked.

Each import produces at most one violation per rule, attributed to the first
pattern that matches.",
        remediation: "\
Remove the import or route the dependency through a package the rule allows.",
        examples: ExamplePair {
            before: r#"package example imports denied dependency github.com/blocked/pkg"#,
            after: r#"No dependency violations found"#,
        },
    }
}
