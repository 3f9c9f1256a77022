//! Rule kinds and their dispatch.
//!
//! Each rule kind is a [`RuleCheck`] registered in [`REGISTRY`]. Adding a kind
//! means adding an implementation and a registry entry; the evaluators do not change.

use crate::model::{Package, Rule};
use godepr_types::Violation;

pub(crate) mod denied_list;


pub use denied_list::DeniedList;

/// Evaluation algorithm for one rule kind.
pub trait RuleCheck: Send + Sync {
    /// The `ruletype` string this check handles.
    fn kind(&self) -> &'static str;

    /// Append every violation of `rule` over `packages` to `out`, in
    /// package-then-import order. Never fails.
    fn run(&self, packages: &[Package], rule: &Rule, out: &mut Vec<Violation>);
}

static REGISTRY: &[&dyn RuleCheck] = &[&DeniedList];

/// Whether a rule was dispatched to a check or skipped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RuleOutcome {
    Evaluated,
    Skipped,
}

/// Find the check registered for `kind`.
pub fn lookup(kind: &str) -> Option<&'static dyn RuleCheck> {
    REGISTRY.iter().copied().find(|check| check.kind() == kind)
}

pub fn is_supported(kind: &str) -> bool {
    lookup(kind).is_some()
}

/// All rule kinds this build evaluates.
pub fn supported_kinds() -> impl Iterator<Item = &'static str> {
    REGISTRY.iter().map(|check| check.kind())
}

/// Dispatch one rule by kind. Unknown kinds contribute nothing.
pub fn run_rule(packages: &[Package], rule: &Rule, out: &mut Vec<Violation>) -> RuleOutcome {
    match lookup(&rule.kind) {
        Some(check) => {
            check.run(packages, rule, out);
            RuleOutcome::Evaluated
        }
        None => RuleOutcome::Skipped,
    }
}
