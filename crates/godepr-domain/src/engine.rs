use crate::checks::{self, DeniedList, RuleCheck, RuleOutcome};
use crate::model::{Package, Rule};
use crate::report::DomainReport;
use godepr_types::{GodeprData, Verdict, Violation};
use rayon::prelude::*;

/// Evaluate one rule with `denied-list` semantics, whatever its kind tag says.
pub fn check_denied_list_rule(packages: &[Package], rule: &Rule) -> Vec<Violation> {
    let mut out = Vec::new();
    DeniedList.run(packages, rule, &mut out);
    out
}

/// Evaluate every rule in order and concatenate the violations.
///
/// Rules of unknown kind contribute nothing. No deduplication across rules.
pub fn check_rules(packages: &[Package], rules: &[Rule]) -> Vec<Violation> {
    let mut out = Vec::new();
    for rule in rules {
        checks::run_rule(packages, rule, &mut out);
    }
    out
}

/// Evaluate all rules and summarize the run.
///
/// Rules are evaluated in parallel; results are merged back in rule order so
/// the violation list equals [`check_rules`].
pub fn evaluate(packages: &[Package], rules: &[Rule]) -> DomainReport {
    let per_rule: Vec<(RuleOutcome, Vec<Violation>)> = rules
        .par_iter()
        .map(|rule| {
            let mut out = Vec::new();
            let outcome = checks::run_rule(packages, rule, &mut out);
            (outcome, out)
        })
        .collect();

    let mut violations = Vec::new();
    let mut rules_evaluated = 0u32;
    let mut skipped_rule_kinds: Vec<String> = Vec::new();

    for (rule, (outcome, found)) in rules.iter().zip(per_rule) {
        match outcome {
            RuleOutcome::Evaluated => rules_evaluated = rules_evaluated.saturating_add(1),
            RuleOutcome::Skipped => {
                if !skipped_rule_kinds.contains(&rule.kind) {
                    skipped_rule_kinds.push(rule.kind.clone());
                }
            }
        }
        violations.extend(found);
    }

    let verdict = if violations.is_empty() {
        Verdict::Pass
    } else {
        Verdict::Fail
    };

    let data = GodeprData {
        packages_scanned: saturating_count(packages.len()),
        imports_scanned: saturating_count(packages.iter().map(|p| p.imports.len()).sum()),
        rules_total: saturating_count(rules.len()),
        rules_evaluated,
        skipped_rule_kinds,
        violations_total: saturating_count(violations.len()),
    };

    DomainReport {
        verdict,
        violations,
        data,
    }
}

/// Summary counts clamp at `u32::MAX` instead of wrapping.
fn saturating_count(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}
