//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - scope normalization and the three scope predicates
//! - wildcard and exact pattern matching
//! - violation uniqueness and ordering determinism

use crate::engine::{check_denied_list_rule, check_rules, evaluate};
use crate::model::{Package, Rule};
use crate::pattern::matches;
use crate::scope::{in_scope, normalize_directory};
use proptest::prelude::*;

// ============================================================================
// Strategies for generating arbitrary values
// ============================================================================

fn arb_segment() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9_-]{0,7}").unwrap()
}

/// Directory with optional leading and trailing separator.
fn arb_dir() -> impl Strategy<Value = String> {
    (
        prop::collection::vec(arb_segment(), 1..5),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(|(segs, leading, trailing)| {
            let mut dir = segs.join("/");
            if leading {
                dir.insert(0, '/');
            }
            if trailing {
                dir.push('/');
            }
            dir
        })
}

fn arb_import() -> impl Strategy<Value = String> {
    prop::collection::vec(arb_segment(), 1..4).prop_map(|segs| segs.join("/"))
}

fn arb_pattern() -> impl Strategy<Value = String> {
    (arb_import(), any::<bool>()).prop_map(|(p, wildcard)| if wildcard { format!("{p}*") } else { p })
}

fn arb_package() -> impl Strategy<Value = Package> {
    (
        arb_import(),
        arb_dir(),
        prop::collection::vec(arb_import(), 0..6),
    )
        .prop_map(|(import_path, dir, imports)| Package {
            import_path,
            dir,
            imports,
            deps: Vec::new(),
        })
}

fn arb_rule() -> impl Strategy<Value = Rule> {
    (
        prop::collection::vec(arb_segment(), 1..3).prop_map(|s| s.join("/")),
        prop_oneof![
            4 => Just("denied-list".to_string()),
            1 => Just("unsupported-type".to_string()),
        ],
        prop::collection::vec(arb_pattern(), 0..4),
    )
        .prop_map(|(directory, kind, body)| Rule {
            directory,
            kind,
            body,
        })
}

proptest! {
    #[test]
    fn normalize_is_idempotent(dir in ".{0,24}") {
        let once = normalize_directory(&dir);
        prop_assert_eq!(normalize_directory(&once), once.clone());
        prop_assert!(once.ends_with('/'));
    }

    #[test]
    fn wildcard_matches_iff_prefix(prefix in ".{0,12}", s in ".{0,24}") {
        let pattern = format!("{prefix}*");
        prop_assert_eq!(matches(&s, &pattern), s.starts_with(&prefix));
        let joined = format!("{prefix}{s}");
        prop_assert!(matches(&prefix, &pattern));
        prop_assert!(matches(&joined, &pattern));
    }

    #[test]
    fn exact_matches_iff_equal(pattern in "[a-z/]{0,12}", s in "[a-z/]{0,12}") {
        prop_assert_eq!(matches(&s, &pattern), s == pattern);
    }

    #[test]
    fn dir_is_always_in_its_own_scope(pkg in arb_package()) {
        let dir = pkg.dir.clone();
        prop_assert!(in_scope(&dir, &dir));
    }

    #[test]
    fn at_most_one_violation_per_import_per_rule(
        packages in prop::collection::vec(arb_package(), 0..5),
        rule in arb_rule(),
    ) {
        let out = check_denied_list_rule(&packages, &rule);
        let total_imports: usize = packages.iter().map(|p| p.imports.len()).sum();
        prop_assert!(out.len() <= total_imports);

        for v in &out {
            prop_assert!(rule.body.iter().any(|p| p == &v.pattern));
            prop_assert!(matches(&v.import_path, &v.pattern));
            prop_assert!(packages
                .iter()
                .any(|p| p.import_path == v.package_path && in_scope(&p.dir, &rule.directory)));
        }
    }

    #[test]
    fn out_of_scope_packages_contribute_nothing(
        pkg in arb_package(),
        body in prop::collection::vec(arb_pattern(), 0..4),
    ) {
        let rule = Rule::new("zz-never-generated", "denied-list", body);
        prop_assert!(check_denied_list_rule(&[pkg], &rule).is_empty());
    }

    #[test]
    fn unsupported_kinds_are_no_ops(
        packages in prop::collection::vec(arb_package(), 0..5),
        directory in arb_dir(),
    ) {
        let rule = Rule::new(directory, "unsupported-type", ["*"]);
        prop_assert!(check_rules(&packages, &[rule]).is_empty());
    }

    #[test]
    fn evaluation_is_deterministic_and_matches_sequential_order(
        packages in prop::collection::vec(arb_package(), 0..6),
        rules in prop::collection::vec(arb_rule(), 0..6),
    ) {
        let sequential = check_rules(&packages, &rules);
        let again = check_rules(&packages, &rules);
        prop_assert_eq!(&sequential, &again);

        let report = evaluate(&packages, &rules);
        prop_assert_eq!(&report.violations, &sequential);
        prop_assert_eq!(report.data.violations_total as usize, sequential.len());
    }
}
