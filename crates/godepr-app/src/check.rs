//! The `check` use case: load packages and rules, evaluate, produce a report.

use anyhow::Context;
use godepr_domain::report::DomainReport;
use godepr_settings::{ConfigFormat, ResolvedRules};
use godepr_types::{GodeprReport, SCHEMA_REPORT_V1, ToolMeta, Verdict};
use time::OffsetDateTime;

/// Input for the check use case.
#[derive(Clone, Debug)]
pub struct CheckInput<'a> {
    /// Concatenated `go list -json` records.
    pub manifest_text: &'a str,
    /// Rule file contents (empty string if not found).
    pub config_text: &'a str,
    pub config_format: ConfigFormat,
}

/// Output from the check use case.
#[derive(Clone, Debug)]
pub struct CheckOutput {
    /// The generated report.
    pub report: GodeprReport,
    /// The rules the report was evaluated against.
    pub resolved_rules: ResolvedRules,
}

/// Run the check use case: parse rules, decode packages, evaluate, produce report.
///
/// Packages are decoded only after the rules resolve, and nothing is
/// evaluated unless every package record decodes.
pub fn run_check(input: CheckInput<'_>) -> anyhow::Result<CheckOutput> {
    let started_at = OffsetDateTime::now_utc();

    let cfg = godepr_settings::parse_config(input.config_text, input.config_format)
        .context("parse config")?;
    let resolved_rules = godepr_settings::resolve_rules(cfg).context("resolve config")?;

    if resolved_rules.rules.is_empty() {
        tracing::warn!("no rules configured; every package passes");
    }
    for kind in resolved_rules.unsupported_kinds() {
        tracing::warn!(rule_kind = kind, "skipping rules of unsupported kind");
    }

    let packages =
        godepr_manifest::parse_packages(input.manifest_text).context("parse packages")?;
    tracing::debug!(
        packages = packages.len(),
        rules = resolved_rules.rules.len(),
        "evaluating rules"
    );

    let DomainReport {
        verdict,
        violations,
        data,
    } = godepr_domain::evaluate(&packages, &resolved_rules.rules);
    tracing::debug!(violations = violations.len(), ?verdict, "evaluation finished");

    let report = GodeprReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "godepr".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at: OffsetDateTime::now_utc(),
        verdict,
        violations,
        data,
    };

    Ok(CheckOutput {
        report,
        resolved_rules,
    })
}

/// Map verdict to exit code: 0 = pass, 2 = violations found.
pub fn verdict_exit_code(verdict: Verdict) -> i32 {
    match verdict {
        Verdict::Pass => 0,
        Verdict::Fail => 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MANIFEST: &str = r#"{"ImportPath":"proj/example","Dir":"/project/example/","Imports":["fmt","github.com/blocked/pkg"]}"#;
    const RULES: &str = r#"{"rules":[{"directory":"example/","ruletype":"denied-list","rulebody":["github.com/blocked/*"]}]}"#;

    fn input<'a>(manifest_text: &'a str, config_text: &'a str) -> CheckInput<'a> {
        CheckInput {
            manifest_text,
            config_text,
            config_format: ConfigFormat::Json,
        }
    }

    #[test]
    fn reports_denied_import() {
        let output = run_check(input(MANIFEST, RULES)).expect("run_check");
        let report = output.report;

        assert_eq!(report.schema, SCHEMA_REPORT_V1);
        assert_eq!(report.tool.name, "godepr");
        assert_eq!(report.verdict, Verdict::Fail);
        assert_eq!(report.violations.len(), 1);
        assert_eq!(report.violations[0].import_path, "github.com/blocked/pkg");
        assert!(report.finished_at >= report.started_at);
    }

    #[test]
    fn out_of_scope_rule_passes() {
        let rules = RULES.replace("example/", "other/");
        let output = run_check(input(MANIFEST, &rules)).expect("run_check");
        assert_eq!(output.report.verdict, Verdict::Pass);
        assert!(output.report.violations.is_empty());
    }

    #[test]
    fn empty_manifest_and_config_pass() {
        let output = run_check(input("", "")).expect("run_check");
        assert_eq!(output.report.verdict, Verdict::Pass);
        assert_eq!(output.report.data.packages_scanned, 0);
        assert!(output.resolved_rules.rules.is_empty());
    }

    #[test]
    fn malformed_manifest_fails_the_run() {
        let err = run_check(input("{invalid}", RULES)).unwrap_err();
        assert!(format!("{err:#}").contains("parse packages"));
        assert!(
            err.downcast_ref::<godepr_manifest::ManifestError>()
                .is_some()
        );
    }

    #[test]
    fn malformed_config_fails_before_packages_are_read() {
        let err = run_check(input("{invalid}", "{")).unwrap_err();
        assert!(format!("{err:#}").contains("parse config"));
    }

    #[test]
    fn unsupported_kind_is_recorded_not_failed() {
        let rules = RULES.replace("denied-list", "unsupported-type");
        let output = run_check(input(MANIFEST, &rules)).expect("run_check");
        assert_eq!(output.report.verdict, Verdict::Pass);
        assert_eq!(
            output.report.data.skipped_rule_kinds,
            vec!["unsupported-type".to_string()]
        );
    }

    #[test]
    fn verdict_exit_codes() {
        assert_eq!(verdict_exit_code(Verdict::Pass), 0);
        assert_eq!(verdict_exit_code(Verdict::Fail), 2);
    }
}
