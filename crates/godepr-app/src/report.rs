use anyhow::Context;
use godepr_render::{RenderableData, RenderableReport, RenderableVerdict, RenderableViolation};
use godepr_types::{GodeprReport, SCHEMA_REPORT_V1, Verdict, Violation};

pub fn parse_report_json(text: &str) -> anyhow::Result<GodeprReport> {
    let value: serde_json::Value = serde_json::from_str(text).context("parse report json")?;

    let schema = value
        .get("schema")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();
    if schema != SCHEMA_REPORT_V1 {
        anyhow::bail!("unknown report schema: {schema:?} (expected {SCHEMA_REPORT_V1})");
    }

    serde_json::from_value(value).context("parse godepr v1 report")
}

pub fn serialize_report(report: &GodeprReport) -> anyhow::Result<Vec<u8>> {
    let mut data = serde_json::to_vec_pretty(report).context("serialize report")?;
    data.push(b'\n');
    Ok(data)
}

pub fn to_renderable(report: &GodeprReport) -> RenderableReport {
    RenderableReport {
        verdict: match report.verdict {
            Verdict::Pass => RenderableVerdict::Pass,
            Verdict::Fail => RenderableVerdict::Fail,
        },
        violations: report.violations.iter().map(renderable_violation).collect(),
        data: RenderableData {
            packages_scanned: report.data.packages_scanned,
            rules_evaluated: report.data.rules_evaluated,
            violations_total: report.data.violations_total,
            skipped_rule_kinds: report.data.skipped_rule_kinds.clone(),
        },
    }
}

fn renderable_violation(v: &Violation) -> RenderableViolation {
    RenderableViolation {
        package_path: v.package_path.clone(),
        import_path: v.import_path.clone(),
        rule_kind: v.rule_kind.clone(),
        code: v.code.clone(),
        directory: v.directory.clone(),
        pattern: v.pattern.clone(),
        message: v.message.clone(),
    }
}
