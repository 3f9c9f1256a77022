use crate::{RenderableReport, RenderableVerdict};

pub fn render_markdown(report: &RenderableReport) -> String {
    let mut out = String::new();

    out.push_str("# Godepr report\n\n");
    let verdict = match report.verdict {
        RenderableVerdict::Pass => "PASS",
        RenderableVerdict::Fail => "FAIL",
    };
    out.push_str(&format!(
        "- Verdict: **{}**\n- Packages scanned: {}\n- Rules evaluated: {}\n- Violations: {}\n\n",
        verdict,
        report.data.packages_scanned,
        report.data.rules_evaluated,
        report.data.violations_total
    ));

    if !report.data.skipped_rule_kinds.is_empty() {
        out.push_str(&format!(
            "> Note: unsupported rule kinds skipped: {}\n\n",
            report
                .data
                .skipped_rule_kinds
                .iter()
                .map(|k| format!("`{k}`"))
                .collect::<Vec<_>>()
                .join(", ")
        ));
    }

    if report.violations.is_empty() {
        out.push_str("No dependency violations found.\n");
        return out;
    }

    out.push_str("## Violations\n\n");
    for v in &report.violations {
        out.push_str(&format!(
            "- `{}` imports `{}` (rule `{}` on `{}`, pattern `{}`, code `{}`)\n",
            v.package_path, v.import_path, v.rule_kind, v.directory, v.pattern, v.code
        ));
    }

    out
}
