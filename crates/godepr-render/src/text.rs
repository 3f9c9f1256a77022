use crate::RenderableReport;

/// Render the console summary printed by `godepr check`.
pub fn render_text(report: &RenderableReport) -> String {
    if report.violations.is_empty() {
        return "No dependency violations found\n".to_string();
    }

    let mut out = String::new();
    out.push_str("Dependency violations found:\n\n");
    for v in &report.violations {
        out.push_str(&format!("  {}\n", v.message));
    }
    out.push('\n');
    out.push_str(&format!("Total violations: {}\n", report.violations.len()));
    out
}
