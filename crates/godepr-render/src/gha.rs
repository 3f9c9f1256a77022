use crate::RenderableReport;

/// Render violations as GitHub Actions workflow command annotations.
///
/// Format:
/// `::error title=godepr {rule_kind}/{code}::{message} (pattern `{pattern}`)`
pub fn render_github_annotations(report: &RenderableReport) -> Vec<String> {
    report
        .violations
        .iter()
        .map(|v| {
            let message = format!("{} (pattern `{}`)", v.message, v.pattern);
            format!(
                "::error title=godepr {}/{}::{}",
                escape_property(&v.rule_kind),
                escape_property(&v.code),
                escape_data(&message)
            )
        })
        .collect()
}

fn escape_data(s: &str) -> String {
    s.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

fn escape_property(s: &str) -> String {
    escape_data(s).replace(':', "%3A").replace(',', "%2C")
}
