use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Stable schema identifier for godepr reports.
pub const SCHEMA_REPORT_V1: &str = "godepr.report.v1";

/// A single import that breaks a rule.
///
/// `package_path`, `import_path`, `rule_kind` and `message` are the stable core.
/// `code` names the kind of breach (see [`crate::ids`]). `directory` and
/// `pattern` record which rule scope and which deny pattern produced the violation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Violation {
    pub package_path: String,
    pub import_path: String,
    pub rule_kind: String,
    pub code: String,
    pub message: String,

    pub directory: String,
    pub pattern: String,

    /// Stable identifier intended for dedup and trending:
    /// sha256 of `rule_kind|directory|package_path|import_path`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<String>,
}

impl Violation {
    /// The human-readable rendering shared by every rule kind that flags an import.
    pub fn denied_import_message(package_path: &str, import_path: &str) -> String {
        format!("package {package_path} imports denied dependency {import_path}")
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Fail,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// Godepr-specific summary payload for the report.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Default)]
pub struct GodeprData {
    pub packages_scanned: u32,
    pub imports_scanned: u32,

    pub rules_total: u32,
    pub rules_evaluated: u32,

    /// Rule kinds this build does not know, in first-seen order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped_rule_kinds: Vec<String>,

    pub violations_total: u32,
}

/// The report envelope written by `godepr check --format json`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct GodeprReport {
    /// Versioned schema identifier for the envelope shape.
    pub schema: String,
    pub tool: ToolMeta,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,
    pub verdict: Verdict,
    pub violations: Vec<Violation>,
    pub data: GodeprData,
}
