#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableVerdict {
    Pass,
    Fail,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableViolation {
    pub package_path: String,
    pub import_path: String,
    pub rule_kind: String,
    pub code: String,
    pub directory: String,
    pub pattern: String,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableData {
    pub packages_scanned: u32,
    pub rules_evaluated: u32,
    pub violations_total: u32,
    pub skipped_rule_kinds: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableReport {
    pub verdict: RenderableVerdict,
    pub violations: Vec<RenderableViolation>,
    pub data: RenderableData,
}
