use godepr_types::{GodeprData, Verdict, Violation};

#[derive(Clone, Debug)]
pub struct DomainReport {
    pub verdict: Verdict,
    pub violations: Vec<Violation>,
    pub data: GodeprData,
}

impl DomainReport {
    pub fn has_violations(&self) -> bool {
        !self.violations.is_empty()
    }
}
