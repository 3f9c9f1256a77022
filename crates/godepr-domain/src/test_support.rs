use crate::model::{Package, Rule};
use godepr_types::ids;

pub fn package(import_path: &str, dir: &str, imports: &[&str]) -> Package {
    Package {
        import_path: import_path.to_string(),
        dir: dir.to_string(),
        imports: imports.iter().map(|s| s.to_string()).collect(),
        deps: Vec::new(),
    }
}

pub fn denied_list(directory: &str, body: &[&str]) -> Rule {
    Rule::new(directory, ids::RULE_KIND_DENIED_LIST, body.iter().copied())
}

pub fn import_paths(violations: &[godepr_types::Violation]) -> Vec<&str> {
    violations.iter().map(|v| v.import_path.as_str()).collect()
}
