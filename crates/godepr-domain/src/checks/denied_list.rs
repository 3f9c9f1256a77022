use crate::checks::RuleCheck;
use crate::fingerprint::fingerprint_for_violation;
use crate::model::{Package, Rule};
use crate::pattern;
use crate::scope::ScopeMatcher;
use godepr_types::{Violation, ids};

/// `denied-list`: in-scope packages must not import anything matched by the rule body.
#[derive(Clone, Copy, Debug, Default)]
pub struct DeniedList;

impl RuleCheck for DeniedList {
    fn kind(&self) -> &'static str {
        ids::RULE_KIND_DENIED_LIST
    }

    fn run(&self, packages: &[Package], rule: &Rule, out: &mut Vec<Violation>) {
        let scope = ScopeMatcher::new(&rule.directory);

        for package in packages {
            if !scope.contains(&package.dir) {
                continue;
            }

            for import in &package.imports {
                // One violation per import; the first matching pattern is the cause.
                let Some(pattern) = pattern::first_match(import, &rule.body) else {
                    continue;
                };

                out.push(Violation {
                    package_path: package.import_path.clone(),
                    import_path: import.clone(),
                    rule_kind: rule.kind.clone(),
                    code: ids::CODE_DENIED_IMPORT.to_string(),
                    message: Violation::denied_import_message(&package.import_path, import),
                    directory: rule.directory.clone(),
                    pattern: pattern.to_string(),
                    fingerprint: Some(fingerprint_for_violation(
                        &rule.kind,
                        &rule.directory,
                        &package.import_path,
                        import,
                    )),
                });
            }
        }
    }
}
