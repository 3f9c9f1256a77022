use crate::model::{GodeprConfigV1, SCHEMA_CONFIG_V1};
use godepr_domain::checks;
use godepr_domain::model::Rule;

#[derive(Clone, Debug, Default)]
pub struct ResolvedRules {
    /// Rules in file order, unsupported kinds included.
    pub rules: Vec<Rule>,
}

impl ResolvedRules {
    /// Kinds in `rules` this build will skip, deduplicated in file order.
    pub fn unsupported_kinds(&self) -> Vec<&str> {
        let mut kinds: Vec<&str> = Vec::new();
        for rule in &self.rules {
            if !checks::is_supported(&rule.kind) && !kinds.contains(&rule.kind.as_str()) {
                kinds.push(&rule.kind);
            }
        }
        kinds
    }
}

pub fn resolve_rules(cfg: GodeprConfigV1) -> anyhow::Result<ResolvedRules> {
    if let Some(schema) = cfg.schema.as_deref() {
        validate_schema(schema)?;
    }

    let rules = cfg
        .rules
        .into_iter()
        .map(|r| Rule {
            directory: r.directory,
            kind: r.ruletype,
            body: r.rulebody,
        })
        .collect();

    Ok(ResolvedRules { rules })
}

fn validate_schema(schema: &str) -> anyhow::Result<()> {
    // Later revisions are read with the v1 shape.
    if !schema.starts_with("godepr.config.") {
        anyhow::bail!("unknown config schema: {schema} (expected {SCHEMA_CONFIG_V1})");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ConfigFormat, parse_config, parse_config_json, parse_config_toml};

    #[test]
    fn parses_original_json_shape() {
        let cfg = parse_config_json(
            r#"{
                "rules": [
                    {"directory": "example/", "ruletype": "denied-list", "rulebody": ["github.com/blocked/*"]}
                ]
            }"#,
        )
        .unwrap();

        let resolved = resolve_rules(cfg).unwrap();
        assert_eq!(
            resolved.rules,
            vec![Rule::new("example/", "denied-list", ["github.com/blocked/*"])]
        );
        assert!(resolved.unsupported_kinds().is_empty());
    }

    #[test]
    fn parses_toml_shape() {
        let cfg = parse_config_toml(
            r#"
schema = "godepr.config.v1"

[[rules]]
directory = "internal/domain/"
ruletype = "denied-list"
rulebody = ["internal/infrastructure/*", "database/sql"]
"#,
        )
        .unwrap();

        let resolved = resolve_rules(cfg).unwrap();
        assert_eq!(resolved.rules.len(), 1);
        assert_eq!(resolved.rules[0].body.len(), 2);
    }

    #[test]
    fn blank_input_is_empty_config() {
        let cfg = parse_config("  \n", ConfigFormat::Json).unwrap();
        assert_eq!(cfg, GodeprConfigV1::default());
        assert!(resolve_rules(cfg).unwrap().rules.is_empty());
    }

    #[test]
    fn unknown_kinds_parse_and_are_reported() {
        let cfg = parse_config_json(
            r#"{"rules": [
                {"directory": "a/", "ruletype": "allowed-list", "rulebody": ["fmt"]},
                {"directory": "b/", "ruletype": "denied-list", "rulebody": []},
                {"directory": "c/", "ruletype": "allowed-list"},
                {"directory": "d/", "ruletype": "std-dep-only"}
            ]}"#,
        )
        .unwrap();

        let resolved = resolve_rules(cfg).unwrap();
        assert_eq!(resolved.rules.len(), 4);
        assert_eq!(
            resolved.unsupported_kinds(),
            vec!["allowed-list", "std-dep-only"]
        );
    }

    #[test]
    fn missing_required_field_is_an_error() {
        assert!(parse_config_json(r#"{"rules": [{"directory": "a/"}]}"#).is_err());
    }

    #[test]
    fn foreign_schema_is_rejected() {
        let cfg = GodeprConfigV1 {
            schema: Some("lintkit.config.v1".to_string()),
            rules: Vec::new(),
        };
        let err = resolve_rules(cfg).unwrap_err();
        assert!(err.to_string().contains("unknown config schema"));
    }

    #[test]
    fn newer_schema_revision_is_accepted() {
        let cfg = GodeprConfigV1 {
            schema: Some("godepr.config.v2".to_string()),
            rules: Vec::new(),
        };
        assert!(resolve_rules(cfg).is_ok());
    }

    #[test]
    fn format_follows_extension() {
        assert_eq!(ConfigFormat::from_path(".godepr"), ConfigFormat::Json);
        assert_eq!(ConfigFormat::from_path("rules/godepr.TOML"), ConfigFormat::Toml);
        assert_eq!(ConfigFormat::from_path("godepr.json"), ConfigFormat::Json);
    }
}
