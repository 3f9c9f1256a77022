//! Rule file parsing and resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod resolve;

pub use model::{ConfigFormat, GodeprConfigV1, RuleConfig, SCHEMA_CONFIG_V1};
pub use resolve::ResolvedRules;

/// Parse a `.godepr` JSON rule file into a typed model.
pub fn parse_config_json(input: &str) -> anyhow::Result<GodeprConfigV1> {
    let cfg: GodeprConfigV1 = serde_json::from_str(input)?;
    Ok(cfg)
}

/// Parse a TOML rule file (`[[rules]]` tables) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<GodeprConfigV1> {
    let cfg: GodeprConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Parse a rule file in the given format. Blank input is an empty config.
pub fn parse_config(input: &str, format: ConfigFormat) -> anyhow::Result<GodeprConfigV1> {
    if input.trim().is_empty() {
        return Ok(GodeprConfigV1::default());
    }
    match format {
        ConfigFormat::Json => parse_config_json(input),
        ConfigFormat::Toml => parse_config_toml(input),
    }
}

/// Resolve the rules handed to the engine.
pub fn resolve_rules(cfg: GodeprConfigV1) -> anyhow::Result<ResolvedRules> {
    resolve::resolve_rules(cfg)
}
