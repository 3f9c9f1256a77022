use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const SCHEMA_CONFIG_V1: &str = "godepr.config.v1";

/// `.godepr` schema v1.
///
/// This is a *user-facing* config model: it is intentionally permissive so forward-compat is easy.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct GodeprConfigV1 {
    /// Optional schema string for tooling (`godepr.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    #[serde(default)]
    pub rules: Vec<RuleConfig>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RuleConfig {
    /// Directory fragment the rule applies to, e.g. `internal/domain/`.
    pub directory: String,

    /// Rule kind. Kinds this version does not know are ignored.
    pub ruletype: String,

    /// Kind-specific body. For `denied-list`: import paths or `prefix*` patterns.
    #[serde(default)]
    pub rulebody: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ConfigFormat {
    #[default]
    Json,
    Toml,
}

impl ConfigFormat {
    /// `*.toml` is TOML; anything else (including `.godepr`) is JSON.
    pub fn from_path(path: &str) -> Self {
        if path.to_ascii_lowercase().ends_with(".toml") {
            ConfigFormat::Toml
        } else {
            ConfigFormat::Json
        }
    }
}
