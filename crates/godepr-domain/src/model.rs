use serde::{Deserialize, Deserializer};

/// One compilation unit from a `go list -json` stream.
///
/// Fields absent from the record (go list omits empty lists) or set to `null`
/// take their default. Fields godepr does not know are ignored.
///
/// Besides the go list spelling (`ImportPath`), the all-lowercase and
/// camelCase spellings are accepted. Other casings are unknown fields.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Package {
    #[serde(
        rename = "ImportPath",
        alias = "importpath",
        alias = "importPath",
        alias = "IMPORTPATH",
        default,
        deserialize_with = "null_as_default"
    )]
    pub import_path: String,

    #[serde(
        rename = "Dir",
        alias = "dir",
        alias = "DIR",
        default,
        deserialize_with = "null_as_default"
    )]
    pub dir: String,

    #[serde(
        rename = "Imports",
        alias = "imports",
        alias = "IMPORTS",
        default,
        deserialize_with = "null_as_default"
    )]
    pub imports: Vec<String>,

    /// Transitive dependency closure. Parsed for completeness, never evaluated.
    #[serde(
        rename = "Deps",
        alias = "deps",
        alias = "DEPS",
        default,
        deserialize_with = "null_as_default"
    )]
    pub deps: Vec<String>,
}

/// A single dependency-direction constraint as written in `.godepr`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Rule {
    /// Path fragment selecting the packages the rule applies to.
    #[serde(default)]
    pub directory: String,

    /// Rule kind tag, e.g. `denied-list`. Kept raw so unknown kinds survive parsing.
    #[serde(rename = "ruletype", default)]
    pub kind: String,

    /// Kind-specific patterns. For `denied-list`: import paths or `prefix*`.
    #[serde(rename = "rulebody", default)]
    pub body: Vec<String>,
}

impl Rule {
    pub fn new<D, K, I, S>(directory: D, kind: K, body: I) -> Self
    where
        D: Into<String>,
        K: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            directory: directory.into(),
            kind: kind.into(),
            body: body.into_iter().map(Into::into).collect(),
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
