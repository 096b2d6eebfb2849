use serde_json::Value;

/// Project configuration keys that carry a built-in default value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DefaultConfig {
    /// Short technical name of the application.
    BaseName,
    /// Human-readable project name.
    ProjectName,
    /// Indentation width used by generated formatter settings.
    PrettierDefaultIndent,
}

impl DefaultConfig {
    /// All keys with a default value.
    pub const ALL: [DefaultConfig; 3] =
        [DefaultConfig::BaseName, DefaultConfig::ProjectName, DefaultConfig::PrettierDefaultIndent];

    /// Config key as used in templates and `clientgen.toml`.
    pub fn key(&self) -> &'static str {
        match self {
            DefaultConfig::BaseName => "baseName",
            DefaultConfig::ProjectName => "projectName",
            DefaultConfig::PrettierDefaultIndent => "prettierDefaultIndent",
        }
    }

    /// Default value for this key.
    pub fn default_value(&self) -> Value {
        match self {
            DefaultConfig::BaseName => Value::from("jhipster"),
            DefaultConfig::ProjectName => Value::from("JHipster Project"),
            DefaultConfig::PrettierDefaultIndent => Value::from(2),
        }
    }
}
