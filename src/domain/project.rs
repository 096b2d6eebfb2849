//! Project value object accumulating configuration for one generation run.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde_json::Value;

use super::validation::{validate_base_name, validate_project_name};
use super::{AppError, DefaultConfig};

/// The codebase being generated.
///
/// Holds the destination folder and the configuration values exposed to
/// template rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    folder: PathBuf,
    config: BTreeMap<String, Value>,
}

impl Project {
    /// Create a project rooted at `folder` with an empty configuration.
    pub fn new(folder: impl Into<PathBuf>) -> Result<Self, AppError> {
        let folder = folder.into();
        if folder.as_os_str().is_empty() {
            return Err(AppError::InvalidProject("folder must not be empty".to_string()));
        }
        Ok(Self { folder, config: BTreeMap::new() })
    }

    /// Builder-style helper to seed a configuration value.
    pub fn with_config(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.config.insert(key.into(), value.into());
        self
    }

    pub fn folder(&self) -> &Path {
        &self.folder
    }

    pub fn config(&self) -> &BTreeMap<String, Value> {
        &self.config
    }

    pub fn config_value(&self, key: &str) -> Option<&Value> {
        self.config.get(key)
    }

    /// Set a configuration value, replacing any previous one.
    pub fn set_config(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.config.insert(key.into(), value.into());
    }

    /// Record the default value for `config` unless a value is already present.
    pub fn add_default_config(&mut self, config: DefaultConfig) {
        self.config.entry(config.key().to_string()).or_insert_with(|| config.default_value());
    }

    /// Base name, falling back to the built-in default.
    pub fn base_name(&self) -> String {
        self.string_or_default(DefaultConfig::BaseName)
    }

    pub fn project_name(&self) -> String {
        self.string_or_default(DefaultConfig::ProjectName)
    }

    /// Check that the names written into generated JSON and TypeScript are safe to embed.
    pub fn validate(&self) -> Result<(), AppError> {
        self.validate_name(
            DefaultConfig::BaseName,
            validate_base_name,
            "a letter followed by letters, digits, '-' or '_'",
        )?;
        self.validate_name(
            DefaultConfig::ProjectName,
            validate_project_name,
            "text without quotes, backslashes or control characters",
        )
    }

    fn validate_name(
        &self,
        config: DefaultConfig,
        is_valid: fn(&str) -> bool,
        expected: &str,
    ) -> Result<(), AppError> {
        match self.config.get(config.key()) {
            None => Ok(()),
            Some(Value::String(name)) if is_valid(name) => Ok(()),
            Some(other) => Err(AppError::InvalidProject(format!(
                "{} {} must be {}",
                config.key(),
                other,
                expected
            ))),
        }
    }

    fn string_or_default(&self, config: DefaultConfig) -> String {
        let value =
            self.config.get(config.key()).cloned().unwrap_or_else(|| config.default_value());
        match value {
            Value::String(s) => s,
            other => other.to_string(),
        }
    }
}
