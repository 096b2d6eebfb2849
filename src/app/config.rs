//! Project configuration loading from `clientgen.toml`.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::domain::{AppError, DefaultConfig, Project};

/// Config file read from the project folder.
pub const CONFIG_FILE: &str = "clientgen.toml";

/// Parsed `clientgen.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    /// Values exposed to templates, keyed as in the templates (`baseName`, ...).
    #[serde(default)]
    pub project: BTreeMap<String, toml::Value>,
}

/// Values given on the command line, applied over the config file.
#[derive(Debug, Clone, Default)]
pub struct ProjectOverrides {
    pub base_name: Option<String>,
    pub project_name: Option<String>,
}

pub fn parse_config_content(content: &str) -> Result<ConfigFile, AppError> {
    Ok(toml::from_str(content)?)
}

/// Build the project for `folder`: config file values, then overrides.
///
/// Names that cannot be embedded in generated JSON and TypeScript are rejected.
pub fn load_project(folder: &Path, overrides: &ProjectOverrides) -> Result<Project, AppError> {
    let mut project = Project::new(folder)?;

    let config_path = folder.join(CONFIG_FILE);
    if config_path.exists() {
        debug!(path = %config_path.display(), "loading project config");
        let config = parse_config_content(&fs::read_to_string(&config_path)?)?;
        for (key, value) in config.project {
            let value = serde_json::to_value(&value).map_err(|e| {
                AppError::config_error(format!(
                    "Invalid value for '{}' in {}: {}",
                    key, CONFIG_FILE, e
                ))
            })?;
            project.set_config(key, value);
        }
    }

    if let Some(base_name) = &overrides.base_name {
        project.set_config(DefaultConfig::BaseName.key(), base_name.as_str());
    }
    if let Some(project_name) = &overrides.project_name {
        project.set_config(DefaultConfig::ProjectName.key(), project_name.as_str());
    }

    project.validate()?;
    Ok(project)
}
