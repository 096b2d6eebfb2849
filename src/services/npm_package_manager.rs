use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tracing::debug;

use super::EmbeddedDependencyCatalog;
use crate::domain::vite_vue::PACKAGE_JSON;
use crate::domain::{AppError, Project};
use crate::ports::PackageManager;

const DEPENDENCIES: &str = "dependencies";
const DEV_DEPENDENCIES: &str = "devDependencies";
const SCRIPTS: &str = "scripts";

/// npm package manager editing the project's `package.json`.
#[derive(Debug, Clone)]
pub struct NpmPackageManager {
    catalog: EmbeddedDependencyCatalog,
}

impl NpmPackageManager {
    pub fn new(catalog: EmbeddedDependencyCatalog) -> Self {
        Self { catalog }
    }

    /// Load the embedded catalog and build a package manager over it.
    pub fn embedded() -> Result<Self, AppError> {
        Ok(Self::new(EmbeddedDependencyCatalog::new()?))
    }

    fn manifest_path(project: &Project) -> PathBuf {
        project.folder().join(PACKAGE_JSON)
    }

    fn set_entry(
        &self,
        project: &Project,
        section: &str,
        name: &str,
        value: &str,
    ) -> Result<(), AppError> {
        let path = Self::manifest_path(project);
        let mut manifest = read_manifest(&path)?;

        let root = manifest.as_object_mut().ok_or_else(|| AppError::ManifestParse {
            path: path.clone(),
            details: "expected a JSON object at the root".to_string(),
        })?;
        let entries = root
            .entry(section.to_string())
            .or_insert_with(|| Value::Object(Map::new()))
            .as_object_mut()
            .ok_or_else(|| AppError::ManifestParse {
                path: path.clone(),
                details: format!("'{}' is not a JSON object", section),
            })?;
        entries.insert(name.to_string(), Value::from(value));

        write_manifest(&path, &manifest)?;
        debug!(section, name, value, "updated package.json");
        Ok(())
    }
}

fn read_manifest(path: &Path) -> Result<Value, AppError> {
    if !path.exists() {
        return Err(AppError::ManifestNotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content)
        .map_err(|e| AppError::ManifestParse { path: path.to_path_buf(), details: e.to_string() })
}

fn write_manifest(path: &Path, manifest: &Value) -> Result<(), AppError> {
    let mut content = serde_json::to_string_pretty(manifest)
        .map_err(|e| AppError::ManifestParse { path: path.to_path_buf(), details: e.to_string() })?;
    content.push('\n');
    fs::write(path, content)?;
    Ok(())
}

impl PackageManager for NpmPackageManager {
    fn get_version(&self, scope: &str, name: &str) -> Option<String> {
        self.catalog.version(scope, name).map(str::to_string)
    }

    fn add_dependency(&self, project: &Project, name: &str, version: &str) -> Result<(), AppError> {
        self.set_entry(project, DEPENDENCIES, name, version)
    }

    fn add_dev_dependency(
        &self,
        project: &Project,
        name: &str,
        version: &str,
    ) -> Result<(), AppError> {
        self.set_entry(project, DEV_DEPENDENCIES, name, version)
    }

    fn add_script(&self, project: &Project, name: &str, command: &str) -> Result<(), AppError> {
        self.set_entry(project, SCRIPTS, name, command)
    }
}
