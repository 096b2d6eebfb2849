//! Dependency catalog - pinned npm versions loaded from embedded manifests.

use std::collections::BTreeMap;

use include_dir::{Dir, include_dir};
use serde::Deserialize;

use crate::domain::AppError;

/// Embedded catalog directory. Each scope is a folder holding a `package.json`.
static DEPENDENCIES_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/src/assets/dependencies");

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CatalogManifest {
    #[serde(default)]
    dependencies: BTreeMap<String, String>,
    #[serde(default)]
    dev_dependencies: BTreeMap<String, String>,
}

/// Versions of one catalog scope, runtime and development entries merged.
pub type ScopeVersions = BTreeMap<String, String>;

/// Pinned dependency versions keyed by scope (for example `vite/vue`).
#[derive(Debug, Clone)]
pub struct EmbeddedDependencyCatalog {
    scopes: BTreeMap<String, ScopeVersions>,
}

impl EmbeddedDependencyCatalog {
    /// Load every embedded scope.
    pub fn new() -> Result<Self, AppError> {
        let mut scopes = BTreeMap::new();
        collect_scopes(&DEPENDENCIES_DIR, &mut scopes)?;
        Ok(Self { scopes })
    }

    /// Version of `name` in `scope`.
    pub fn version(&self, scope: &str, name: &str) -> Option<&str> {
        self.scopes.get(scope).and_then(|versions| versions.get(name)).map(String::as_str)
    }

    pub fn scope(&self, scope: &str) -> Option<&ScopeVersions> {
        self.scopes.get(scope)
    }

    pub fn scope_names(&self) -> Vec<&str> {
        self.scopes.keys().map(String::as_str).collect()
    }
}

fn collect_scopes(
    dir: &'static Dir,
    scopes: &mut BTreeMap<String, ScopeVersions>,
) -> Result<(), AppError> {
    if let Some(file) = dir.get_file(dir.path().join("package.json")) {
        let scope = dir.path().to_string_lossy().replace('\\', "/");
        let content = file.contents_utf8().ok_or_else(|| {
            AppError::config_error(format!("Catalog manifest for '{}' is not valid UTF-8", scope))
        })?;
        let manifest: CatalogManifest = serde_json::from_str(content).map_err(|e| {
            AppError::config_error(format!("Invalid catalog manifest for '{}': {}", scope, e))
        })?;

        let mut versions = manifest.dependencies;
        versions.extend(manifest.dev_dependencies);
        scopes.insert(scope, versions);
    }

    for subdir in dir.dirs() {
        collect_scopes(subdir, scopes)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_vite_vue_scope() {
        let catalog = EmbeddedDependencyCatalog::new().unwrap();
        assert!(catalog.scope_names().contains(&"vite/vue"));
    }

    #[test]
    fn resolves_runtime_and_dev_versions() {
        let catalog = EmbeddedDependencyCatalog::new().unwrap();
        assert!(catalog.version("vite/vue", "vue").is_some());
        assert!(catalog.version("vite/vue", "vite").is_some());
    }

    #[test]
    fn unknown_entries_are_absent() {
        let catalog = EmbeddedDependencyCatalog::new().unwrap();
        assert_eq!(catalog.version("vite/vue", "left-pad"), None);
        assert_eq!(catalog.version("webpack/react", "vue"), None);
    }

    #[test]
    fn every_stack_dependency_is_pinned() {
        use crate::domain::vite_vue;

        let catalog = EmbeddedDependencyCatalog::new().unwrap();
        for name in vite_vue::DEPENDENCIES.iter().chain(vite_vue::DEV_DEPENDENCIES) {
            let version = catalog.version(vite_vue::CATALOG_SCOPE, name);
            assert!(version.is_some(), "{} not pinned", name);
        }
    }
}
