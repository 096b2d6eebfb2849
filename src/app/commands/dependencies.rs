use crate::domain::AppError;
use crate::services::EmbeddedDependencyCatalog;

/// One pinned catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub name: String,
    pub version: String,
}

/// List the pinned versions of a catalog scope, sorted by package name.
pub fn list(
    catalog: &EmbeddedDependencyCatalog,
    scope: &str,
) -> Result<Vec<CatalogEntry>, AppError> {
    let versions = catalog.scope(scope).ok_or_else(|| {
        AppError::config_error(format!(
            "Unknown catalog scope '{}'. Available: {}",
            scope,
            catalog.scope_names().join(", ")
        ))
    })?;

    Ok(versions
        .iter()
        .map(|(name, version)| CatalogEntry { name: name.clone(), version: version.clone() })
        .collect())
}
