//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::{Path, PathBuf};

use crate::app::config::{ProjectOverrides, load_project};
use crate::app::{
    AppContext,
    commands::{dependencies, init, vite_vue},
};
use crate::domain::Project;
use crate::services::{
    EmbeddedDependencyCatalog, EmbeddedTemplateStore, FilesystemProjectRepository,
    NpmPackageManager,
};

pub use crate::app::commands::dependencies::CatalogEntry;
pub use crate::domain::AppError;

type FilesystemContext =
    AppContext<FilesystemProjectRepository<EmbeddedTemplateStore>, NpmPackageManager>;

/// Create an `AppContext` backed by the filesystem and the embedded assets.
fn create_context() -> Result<FilesystemContext, AppError> {
    let repository = FilesystemProjectRepository::new(EmbeddedTemplateStore::new());
    let packages = NpmPackageManager::embedded()?;
    Ok(AppContext::new(repository, packages))
}

/// Resolve the project folder: explicit path or the current directory.
fn project_root(path: Option<&Path>) -> Result<PathBuf, AppError> {
    match path {
        Some(path) => Ok(path.to_path_buf()),
        None => Ok(std::env::current_dir()?),
    }
}

/// Initialize a project at the specified path.
pub fn init_at(
    path: impl Into<PathBuf>,
    overrides: &ProjectOverrides,
) -> Result<Project, AppError> {
    let path = path.into();
    let ctx = create_context()?;
    let mut project = load_project(&path, overrides)?;
    init::execute(&ctx, &mut project)?;
    Ok(project)
}

/// Initialize a project in the given folder, defaulting to the current directory.
pub fn init(path: Option<&Path>, overrides: &ProjectOverrides) -> Result<Project, AppError> {
    init_at(project_root(path)?, overrides)
}

// =============================================================================
// Vite + Vue API
// =============================================================================

/// Add the plain Vite + Vue client to the project at the specified path.
pub fn vite_vue_at(
    path: impl Into<PathBuf>,
    overrides: &ProjectOverrides,
) -> Result<Project, AppError> {
    let path = path.into();
    let ctx = create_context()?;
    let mut project = load_project(&path, overrides)?;
    vite_vue::add_vite_vue(&ctx, &mut project)?;
    Ok(project)
}

/// Add the styled Vite + Vue client to the project at the specified path.
pub fn styled_vite_vue_at(
    path: impl Into<PathBuf>,
    overrides: &ProjectOverrides,
) -> Result<Project, AppError> {
    let path = path.into();
    let ctx = create_context()?;
    let mut project = load_project(&path, overrides)?;
    vite_vue::add_styled_vite_vue(&ctx, &mut project)?;
    Ok(project)
}

/// Add the Vite + Vue client, plain or styled, in the given folder.
pub fn vite_vue(
    path: Option<&Path>,
    styled: bool,
    overrides: &ProjectOverrides,
) -> Result<Project, AppError> {
    let root = project_root(path)?;
    if styled { styled_vite_vue_at(root, overrides) } else { vite_vue_at(root, overrides) }
}

// =============================================================================
// Catalog API
// =============================================================================

/// List the pinned versions of a catalog scope.
pub fn dependencies(scope: &str) -> Result<Vec<CatalogEntry>, AppError> {
    let catalog = EmbeddedDependencyCatalog::new()?;
    dependencies::list(&catalog, scope)
}
