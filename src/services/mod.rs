mod embedded_dependency_catalog;
mod embedded_template_store;
mod filesystem_project_repository;
mod npm_package_manager;
pub mod template_engine;

pub use embedded_dependency_catalog::{EmbeddedDependencyCatalog, ScopeVersions};
pub use embedded_template_store::EmbeddedTemplateStore;
pub use filesystem_project_repository::FilesystemProjectRepository;
pub use npm_package_manager::NpmPackageManager;
