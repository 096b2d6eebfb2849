use crate::domain::{AppError, Project};

/// Port for the dependency catalog and the project package manifest.
pub trait PackageManager {
    /// Pinned version of `name` within the catalog `scope`, if known.
    fn get_version(&self, scope: &str, name: &str) -> Option<String>;

    fn add_dependency(&self, project: &Project, name: &str, version: &str) -> Result<(), AppError>;

    fn add_dev_dependency(&self, project: &Project, name: &str, version: &str)
    -> Result<(), AppError>;

    fn add_script(&self, project: &Project, name: &str, command: &str) -> Result<(), AppError>;
}
