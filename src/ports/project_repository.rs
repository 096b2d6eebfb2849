//! Project-level file operations.
//!
//! All destination paths are relative to the project folder. Implementations
//! must reject paths that escape it.

use crate::domain::{AppError, Project, ProjectFile};

/// Port for materializing template files into a project.
pub trait ProjectRepository {
    /// Copy a template store file verbatim.
    fn add(&self, project: &Project, file: &ProjectFile) -> Result<(), AppError>;

    /// Render a template store file with the project configuration.
    fn template(&self, project: &Project, file: &ProjectFile) -> Result<(), AppError>;

    /// Replace every literal occurrence of `anchor` in an existing project file.
    ///
    /// A file without the anchor is left untouched.
    fn replace_text(
        &self,
        project: &Project,
        directory: &str,
        file_name: &str,
        anchor: &str,
        replacement: &str,
    ) -> Result<(), AppError>;
}
