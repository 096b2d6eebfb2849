use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for clientgen operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Runtime dependency missing from the version catalog.
    #[error("Dependency not found: {0}")]
    DependencyNotFound(String),

    /// Development dependency missing from the version catalog.
    #[error("DevDependency not found: {0}")]
    DevDependencyNotFound(String),

    /// Template source file missing from the template store.
    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    /// Template failed to render.
    #[error("Failed to render template '{template}': {details}")]
    TemplateRender { template: String, details: String },

    /// Destination path escapes the project folder.
    #[error("Invalid path '{0}': must be relative to the project folder")]
    InvalidPath(String),

    /// Project definition is unusable.
    #[error("Invalid project: {0}")]
    InvalidProject(String),

    /// Package manifest missing from the project folder.
    #[error("package.json not found at {}", .0.display())]
    ManifestNotFound(PathBuf),

    /// Package manifest is not valid JSON.
    #[error("Failed to parse {}: {details}", .path.display())]
    ManifestParse { path: PathBuf, details: String },

    /// Project folder already holds a package manifest.
    #[error("Project already initialized: {} exists", .0.display())]
    ProjectAlreadyInitialized(PathBuf),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Provide an `io::ErrorKind`-like view for callers mapping errors to exit states.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::TemplateRender { .. }
            | AppError::InvalidPath(_)
            | AppError::InvalidProject(_)
            | AppError::ManifestParse { .. }
            | AppError::TomlParseError(_) => io::ErrorKind::InvalidInput,
            AppError::DependencyNotFound(_)
            | AppError::DevDependencyNotFound(_)
            | AppError::TemplateNotFound(_)
            | AppError::ManifestNotFound(_) => io::ErrorKind::NotFound,
            AppError::ProjectAlreadyInitialized(_) => io::ErrorKind::AlreadyExists,
        }
    }
}
