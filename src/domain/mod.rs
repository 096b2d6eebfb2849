mod default_config;
pub mod error;
mod project;
mod project_file;
pub mod validation;
pub mod vite_vue;

pub use default_config::DefaultConfig;
pub use error::AppError;
pub use project::Project;
pub use project_file::ProjectFile;
