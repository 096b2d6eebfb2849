use crate::ports::{PackageManager, ProjectRepository};

/// Application context holding the collaborators of command execution.
pub struct AppContext<R: ProjectRepository, P: PackageManager> {
    repository: R,
    packages: P,
}

impl<R: ProjectRepository, P: PackageManager> AppContext<R, P> {
    /// Create a new application context.
    pub fn new(repository: R, packages: P) -> Self {
        Self { repository, packages }
    }

    /// Get a reference to the project repository.
    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Get a reference to the package manager.
    pub fn packages(&self) -> &P {
        &self.packages
    }
}
