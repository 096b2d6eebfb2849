use tracing::info;

use crate::app::AppContext;
use crate::domain::vite_vue::PACKAGE_JSON;
use crate::domain::{AppError, DefaultConfig, Project, ProjectFile};
use crate::ports::{PackageManager, ProjectRepository};

const SOURCE: &str = "init";

/// Execute the init command.
///
/// Writes the base `package.json`, `README.md` and `.gitignore` into an empty
/// project folder.
pub fn execute<R, P>(ctx: &AppContext<R, P>, project: &mut Project) -> Result<(), AppError>
where
    R: ProjectRepository,
    P: PackageManager,
{
    project.validate()?;

    let manifest = project.folder().join(PACKAGE_JSON);
    if manifest.exists() {
        return Err(AppError::ProjectAlreadyInitialized(manifest));
    }

    project.add_default_config(DefaultConfig::BaseName);
    project.add_default_config(DefaultConfig::ProjectName);
    project.add_default_config(DefaultConfig::PrettierDefaultIndent);

    info!(folder = %project.folder().display(), "initializing project");
    let repository = ctx.repository();
    repository.template(project, &ProjectFile::new(SOURCE, PACKAGE_JSON))?;
    repository.template(project, &ProjectFile::new(SOURCE, "README.md"))?;
    repository.add(project, &ProjectFile::new(SOURCE, "gitignore").renamed(".gitignore"))
}
