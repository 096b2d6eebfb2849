//! Vite + Vue client scaffolding.
//!
//! Both entry points share the same ordered core (dependencies, scripts,
//! test reporter, config files, root files, app files) and differ only in the
//! final markup step.

use tracing::info;

use crate::app::AppContext;
use crate::domain::vite_vue::{
    CATALOG_SCOPE, CONFIG_FILES, DEPENDENCIES, DESTINATION_APP, DESTINATION_IMAGES,
    DESTINATION_PRIMARY, DESTINATION_TEST_PRIMARY, DESTINATION_WEBAPP, DEV_DEPENDENCIES, IMAGES,
    JEST_SONAR_ANCHOR, JEST_SONAR_BLOCK, PACKAGE_JSON, SCRIPTS, SOURCE, SOURCE_APP, SOURCE_IMAGES,
    SOURCE_PRIMARY, SOURCE_TEST_PRIMARY, SOURCE_WEBAPP,
};
use crate::domain::{AppError, DefaultConfig, Project, ProjectFile};
use crate::ports::{PackageManager, ProjectRepository};

/// Install the plain (unstyled) Vite + Vue client.
pub fn add_vite_vue<R, P>(ctx: &AppContext<R, P>, project: &mut Project) -> Result<(), AppError>
where
    R: ProjectRepository,
    P: PackageManager,
{
    add_common(ctx, project)?;
    add_app_files_without_css(ctx, project)
}

/// Install the styled Vite + Vue client with its image assets.
pub fn add_styled_vite_vue<R, P>(
    ctx: &AppContext<R, P>,
    project: &mut Project,
) -> Result<(), AppError>
where
    R: ProjectRepository,
    P: PackageManager,
{
    add_common(ctx, project)?;
    add_app_files_with_css(ctx, project)
}

fn add_common<R, P>(ctx: &AppContext<R, P>, project: &mut Project) -> Result<(), AppError>
where
    R: ProjectRepository,
    P: PackageManager,
{
    project.validate()?;

    add_dependencies(ctx, project)?;
    add_dev_dependencies(ctx, project)?;
    add_scripts(ctx, project)?;
    add_jest_sonar(ctx, project)?;
    add_vite_config_files(ctx, project)?;
    add_root_files(ctx, project)?;
    add_app_files(ctx, project)
}

pub fn add_dependencies<R, P>(ctx: &AppContext<R, P>, project: &Project) -> Result<(), AppError>
where
    R: ProjectRepository,
    P: PackageManager,
{
    info!(count = DEPENDENCIES.len(), "adding dependencies");
    for name in DEPENDENCIES {
        let version = ctx
            .packages()
            .get_version(CATALOG_SCOPE, name)
            .ok_or_else(|| AppError::DependencyNotFound(name.to_string()))?;
        ctx.packages().add_dependency(project, name, &version)?;
    }
    Ok(())
}

pub fn add_dev_dependencies<R, P>(ctx: &AppContext<R, P>, project: &Project) -> Result<(), AppError>
where
    R: ProjectRepository,
    P: PackageManager,
{
    info!(count = DEV_DEPENDENCIES.len(), "adding dev dependencies");
    for name in DEV_DEPENDENCIES {
        let version = ctx
            .packages()
            .get_version(CATALOG_SCOPE, name)
            .ok_or_else(|| AppError::DevDependencyNotFound(name.to_string()))?;
        ctx.packages().add_dev_dependency(project, name, &version)?;
    }
    Ok(())
}

pub fn add_scripts<R, P>(ctx: &AppContext<R, P>, project: &Project) -> Result<(), AppError>
where
    R: ProjectRepository,
    P: PackageManager,
{
    info!(count = SCRIPTS.len(), "adding scripts");
    for (name, command) in SCRIPTS {
        ctx.packages().add_script(project, name, command)?;
    }
    Ok(())
}

/// Insert the jest-sonar reporter settings before the `cacheDirectories` line.
///
/// Plain text insertion against the generated `package.json`.
pub fn add_jest_sonar<R, P>(ctx: &AppContext<R, P>, project: &Project) -> Result<(), AppError>
where
    R: ProjectRepository,
    P: PackageManager,
{
    info!("adding jest-sonar reporter settings");
    ctx.repository().replace_text(project, "", PACKAGE_JSON, JEST_SONAR_ANCHOR, JEST_SONAR_BLOCK)
}

pub fn add_vite_config_files<R, P>(
    ctx: &AppContext<R, P>,
    project: &Project,
) -> Result<(), AppError>
where
    R: ProjectRepository,
    P: PackageManager,
{
    info!("adding vite config files");
    for file in CONFIG_FILES {
        ctx.repository().add(project, &ProjectFile::new(SOURCE, *file))?;
    }
    Ok(())
}

pub fn add_root_files<R, P>(ctx: &AppContext<R, P>, project: &Project) -> Result<(), AppError>
where
    R: ProjectRepository,
    P: PackageManager,
{
    info!("adding root files");
    let repository = ctx.repository();
    repository
        .template(project, &ProjectFile::new(SOURCE_WEBAPP, "index.html").to(DESTINATION_WEBAPP))?;
    repository.template(project, &ProjectFile::new(SOURCE_APP, "env.d.ts").to(DESTINATION_APP))?;
    repository.template(project, &ProjectFile::new(SOURCE_APP, "main.ts").to(DESTINATION_APP))
}

pub fn add_app_files<R, P>(ctx: &AppContext<R, P>, project: &mut Project) -> Result<(), AppError>
where
    R: ProjectRepository,
    P: PackageManager,
{
    info!("adding app files");
    project.add_default_config(DefaultConfig::BaseName);

    let repository = ctx.repository();
    repository.template(
        project,
        &ProjectFile::new(SOURCE_PRIMARY, "App.component.ts").to(DESTINATION_PRIMARY),
    )?;
    repository
        .template(project, &ProjectFile::new(SOURCE_PRIMARY, "index.ts").to(DESTINATION_PRIMARY))?;
    repository.template(
        project,
        &ProjectFile::new(SOURCE_TEST_PRIMARY, "App.spec.ts").to(DESTINATION_TEST_PRIMARY),
    )
}

pub fn add_app_files_without_css<R, P>(
    ctx: &AppContext<R, P>,
    project: &mut Project,
) -> Result<(), AppError>
where
    R: ProjectRepository,
    P: PackageManager,
{
    info!("adding unstyled app markup");
    project.add_default_config(DefaultConfig::BaseName);

    let repository = ctx.repository();
    repository
        .template(project, &ProjectFile::new(SOURCE_PRIMARY, "App.html").to(DESTINATION_PRIMARY))?;
    repository
        .template(project, &ProjectFile::new(SOURCE_PRIMARY, "App.vue").to(DESTINATION_PRIMARY))
}

pub fn add_app_files_with_css<R, P>(
    ctx: &AppContext<R, P>,
    project: &mut Project,
) -> Result<(), AppError>
where
    R: ProjectRepository,
    P: PackageManager,
{
    info!("adding styled app markup and images");
    project.add_default_config(DefaultConfig::BaseName);

    let repository = ctx.repository();
    repository.template(
        project,
        &ProjectFile::new(SOURCE_PRIMARY, "StyledApp.html")
            .to(DESTINATION_PRIMARY)
            .renamed("App.html"),
    )?;
    repository.template(
        project,
        &ProjectFile::new(SOURCE_PRIMARY, "StyledApp.vue")
            .to(DESTINATION_PRIMARY)
            .renamed("App.vue"),
    )?;

    for image in IMAGES {
        repository.add(project, &ProjectFile::new(SOURCE_IMAGES, *image).to(DESTINATION_IMAGES))?;
    }
    Ok(())
}
