use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::template_engine::{TEMPLATE_SUFFIX, render_template};
use crate::domain::validation::{join_path, validate_relative_path};
use crate::domain::{AppError, Project, ProjectFile};
use crate::ports::{ProjectRepository, TemplateStore};

/// Project repository writing into the project folder on disk.
#[derive(Debug, Clone)]
pub struct FilesystemProjectRepository<S: TemplateStore> {
    store: S,
}

impl<S: TemplateStore> FilesystemProjectRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    fn resolve(&self, project: &Project, relative: &str) -> Result<PathBuf, AppError> {
        if !validate_relative_path(relative) {
            return Err(AppError::InvalidPath(relative.to_string()));
        }
        Ok(project.folder().join(relative))
    }

    fn source_bytes(&self, path: &str) -> Result<&[u8], AppError> {
        self.store.get(path).ok_or_else(|| AppError::TemplateNotFound(path.to_string()))
    }
}

fn write_file(path: &Path, content: &[u8]) -> Result<(), AppError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    debug!(path = %path.display(), bytes = content.len(), "wrote project file");
    Ok(())
}

impl<S: TemplateStore> ProjectRepository for FilesystemProjectRepository<S> {
    fn add(&self, project: &Project, file: &ProjectFile) -> Result<(), AppError> {
        let destination = self.resolve(project, &file.destination_path())?;
        let content = self.source_bytes(&file.source_path())?;
        write_file(&destination, content)
    }

    fn template(&self, project: &Project, file: &ProjectFile) -> Result<(), AppError> {
        let destination = self.resolve(project, &file.destination_path())?;
        let template_path = format!("{}{}", file.source_path(), TEMPLATE_SUFFIX);
        let source = std::str::from_utf8(self.source_bytes(&template_path)?).map_err(|e| {
            AppError::TemplateRender { template: template_path.clone(), details: e.to_string() }
        })?;

        let rendered = render_template(&template_path, source, project)?;
        write_file(&destination, rendered.as_bytes())
    }

    fn replace_text(
        &self,
        project: &Project,
        directory: &str,
        file_name: &str,
        anchor: &str,
        replacement: &str,
    ) -> Result<(), AppError> {
        let path = self.resolve(project, &join_path(&[directory, file_name]))?;
        let content = fs::read_to_string(&path)?;

        if !content.contains(anchor) {
            warn!(path = %path.display(), anchor, "text anchor not found; file left unchanged");
            return Ok(());
        }

        write_file(&path, content.replace(anchor, replacement).as_bytes())
    }
}
