use crate::domain::validation::join_path;
use crate::domain::{AppError, Project, ProjectFile};
use crate::ports::ProjectRepository;

use super::{Call, CallLog};

/// Project repository double that records calls instead of touching disk.
#[derive(Debug, Clone)]
pub struct RecordingProjectRepository {
    log: CallLog,
}

impl RecordingProjectRepository {
    pub fn new(log: CallLog) -> Self {
        Self { log }
    }
}

impl ProjectRepository for RecordingProjectRepository {
    fn add(&self, _project: &Project, file: &ProjectFile) -> Result<(), AppError> {
        self.log.record(Call::Add {
            source: file.source_path(),
            destination: file.destination_path(),
        });
        Ok(())
    }

    fn template(&self, _project: &Project, file: &ProjectFile) -> Result<(), AppError> {
        self.log.record(Call::Template {
            source: file.source_path(),
            destination: file.destination_path(),
        });
        Ok(())
    }

    fn replace_text(
        &self,
        _project: &Project,
        directory: &str,
        file_name: &str,
        anchor: &str,
        replacement: &str,
    ) -> Result<(), AppError> {
        self.log.record(Call::ReplaceText {
            path: join_path(&[directory, file_name]),
            anchor: anchor.to_string(),
            replacement: replacement.to_string(),
        });
        Ok(())
    }
}
