use std::collections::HashSet;

use crate::domain::{AppError, Project};
use crate::ports::PackageManager;

use super::{Call, CallLog};

/// Package manager double: every package resolves to `1.0.0-<name>` unless
/// marked missing.
#[derive(Debug, Clone)]
pub struct FakePackageManager {
    log: CallLog,
    missing: HashSet<String>,
}

#[allow(dead_code)]
impl FakePackageManager {
    pub fn new(log: CallLog) -> Self {
        Self { log, missing: HashSet::new() }
    }

    /// Make `name` absent from the catalog.
    pub fn without(mut self, name: &str) -> Self {
        self.missing.insert(name.to_string());
        self
    }

    pub fn version_of(name: &str) -> String {
        format!("1.0.0-{}", name)
    }
}

impl PackageManager for FakePackageManager {
    fn get_version(&self, scope: &str, name: &str) -> Option<String> {
        self.log.record(Call::GetVersion { scope: scope.to_string(), name: name.to_string() });
        if self.missing.contains(name) { None } else { Some(Self::version_of(name)) }
    }

    fn add_dependency(
        &self,
        _project: &Project,
        name: &str,
        version: &str,
    ) -> Result<(), AppError> {
        self.log
            .record(Call::AddDependency { name: name.to_string(), version: version.to_string() });
        Ok(())
    }

    fn add_dev_dependency(
        &self,
        _project: &Project,
        name: &str,
        version: &str,
    ) -> Result<(), AppError> {
        self.log.record(Call::AddDevDependency {
            name: name.to_string(),
            version: version.to_string(),
        });
        Ok(())
    }

    fn add_script(&self, _project: &Project, name: &str, command: &str) -> Result<(), AppError> {
        self.log.record(Call::AddScript { name: name.to_string(), command: command.to_string() });
        Ok(())
    }
}
