use super::validation::join_path;

/// A copy instruction: a source file in the template store and where it lands
/// in the project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectFile {
    source: String,
    file_name: String,
    destination: String,
    destination_file_name: Option<String>,
}

impl ProjectFile {
    /// Describe `file_name` under the template root `source`.
    ///
    /// The destination defaults to the project root under the same name.
    pub fn new(source: impl Into<String>, file_name: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            file_name: file_name.into(),
            destination: String::new(),
            destination_file_name: None,
        }
    }

    /// Set the destination directory, relative to the project folder.
    pub fn to(mut self, destination: impl Into<String>) -> Self {
        self.destination = destination.into();
        self
    }

    /// Write under a different file name.
    pub fn renamed(mut self, destination_file_name: impl Into<String>) -> Self {
        self.destination_file_name = Some(destination_file_name.into());
        self
    }

    /// Path of the source file inside the template store.
    pub fn source_path(&self) -> String {
        join_path(&[&self.source, &self.file_name])
    }

    /// Path of the written file, relative to the project folder.
    pub fn destination_path(&self) -> String {
        let name = self.destination_file_name.as_deref().unwrap_or(&self.file_name);
        join_path(&[&self.destination, name])
    }
}
