//! Shared testing utilities for clientgen CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const PRIMARY_APP: &str = "src/main/webapp/app/common/primary/app";
pub const IMAGES: &str = "src/main/webapp/content/images";

/// Testing harness providing an isolated project folder for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Path to the project folder used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `clientgen` binary within the project folder.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("clientgen").expect("Failed to locate clientgen binary");
        cmd.current_dir(self.work_dir()).env_remove("RUST_LOG");
        cmd
    }

    /// Run `clientgen init` and assert success.
    pub fn init(&self) {
        self.cli().arg("init").assert().success();
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.work_dir.join(relative)
    }

    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.path(relative))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative, e))
    }

    /// Parse the generated `package.json`.
    pub fn package_json(&self) -> serde_json::Value {
        serde_json::from_str(&self.read("package.json")).expect("package.json should be valid JSON")
    }

    /// File names present in the generated images folder.
    pub fn images(&self) -> Vec<String> {
        let dir = self.path(IMAGES);
        if !dir.exists() {
            return Vec::new();
        }
        let mut names: Vec<String> = fs::read_dir(dir)
            .expect("images folder should be readable")
            .map(|entry| entry.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        names.sort();
        names
    }
}
