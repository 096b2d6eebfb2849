mod call_log;
mod fake_package_manager;
mod recording_project_repository;

pub use call_log::{Call, CallLog};
pub use fake_package_manager::FakePackageManager;
pub use recording_project_repository::RecordingProjectRepository;
