mod package_manager;
mod project_repository;
mod template_store;

pub use package_manager::PackageManager;
pub use project_repository::ProjectRepository;
pub use template_store::TemplateStore;
