//! clientgen: Vite + Vue client scaffolding for generated projects.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    CatalogEntry, dependencies, init, init_at, styled_vite_vue_at, vite_vue, vite_vue_at,
};
pub use app::config::ProjectOverrides;
pub use domain::{AppError, DefaultConfig, Project, ProjectFile};
