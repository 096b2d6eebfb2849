use minijinja::{Environment, UndefinedBehavior, Value};
use serde_json::Map;

use crate::domain::{AppError, DefaultConfig, Project};

/// Suffix marking a template store file as a template.
pub const TEMPLATE_SUFFIX: &str = ".j2";

fn build_environment() -> Environment<'static> {
    let mut env = Environment::new();
    env.set_keep_trailing_newline(true);
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env
}

/// Rendering context: built-in defaults overlaid with the project configuration.
fn project_context(project: &Project) -> Value {
    let mut context = Map::new();
    for config in DefaultConfig::ALL {
        context.insert(config.key().to_string(), config.default_value());
    }
    for (key, value) in project.config() {
        context.insert(key.clone(), value.clone());
    }
    Value::from_serialize(&context)
}

pub fn render_template(
    template_name: &str,
    source: &str,
    project: &Project,
) -> Result<String, AppError> {
    build_environment().render_str(source, project_context(project)).map_err(|e| {
        AppError::TemplateRender { template: template_name.to_string(), details: e.to_string() }
    })
}
