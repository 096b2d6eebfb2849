use include_dir::{Dir, include_dir};

use crate::ports::TemplateStore;

static GENERATOR_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/generator");

/// Template store backed by the generator assets compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedTemplateStore;

impl EmbeddedTemplateStore {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateStore for EmbeddedTemplateStore {
    fn get(&self, path: &str) -> Option<&[u8]> {
        GENERATOR_DIR.get_file(path).map(|file| file.contents())
    }
}
