//! Service templates embedded in the binary and rendered with minijinja.

mod asset_collect;
mod helpers;
mod template_engine;

use std::sync::OnceLock;

use include_dir::{Dir, include_dir};
use minijinja::{Environment, Error, ErrorKind};

use crate::domain::{RenderContext, TemplateError};
use crate::ports::TemplateRenderer;

pub use self::helpers::helper_names;
pub use self::template_engine::{build_template_environment, render_template_by_name};

static TEMPLATES_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/templates");

static ENVIRONMENT: OnceLock<Environment<'static>> = OnceLock::new();

fn load_embedded(name: &str) -> Result<Option<String>, Error> {
    let Some(file) = TEMPLATES_DIR.get_file(name) else {
        return Ok(None);
    };
    file.contents_utf8().map(|content| Some(content.to_string())).ok_or_else(|| {
        Error::new(ErrorKind::InvalidOperation, format!("template '{}' is not UTF-8", name))
    })
}

fn embedded_environment() -> &'static Environment<'static> {
    ENVIRONMENT.get_or_init(|| build_template_environment(load_embedded))
}

/// Identifiers of every template shipped in the binary.
pub fn embedded_template_ids() -> Vec<String> {
    asset_collect::collect_template_ids(&TEMPLATES_DIR)
}

/// Renderer backed by the embedded template library.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedTemplateRenderer;

impl EmbeddedTemplateRenderer {
    /// Create a renderer over the embedded templates.
    pub fn new() -> Self {
        Self
    }
}

impl TemplateRenderer for EmbeddedTemplateRenderer {
    fn render(&self, template: &str, ctx: &RenderContext<'_>) -> Result<String, TemplateError> {
        render_template_by_name(embedded_environment(), template, ctx)
    }
}
