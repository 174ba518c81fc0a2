use crate::domain::{RenderContext, TemplateError};
use crate::ports::TemplateRenderer;

/// Renders every template as a one-line marker naming the template and type.
#[derive(Debug, Clone, Default)]
pub struct StubTemplateRenderer {
    fail_on: Option<String>,
}

impl StubTemplateRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail with a render error for `template` only.
    pub fn failing_on(template: &str) -> Self {
        Self { fail_on: Some(template.to_string()) }
    }
}

impl TemplateRenderer for StubTemplateRenderer {
    fn render(&self, template: &str, ctx: &RenderContext<'_>) -> Result<String, TemplateError> {
        if self.fail_on.as_deref() == Some(template) {
            return Err(TemplateError::Render {
                template: template.to_string(),
                details: "undefined value".to_string(),
            });
        }
        Ok(format!("// {} for {}\n", template, ctx.names.type_name))
    }
}
