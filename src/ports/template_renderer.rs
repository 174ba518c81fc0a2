use crate::domain::{RenderContext, TemplateError};

/// Port for turning a template identifier into text.
///
/// Implementations must not touch the file system beyond reading their own
/// template sources.
pub trait TemplateRenderer {
    /// Render `template` against the typed service context.
    fn render(&self, template: &str, ctx: &RenderContext<'_>) -> Result<String, TemplateError>;
}
