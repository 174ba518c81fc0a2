use minijinja::{AutoEscape, Environment, Error, ErrorKind, UndefinedBehavior};

use crate::domain::{RenderContext, TemplateError};

use super::helpers::register_helpers;

/// Build an environment that resolves template ids through `loader`.
///
/// Undefined references are errors and output is never escaped. Block tags on
/// their own line leave no blank line behind. The helper table is registered
/// before any template is loaded.
pub fn build_template_environment<F>(loader: F) -> Environment<'static>
where
    F: Fn(&str) -> Result<Option<String>, Error> + Send + Sync + 'static,
{
    let mut env = Environment::new();
    env.set_keep_trailing_newline(true);
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.set_auto_escape_callback(|_| AutoEscape::None);
    register_helpers(&mut env);
    env.set_loader(loader);
    env
}

pub fn render_template_by_name(
    env: &Environment<'_>,
    template_name: &str,
    ctx: &RenderContext<'_>,
) -> Result<String, TemplateError> {
    let template = env.get_template(template_name).map_err(|e| match e.kind() {
        ErrorKind::TemplateNotFound => TemplateError::NotFound(template_name.to_string()),
        ErrorKind::SyntaxError => {
            TemplateError::Syntax { template: template_name.to_string(), details: e.to_string() }
        }
        _ => TemplateError::Render { template: template_name.to_string(), details: e.to_string() },
    })?;

    template.render(ctx).map_err(|e| TemplateError::Render {
        template: template_name.to_string(),
        details: describe(&e),
    })
}

fn describe(err: &Error) -> String {
    let mut details = err.to_string();
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        details.push_str(": ");
        details.push_str(&cause.to_string());
        source = cause.source();
    }
    details
}
