//! API facade: wires the production adapters into the commands.

use crate::adapters::{EmbeddedTemplateRenderer, FilesystemTreeWriter, GitRepository};
use crate::app::AppContext;
use crate::app::commands::{generate as generate_cmd, plan as plan_cmd};
use crate::domain::{AppError, RawServiceConfig};

pub use crate::app::commands::generate::{COMMIT_MESSAGE, GenerateOptions, GenerateOutcome};
pub use crate::app::commands::plan::GenerationPlan;
pub use crate::app::config::load_config_file;

fn create_context() -> AppContext<EmbeddedTemplateRenderer, FilesystemTreeWriter, GitRepository> {
    AppContext::new(
        EmbeddedTemplateRenderer::new(),
        FilesystemTreeWriter::new(),
        GitRepository::new(),
    )
}

/// Validate `raw` and generate the service beneath `options.output_root`.
///
/// Configuration errors are returned before anything is written.
pub fn generate(
    raw: RawServiceConfig,
    options: GenerateOptions,
) -> Result<GenerateOutcome, AppError> {
    let config = raw.validate()?;
    generate_cmd::execute(&create_context(), &config, &options)
}

/// Validate `raw` and describe the tree `generate` would write.
pub fn plan(raw: RawServiceConfig) -> Result<GenerationPlan, AppError> {
    let config = raw.validate()?;
    plan_cmd::execute(&EmbeddedTemplateRenderer::new(), config)
}

