//! Generate command: render, write and optionally version a new service.

use std::path::PathBuf;

use tracing::{info, warn};

use crate::app::AppContext;
use crate::app::services::materializer::materialize;
use crate::app::services::service_files::render_service_files;
use crate::domain::{AppError, GeneratedTree, ServiceConfig};
use crate::ports::{TemplateRenderer, TreeWriter, VersionControl};

pub const COMMIT_MESSAGE: &str = "Initial commit from svcforge scaffold";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Directory the `<kebab>-service` directory is created in.
    pub output_root: PathBuf,
    /// Skip repository initialization even when a remote is configured.
    pub skip_version_control: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self { output_root: PathBuf::from("."), skip_version_control: false }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOutcome {
    pub tree: GeneratedTree,
    /// Id of the initial commit, when version control ran and succeeded.
    pub commit: Option<String>,
    pub warnings: Vec<String>,
}

pub fn execute<R, W, V>(
    ctx: &AppContext<R, W, V>,
    config: &ServiceConfig,
    options: &GenerateOptions,
) -> Result<GenerateOutcome, AppError>
where
    R: TemplateRenderer,
    W: TreeWriter,
    V: VersionControl,
{
    let rendered = render_service_files(ctx.renderer(), config)?;

    let root = options.output_root.join(rendered.names.service_dir());
    if ctx.writer().exists(&root) {
        return Err(AppError::OutputExists(root));
    }

    let tree = materialize(ctx.writer(), &root, &rendered.files)?;
    info!(
        root = %tree.root().display(),
        files = tree.files().len(),
        backend = rendered.features.storage.label(),
        "generated service"
    );

    let mut outcome = GenerateOutcome { tree, commit: None, warnings: Vec::new() };

    match config.git_remote.as_deref() {
        Some(_) if options.skip_version_control => {
            info!("version control skipped by request");
        }
        Some(remote) => match ctx.version_control().initialize(&root, remote, COMMIT_MESSAGE) {
            Ok(commit) => {
                info!(%commit, remote, "initialized repository");
                outcome.commit = Some(commit);
            }
            Err(err) => {
                warn!(error = %err, "repository initialization failed");
                outcome.warnings.push(format!("Repository initialization failed: {}", err));
            }
        },
        None => {}
    }

    Ok(outcome)
}
