//! Builds the complete, ordered file list for one service.

use tracing::debug;

use crate::domain::artifacts;
use crate::domain::catalog;
use crate::domain::{
    AppError, DerivedNames, FeatureSet, RenderContext, RenderedFile, ServiceConfig,
};
use crate::ports::TemplateRenderer;

pub const PLACEHOLDER_FILE: &str = ".gitkeep";

/// Every file of a service, fully rendered, before anything touches disk.
#[derive(Debug, Clone)]
pub struct ServiceFiles {
    pub names: DerivedNames,
    pub features: FeatureSet,
    pub files: Vec<RenderedFile>,
}

/// Render catalog entries, then synthesized artifacts, then placeholders for
/// reserved directories nothing else populates.
///
/// The first failing entry aborts the run, reported by its output path.
pub fn render_service_files<R: TemplateRenderer + ?Sized>(
    renderer: &R,
    config: &ServiceConfig,
) -> Result<ServiceFiles, AppError> {
    let features = FeatureSet::resolve(config);
    let names = DerivedNames::derive(&config.name);
    let ctx = RenderContext::new(config, &names, &features);

    let mut files = Vec::new();
    for entry in catalog::resolve(&features) {
        let contents = renderer
            .render(entry.template, &ctx)
            .map_err(|source| AppError::Template { path: entry.output_path.to_string(), source })?;
        debug!(path = entry.output_path, template = entry.template, "rendered template");
        files.push(RenderedFile::new(entry.output_path, contents));
    }

    files.extend(artifacts::synthesize(config, &names, &features));

    for dir in catalog::placeholder_dirs() {
        let prefix = format!("{}/", dir);
        if !files.iter().any(|file| file.path.starts_with(&prefix)) {
            files.push(RenderedFile::new(format!("{}{}", prefix, PLACEHOLDER_FILE), ""));
        }
    }

    Ok(ServiceFiles { names, features, files })
}
