//! Plan command: everything `generate` would write, without writing it.

use serde::Serialize;

use crate::app::services::service_files::render_service_files;
use crate::domain::tree::fingerprint;
use crate::domain::{AppError, DerivedNames, FeatureSet, ServiceConfig};
use crate::ports::TemplateRenderer;

#[derive(Debug, Clone, Serialize)]
pub struct GenerationPlan {
    pub service_dir: String,
    pub config: ServiceConfig,
    pub names: DerivedNames,
    pub features: FeatureSet,
    /// Relative output paths in write order.
    pub files: Vec<String>,
    /// Matches the fingerprint of the tree `generate` would produce.
    pub fingerprint: String,
}

pub fn execute<R: TemplateRenderer + ?Sized>(
    renderer: &R,
    config: ServiceConfig,
) -> Result<GenerationPlan, AppError> {
    let rendered = render_service_files(renderer, &config)?;

    Ok(GenerationPlan {
        service_dir: rendered.names.service_dir(),
        files: rendered.files.iter().map(|file| file.path.clone()).collect(),
        fingerprint: fingerprint(&rendered.files),
        names: rendered.names,
        features: rendered.features,
        config,
    })
}
