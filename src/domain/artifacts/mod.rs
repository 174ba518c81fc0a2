//! Outputs built by direct construction instead of template text.
//!
//! Each artifact is a pure function of the configuration, derived names and
//! feature set, so it stays in lock-step with the templated files.

pub mod dockerfile;
pub mod makefile;
pub mod manifest;
pub mod proto;
pub mod readme;

use super::configuration::ServiceConfig;
use super::features::FeatureSet;
use super::names::DerivedNames;
use super::tree::RenderedFile;

pub const DOCKERFILE_PATH: &str = "deployments/docker/Dockerfile";

/// Build every synthesized artifact, in a fixed order.
pub fn synthesize(
    config: &ServiceConfig,
    names: &DerivedNames,
    features: &FeatureSet,
) -> Vec<RenderedFile> {
    vec![
        RenderedFile::new("go.mod", manifest::render(config, names, features)),
        RenderedFile::new("Makefile", makefile::render(config, names, features)),
        RenderedFile::new(DOCKERFILE_PATH, dockerfile::render(config, names, features)),
        RenderedFile::new(
            format!("api/proto/{}", names.proto_file()),
            proto::render(config, names, features),
        ),
        RenderedFile::new("README.md", readme::render(config, names, features)),
    ]
}
