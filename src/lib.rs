//! svcforge: generate Go gRPC microservice skeletons from a validated configuration.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    COMMIT_MESSAGE, GenerateOptions, GenerateOutcome, GenerationPlan, generate, load_config_file,
    plan,
};
pub use domain::{
    AppError, DerivedNames, FeatureSet, GeneratedTree, RawServiceConfig, ServiceConfig,
    StorageBackend, TemplateError,
};
