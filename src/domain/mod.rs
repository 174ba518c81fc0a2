pub mod artifacts;
pub mod catalog;
pub mod configuration;
pub mod error;
pub mod features;
pub mod names;
pub mod render_context;
pub mod tree;

pub use catalog::{TemplateEntry, TemplateGroup};
pub use configuration::{BackendIndicators, RawServiceConfig, ServiceConfig};
pub use error::{AppError, TemplateError};
pub use features::{FeatureSet, StorageBackend};
pub use names::DerivedNames;
pub use render_context::RenderContext;
pub use tree::{GeneratedTree, RenderedFile};
