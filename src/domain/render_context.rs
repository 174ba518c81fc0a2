use serde::Serialize;

use super::configuration::ServiceConfig;
use super::features::FeatureSet;
use super::names::DerivedNames;

/// Values exposed to every service template.
///
/// Templates see `config.*`, `names.*` and `features.*`; anything else is an
/// undefined reference and fails rendering.
#[derive(Debug, Clone, Serialize)]
pub struct RenderContext<'a> {
    pub config: &'a ServiceConfig,
    pub names: &'a DerivedNames,
    pub features: FeatureFlags,
}

/// Template-facing view of [`FeatureSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeatureFlags {
    pub relational: bool,
    pub document: bool,
    pub message_queue: bool,
    pub backend: &'static str,
}

impl<'a> RenderContext<'a> {
    pub fn new(config: &'a ServiceConfig, names: &'a DerivedNames, features: &FeatureSet) -> Self {
        Self {
            config,
            names,
            features: FeatureFlags {
                relational: features.is_relational(),
                document: features.is_document(),
                message_queue: features.has_message_queue(),
                backend: features.storage.label(),
            },
        }
    }
}
