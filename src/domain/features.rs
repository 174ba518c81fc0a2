//! Feature gates derived from configuration.

use serde::Serialize;

use super::configuration::ServiceConfig;

/// Storage backend of the generated service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageBackend {
    Relational,
    Document,
}

impl StorageBackend {
    pub const ALL: [StorageBackend; 2] = [StorageBackend::Relational, StorageBackend::Document];

    /// Parse a backend from user input, accepting product names as aliases.
    pub fn from_name(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "relational" | "postgres" | "postgresql" | "pg" => Some(StorageBackend::Relational),
            "document" | "mongodb" | "mongo" => Some(StorageBackend::Document),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StorageBackend::Relational => "relational",
            StorageBackend::Document => "document",
        }
    }

    /// Product backing this storage family in generated code.
    pub fn product(&self) -> &'static str {
        match self {
            StorageBackend::Relational => "PostgreSQL",
            StorageBackend::Document => "MongoDB",
        }
    }
}

/// Boolean gates controlling which optional files are generated.
///
/// This is the only place raw backend indicators are interpreted; catalog
/// predicates, render contexts and synthesized artifacts read the resolved
/// gates instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FeatureSet {
    pub storage: StorageBackend,
    pub message_queue: bool,
}

impl FeatureSet {
    /// Resolve gates from a validated configuration.
    ///
    /// Relational is checked first, so it wins when both indicators are set,
    /// and it is also the default when neither is.
    pub fn resolve(config: &ServiceConfig) -> Self {
        let storage = if config.storage.relational {
            StorageBackend::Relational
        } else if config.storage.document {
            StorageBackend::Document
        } else {
            StorageBackend::Relational
        };

        Self { storage, message_queue: config.message_queue }
    }

    pub fn is_relational(&self) -> bool {
        self.storage == StorageBackend::Relational
    }

    pub fn is_document(&self) -> bool {
        self.storage == StorageBackend::Document
    }

    pub fn has_message_queue(&self) -> bool {
        self.message_queue
    }
}
