//! Naming conventions derived from the service's base name.

use convert_case::{Case, Casing};
use serde::Serialize;

/// Every spelling of the base name used across generated files.
///
/// Computed once per run and shared by every render call and synthesized
/// artifact, so a type referenced in a template and declared in the proto
/// schema are always spelled the same way.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct DerivedNames {
    /// Type-style identifier, exactly as entered (`OrderItem`).
    pub type_name: String,
    /// Package/namespace-style identifier (`orderitem`).
    pub lower: String,
    /// URL/file-style identifier (`order-item`).
    pub kebab: String,
    /// Table/collection-style identifier (`orderitems`).
    pub plural: String,
}

impl DerivedNames {
    /// Derive all naming conventions from an already validated base name.
    ///
    /// Pluralization is intentionally naive: it appends `s` and does not
    /// handle irregular plurals (`Person` becomes `persons`).
    pub fn derive(base: &str) -> Self {
        let lower = base.to_lowercase();
        let kebab = base.to_case(Case::Kebab);
        let plural = pluralize(&lower);
        Self { type_name: base.to_string(), lower, kebab, plural }
    }

    /// Directory name of the generated service under the output root.
    pub fn service_dir(&self) -> String {
        format!("{}-service", self.kebab)
    }

    /// File name of the API schema (`order.proto`).
    pub fn proto_file(&self) -> String {
        format!("{}.proto", self.lower)
    }
}

pub fn pluralize(word: &str) -> String {
    format!("{}s", word)
}
