//! API schema skeleton built from a typed message model.

use std::fmt::Write;

use crate::domain::configuration::ServiceConfig;
use crate::domain::features::FeatureSet;
use crate::domain::names::DerivedNames;

/// CRUD operations exposed by every generated service, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    Get,
    Update,
    Delete,
    List,
}

impl Operation {
    pub const ALL: [Operation; 5] =
        [Operation::Create, Operation::Get, Operation::Update, Operation::Delete, Operation::List];

    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Create => "Create",
            Operation::Get => "Get",
            Operation::Update => "Update",
            Operation::Delete => "Delete",
            Operation::List => "List",
        }
    }

    pub fn request(&self, type_name: &str) -> String {
        format!("{}{}Request", self.as_str(), type_name)
    }

    pub fn response(&self, type_name: &str) -> String {
        format!("{}{}Response", self.as_str(), type_name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Field {
    repeated: bool,
    ty: String,
    name: &'static str,
}

impl Field {
    fn new(ty: impl Into<String>, name: &'static str) -> Self {
        Self { repeated: false, ty: ty.into(), name }
    }

    fn repeated(ty: impl Into<String>, name: &'static str) -> Self {
        Self { repeated: true, ty: ty.into(), name }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Message {
    name: String,
    fields: Vec<Field>,
}

/// Id type used by the schema; document stores use hex object ids.
pub fn id_type(features: &FeatureSet) -> &'static str {
    if features.is_document() { "string" } else { "int64" }
}

fn messages(names: &DerivedNames, features: &FeatureSet) -> Vec<Message> {
    let entity = names.type_name.as_str();
    let id = id_type(features);
    let status = || vec![Field::new("bool", "success"), Field::new("string", "message")];

    let mut messages = vec![Message {
        name: entity.to_string(),
        fields: vec![
            Field::new(id, "id"),
            Field::new("string", "name"),
            Field::new("string", "description"),
            Field::new("string", "created_at"),
            Field::new("string", "updated_at"),
        ],
    }];

    for operation in Operation::ALL {
        let (request, response) = match operation {
            Operation::Create => (
                vec![Field::new("string", "name"), Field::new("string", "description")],
                vec![Field::new(id, "id"), Field::new("string", "message")],
            ),
            Operation::Get => (vec![Field::new(id, "id")], vec![Field::new(entity, "item")]),
            Operation::Update => (
                vec![
                    Field::new(id, "id"),
                    Field::new("string", "name"),
                    Field::new("string", "description"),
                ],
                status(),
            ),
            Operation::Delete => (vec![Field::new(id, "id")], status()),
            Operation::List => (
                vec![Field::new("int64", "page"), Field::new("int64", "limit")],
                vec![
                    Field::repeated(entity, "items"),
                    Field::new("int64", "total"),
                    Field::new("int64", "page"),
                    Field::new("int64", "limit"),
                ],
            ),
        };
        messages.push(Message { name: operation.request(entity), fields: request });
        messages.push(Message { name: operation.response(entity), fields: response });
    }

    messages
}

/// Render `api/proto/<lower>.proto`.
pub fn render(config: &ServiceConfig, names: &DerivedNames, features: &FeatureSet) -> String {
    let entity = names.type_name.as_str();
    let mut out = String::new();

    let _ = writeln!(out, "syntax = \"proto3\";\n");
    let _ = writeln!(out, "package {};\n", names.lower);
    let _ = writeln!(out, "option go_package = \"{}/api/proto\";\n", config.module_path);

    let _ = writeln!(out, "service {}Service {{", entity);
    for operation in Operation::ALL {
        let _ = writeln!(
            out,
            "  rpc {}({}) returns ({});",
            operation.as_str(),
            operation.request(entity),
            operation.response(entity)
        );
    }
    let _ = writeln!(out, "}}");

    for message in messages(names, features) {
        let _ = writeln!(out, "\nmessage {} {{", message.name);
        for (index, field) in message.fields.iter().enumerate() {
            let label = if field.repeated { "repeated " } else { "" };
            let _ = writeln!(out, "  {}{} {} = {};", label, field.ty, field.name, index + 1);
        }
        let _ = writeln!(out, "}}");
    }

    out
}
