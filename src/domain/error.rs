use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure while turning one template into text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// No embedded source backs the template identifier.
    #[error("template '{0}' not found")]
    NotFound(String),

    /// The template source could not be parsed.
    #[error("syntax error in template '{template}': {details}")]
    Syntax { template: String, details: String },

    /// Execution referenced an undefined value or a helper failed.
    #[error("failed to render template '{template}': {details}")]
    Render { template: String, details: String },
}

impl TemplateError {
    pub fn template(&self) -> &str {
        match self {
            TemplateError::NotFound(template)
            | TemplateError::Syntax { template, .. }
            | TemplateError::Render { template, .. } => template,
        }
    }
}

/// Library-wide error type for svcforge operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure outside of tree materialization.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// A required configuration value is missing or malformed.
    #[error("Invalid configuration for '{field}': {reason}")]
    ConfigurationInvalid { field: &'static str, reason: String },

    /// Config file could not be read or parsed.
    #[error("Failed to load config file {path}: {details}")]
    ConfigFile { path: PathBuf, details: String },

    /// Rendering the template behind a logical output path failed.
    #[error("Failed to generate '{path}': {source}")]
    Template {
        path: String,
        #[source]
        source: TemplateError,
    },

    /// Directory creation or file write failed while writing the tree.
    #[error("Failed to write '{}': {source}", path.display())]
    Materialization {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The service directory already exists; each run targets a fresh directory.
    #[error("Output directory already exists: {}", .0.display())]
    OutputExists(PathBuf),

    /// Git execution failed.
    #[error("Git error running '{command}': {details}")]
    Git { command: String, details: String },

    /// Interactive prompt failed.
    #[error("Prompt failed: {0}")]
    Prompt(String),
}

impl AppError {
    /// Build a configuration error for `field`.
    pub fn invalid<S: Into<String>>(field: &'static str, reason: S) -> Self {
        AppError::ConfigurationInvalid { field, reason: reason.into() }
    }
}
