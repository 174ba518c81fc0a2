//! Service configuration: the raw record collected from files, flags and
//! prompts, and the validated record the generator consumes.

use serde::{Deserialize, Serialize};

use super::error::AppError;
use super::features::StorageBackend;
use super::names::DerivedNames;

pub const DEFAULT_PORT: u16 = 50051;
pub const DEFAULT_SIGNING_KEY_ENV: &str = "JWT_SECRET";
pub const MAX_CACHE_DB: i64 = 15;

/// Unvalidated configuration values.
///
/// Every field is optional so that a config file, CLI flags and the prompt
/// wizard can each supply a subset. Numeric fields are signed so that
/// negative input is reported instead of wrapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawServiceConfig {
    pub name: Option<String>,
    pub module_path: Option<String>,
    pub port: Option<i64>,
    /// Backend by name (`relational`, `postgres`, `document`, `mongodb`).
    pub backend: Option<String>,
    /// Explicit relational indicator (`--postgres`).
    pub relational: Option<bool>,
    /// Explicit document indicator (`--mongodb`).
    pub document: Option<bool>,
    pub database_name: Option<String>,
    pub table_name: Option<String>,
    pub cache_prefix: Option<String>,
    pub cache_db: Option<i64>,
    pub message_queue: Option<bool>,
    pub git_remote: Option<String>,
    pub signing_key_env: Option<String>,
}

/// Raw backend indicators as collected from input.
///
/// Both may be set when flags and a config file disagree; only
/// [`FeatureSet::resolve`](super::FeatureSet::resolve) decides which one wins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BackendIndicators {
    pub relational: bool,
    pub document: bool,
}

/// Validated, immutable configuration for one generator run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceConfig {
    pub name: String,
    pub module_path: String,
    pub port: u16,
    pub storage: BackendIndicators,
    pub database_name: String,
    pub table_name: String,
    pub cache_prefix: String,
    pub cache_db: u8,
    pub message_queue: bool,
    /// Remote address for the initial commit; `None` skips version control.
    pub git_remote: Option<String>,
    /// Environment variable the generated service reads its signing key from.
    pub signing_key_env: String,
}

impl RawServiceConfig {
    /// Overlay `other` on top of `self`; values present in `other` win.
    ///
    /// The backend selectors move as one unit: if `other` names a backend in
    /// any form, none of `self`'s selectors survive.
    pub fn merge(self, other: RawServiceConfig) -> RawServiceConfig {
        let (backend, relational, document) = if other.selects_backend() {
            (other.backend, other.relational, other.document)
        } else {
            (self.backend, self.relational, self.document)
        };

        RawServiceConfig {
            name: other.name.or(self.name),
            module_path: other.module_path.or(self.module_path),
            port: other.port.or(self.port),
            backend,
            relational,
            document,
            database_name: other.database_name.or(self.database_name),
            table_name: other.table_name.or(self.table_name),
            cache_prefix: other.cache_prefix.or(self.cache_prefix),
            cache_db: other.cache_db.or(self.cache_db),
            message_queue: other.message_queue.or(self.message_queue),
            git_remote: other.git_remote.or(self.git_remote),
            signing_key_env: other.signing_key_env.or(self.signing_key_env),
        }
    }

    fn selects_backend(&self) -> bool {
        non_blank(&self.backend).is_some()
            || self.relational == Some(true)
            || self.document == Some(true)
    }

    /// Validate required fields and fill defaults.
    ///
    /// Runs before any file-system effect; every failure is
    /// [`AppError::ConfigurationInvalid`].
    pub fn validate(&self) -> Result<ServiceConfig, AppError> {
        let name = non_blank(&self.name).ok_or_else(|| AppError::invalid("name", "is required"))?;
        validate_name(name)?;

        let module_path = non_blank(&self.module_path)
            .ok_or_else(|| AppError::invalid("module_path", "is required"))?;
        if module_path.chars().any(char::is_whitespace) {
            return Err(AppError::invalid("module_path", "must not contain whitespace"));
        }

        let port = match self.port {
            None => DEFAULT_PORT,
            Some(value) => u16::try_from(value)
                .ok()
                .filter(|port| *port != 0)
                .ok_or_else(|| {
                    AppError::invalid("port", format!("{} is not in 1..=65535", value))
                })?,
        };

        let cache_db = match self.cache_db {
            None => 0,
            Some(value) if (0..=MAX_CACHE_DB).contains(&value) => value as u8,
            Some(value) => {
                return Err(AppError::invalid(
                    "cache_db",
                    format!("{} is not in 0..={}", value, MAX_CACHE_DB),
                ));
            }
        };

        let storage = self.backend_indicators()?;
        let names = DerivedNames::derive(name);

        let signing_key_env =
            non_blank(&self.signing_key_env).unwrap_or(DEFAULT_SIGNING_KEY_ENV).to_string();
        if !is_env_var_name(&signing_key_env) {
            return Err(AppError::invalid(
                "signing_key_env",
                format!("'{}' is not a valid environment variable name", signing_key_env),
            ));
        }

        let database_name =
            identifier("database_name", &self.database_name, || format!("{}db", names.lower))?;
        let table_name = identifier("table_name", &self.table_name, || names.plural.clone())?;
        let cache_prefix = identifier("cache_prefix", &self.cache_prefix, || names.lower.clone())?;

        Ok(ServiceConfig {
            name: name.to_string(),
            module_path: module_path.to_string(),
            port,
            storage,
            database_name,
            table_name,
            cache_prefix,
            cache_db,
            message_queue: self.message_queue.unwrap_or(false),
            git_remote: non_blank(&self.git_remote).map(str::to_string),
            signing_key_env,
        })
    }

    fn backend_indicators(&self) -> Result<BackendIndicators, AppError> {
        let mut indicators = BackendIndicators {
            relational: self.relational.unwrap_or(false),
            document: self.document.unwrap_or(false),
        };

        if let Some(value) = non_blank(&self.backend) {
            match StorageBackend::from_name(value) {
                Some(StorageBackend::Relational) => indicators.relational = true,
                Some(StorageBackend::Document) => indicators.document = true,
                None => {
                    return Err(AppError::invalid(
                        "backend",
                        format!(
                            "'{}' is not one of relational, postgres, document, mongodb",
                            value
                        ),
                    ));
                }
            }
        }

        Ok(indicators)
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn validate_name(name: &str) -> Result<(), AppError> {
    let mut chars = name.chars();
    let starts_with_letter = chars.next().is_some_and(|c| c.is_ascii_alphabetic());
    if !starts_with_letter || !chars.all(|c| c.is_ascii_alphanumeric()) {
        return Err(AppError::invalid(
            "name",
            format!("'{}' must start with a letter and contain only letters and digits", name),
        ));
    }
    Ok(())
}

/// Take a user-supplied identifier, or the default when blank.
///
/// The value lands unquoted in SQL, YAML and Go source, so only
/// `[A-Za-z_][A-Za-z0-9_]*` is accepted.
fn identifier(
    field: &'static str,
    value: &Option<String>,
    default: impl FnOnce() -> String,
) -> Result<String, AppError> {
    let Some(value) = non_blank(value) else {
        return Ok(default());
    };

    let mut chars = value.chars();
    let valid = chars.next().is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');
    if !valid {
        return Err(AppError::invalid(
            field,
            format!(
                "'{}' must be letters, digits and underscores, not starting with a digit",
                value
            ),
        ));
    }
    Ok(value.to_string())
}

fn is_env_var_name(value: &str) -> bool {
    let mut chars = value.chars();
    chars.next().is_some_and(|c| c.is_ascii_uppercase() || c == '_')
        && chars.all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}
