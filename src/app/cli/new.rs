use std::io::ErrorKind;
use std::path::PathBuf;

use dialoguer::{Confirm, Error as DialoguerError, Input, Select};

use crate::app::api::{self, GenerateOptions};
use crate::domain::{AppError, DerivedNames, RawServiceConfig, StorageBackend};
use crate::domain::configuration::{DEFAULT_PORT, DEFAULT_SIGNING_KEY_ENV};

use super::ConfigArgs;

pub(super) struct NewOptions {
    pub output_dir: PathBuf,
    pub interactive: bool,
    pub yes: bool,
    pub no_git: bool,
}

pub(super) fn run_new(args: ConfigArgs, options: NewOptions) -> Result<(), AppError> {
    let mut raw = args.into_raw()?;

    if options.interactive {
        let Some(prompted) = prompt_missing(raw)? else {
            println!("Cancelled.");
            return Ok(());
        };
        raw = prompted;

        if !options.yes && !confirm(&raw)? {
            println!("Cancelled.");
            return Ok(());
        }
    }

    let outcome = api::generate(
        raw,
        GenerateOptions { output_root: options.output_dir, skip_version_control: options.no_git },
    )?;

    println!("✅ Generated service at {}/", outcome.tree.root().display());
    println!("  Wrote {} file(s)", outcome.tree.files().len());
    println!("  Fingerprint {}", outcome.tree.fingerprint());
    if let Some(commit) = &outcome.commit {
        println!("  Committed {}", commit);
    }
    if !outcome.warnings.is_empty() {
        println!("⚠️  Warnings:");
        for warning in &outcome.warnings {
            println!("  • {}", warning);
        }
    }
    println!("📁 Next: cd {} && make proto && make run", outcome.tree.root().display());
    Ok(())
}

/// Ask for every value that flags and the config file left unset.
/// Returns `None` when the user interrupts a prompt.
fn prompt_missing(mut raw: RawServiceConfig) -> Result<Option<RawServiceConfig>, AppError> {
    macro_rules! ask {
        ($expr:expr) => {
            match $expr? {
                Some(value) => value,
                None => return Ok(None),
            }
        };
    }

    let name = match raw.name.clone() {
        Some(name) => name,
        None => ask!(prompt_text("Service name (e.g. User, OrderItem)", None)),
    };
    let names = DerivedNames::derive(&name);

    if raw.module_path.is_none() {
        raw.module_path = Some(ask!(prompt_text("Go module path", None)));
    }
    if raw.port.is_none() {
        let port = ask!(prompt_text("gRPC port", Some(DEFAULT_PORT.to_string())));
        let port = port
            .trim()
            .parse()
            .map_err(|_| AppError::invalid("port", format!("'{}' is not a number", port)))?;
        raw.port = Some(port);
    }
    if raw.backend.is_none() && raw.relational.is_none() && raw.document.is_none() {
        let backend = ask!(prompt_backend());
        raw.backend = Some(backend.label().to_string());
    }
    if raw.database_name.is_none() {
        let default = format!("{}db", names.lower);
        raw.database_name = Some(ask!(prompt_text("Database name", Some(default))));
    }
    if raw.table_name.is_none() {
        raw.table_name =
            Some(ask!(prompt_text("Table or collection name", Some(names.plural.clone()))));
    }
    if raw.cache_prefix.is_none() {
        raw.cache_prefix = Some(ask!(prompt_text("Cache key prefix", Some(names.lower.clone()))));
    }
    if raw.cache_db.is_none() {
        let db = ask!(prompt_text("Redis database (0-15)", Some("0".to_string())));
        let db = db
            .trim()
            .parse()
            .map_err(|_| AppError::invalid("cache_db", format!("'{}' is not a number", db)))?;
        raw.cache_db = Some(db);
    }
    if raw.signing_key_env.is_none() {
        raw.signing_key_env = Some(ask!(prompt_text(
            "Signing key environment variable",
            Some(DEFAULT_SIGNING_KEY_ENV.to_string())
        )));
    }
    if raw.git_remote.is_none() {
        let remote = ask!(prompt_text("Git remote (empty to skip)", Some(String::new())));
        raw.git_remote = Some(remote).filter(|value| !value.trim().is_empty());
    }

    raw.name = Some(name);
    Ok(Some(raw))
}

fn prompt_text(prompt: &str, default: Option<String>) -> Result<Option<String>, AppError> {
    let mut input = Input::<String>::new().with_prompt(prompt);
    if let Some(default) = default {
        input = input.default(default).allow_empty(true);
    }
    match input.interact_text() {
        Ok(value) => Ok(Some(value)),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(AppError::Prompt(format!("Failed to read '{}': {}", prompt, err))),
    }
}

fn prompt_backend() -> Result<Option<StorageBackend>, AppError> {
    let items: Vec<String> = StorageBackend::ALL
        .iter()
        .map(|backend| format!("{} ({})", backend.label(), backend.product()))
        .collect();

    let selection = Select::new()
        .with_prompt("Storage backend")
        .items(&items)
        .default(0)
        .interact_opt()
        .map_err(|err| AppError::Prompt(format!("Failed to select backend: {}", err)))?;

    Ok(selection.map(|index| StorageBackend::ALL[index]))
}

fn confirm(raw: &RawServiceConfig) -> Result<bool, AppError> {
    let config = raw.validate()?;
    let names = DerivedNames::derive(&config.name);
    let prompt = format!(
        "Generate {}/ for module {} on port {}?",
        names.service_dir(),
        config.module_path,
        config.port
    );

    Confirm::new()
        .with_prompt(prompt)
        .default(true)
        .interact()
        .map_err(|err| AppError::Prompt(format!("Failed to confirm: {}", err)))
}
