use std::fs;
use std::path::Path;

use crate::domain::{AppError, RawServiceConfig};

/// Load a service configuration file.
///
/// `.yml` and `.yaml` files are parsed as YAML, everything else as TOML.
/// Unknown keys are rejected.
pub fn load_config_file(path: &Path) -> Result<RawServiceConfig, AppError> {
    let content = fs::read_to_string(path).map_err(|e| AppError::ConfigFile {
        path: path.to_path_buf(),
        details: e.to_string(),
    })?;

    if content.trim().is_empty() {
        return Ok(RawServiceConfig::default());
    }

    let is_yaml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yml") || ext.eq_ignore_ascii_case("yaml"));

    let parsed = if is_yaml {
        serde_yaml::from_str(&content).map_err(|e| e.to_string())
    } else {
        toml::from_str(&content).map_err(|e| e.to_string())
    };

    parsed.map_err(|details| AppError::ConfigFile { path: path.to_path_buf(), details })
}
