//! Configuration file discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::CertlintConfig;
use crate::error::{CertlintError, Result};

/// File name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = ".certlint.yml";

/// Find `.certlint.yml` in the given directory.
pub fn find_config(dir: &Path) -> Option<PathBuf> {
    let path = dir.join(CONFIG_FILE_NAME);
    if path.is_file() {
        Some(path)
    } else {
        None
    }
}

/// Load a single config file and parse it into CertlintConfig.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<CertlintConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            CertlintError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            CertlintError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into CertlintConfig.
///
/// An empty document yields the default config.
pub fn parse_config(content: &str, source_path: &Path) -> Result<CertlintConfig> {
    if content.trim().is_empty() {
        return Ok(CertlintConfig::default());
    }
    serde_yaml::from_str(content).map_err(|e| CertlintError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load config with optional path override.
///
/// An explicit path must exist. Without one, `.certlint.yml` in `dir` is used
/// when present and the defaults otherwise.
pub fn load_config(dir: &Path, config_override: Option<&Path>) -> Result<CertlintConfig> {
    match config_override {
        Some(path) => load_config_file(path),
        None => match find_config(dir) {
            Some(path) => {
                tracing::debug!(path = %path.display(), "using discovered config");
                load_config_file(&path)
            }
            None => Ok(CertlintConfig::default()),
        },
    }
}
