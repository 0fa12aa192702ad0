//! Configuration file discovery and validation for the CLI.
//!
//! A configuration is taken from the first source that has a file: the
//! `--config` path, `erdraft/config.toml` under the working directory, then
//! the platform config directory. With no file the defaults apply. Whatever
//! is loaded is checked before the generator client is built from it.

use std::{
    fmt, fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use erdraft::{
    ErdraftError,
    config::{AppConfig, GeneratorConfig},
};

const LOCAL_CONFIG: &str = "erdraft/config.toml";

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration in {path}: {reason}")]
    Parse { path: PathBuf, reason: String },

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),

    #[error("Invalid configuration in {path}: {reason}")]
    Validation { path: PathBuf, reason: String },
}

impl From<ConfigError> for ErdraftError {
    fn from(err: ConfigError) -> Self {
        ErdraftError::Config(err.to_string())
    }
}

/// Where a configuration file was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigSource {
    Explicit,
    Local,
    System,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ConfigSource::Explicit => "explicit",
            ConfigSource::Local => "local",
            ConfigSource::System => "system",
        })
    }
}

/// Load the CLI configuration.
///
/// An explicit path must exist. The local and platform files are optional.
///
/// # Errors
///
/// Returns [`ErdraftError::Config`] if the explicit file is missing, or if
/// the chosen file is not valid TOML or fails [`validate`].
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, ErdraftError> {
    let found = match explicit_path {
        Some(path) => Some((ConfigSource::Explicit, path.as_ref().to_path_buf())),
        None => discover(),
    };

    let Some((source, path)) = found else {
        debug!("No configuration file found, using default configuration");
        return Ok(AppConfig::default());
    };

    info!(source = source.to_string(), path = path.display().to_string(); "Loading configuration");
    load_config_file(&path)
}

/// First optional configuration file that exists.
fn discover() -> Option<(ConfigSource, PathBuf)> {
    let local = PathBuf::from(LOCAL_CONFIG);
    let system = ProjectDirs::from("com", "erdraft", "erdraft")
        .map(|dirs| dirs.config_dir().join("config.toml"));
    if system.is_none() {
        debug!("Could not determine platform-specific config directory");
    }

    [(ConfigSource::Local, Some(local)), (ConfigSource::System, system)]
        .into_iter()
        .filter_map(|(source, path)| path.map(|path| (source, path)))
        .find(|(source, path)| {
            let exists = path.exists();
            if !exists {
                debug!(source = source.to_string(), path = path.display().to_string(); "Configuration file not found");
            }
            exists
        })
}

fn load_config_file(path: &Path) -> Result<AppConfig, ErdraftError> {
    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()).into());
    }

    let content = fs::read_to_string(path)?;
    let config: AppConfig = toml::from_str(&content).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    validate(&config).map_err(|reason| ConfigError::Validation {
        path: path.to_path_buf(),
        reason,
    })?;

    Ok(config)
}

/// Reject settings the text generator cannot work with.
///
/// A zero timeout fails every request, and the base URL must carry an
/// `http://` or `https://` scheme for the chat endpoint to be reachable.
fn validate(config: &AppConfig) -> Result<(), String> {
    validate_generator(config.generator())
}

fn validate_generator(generator: &GeneratorConfig) -> Result<(), String> {
    if generator.timeout().is_zero() {
        return Err("generator.timeout_secs must be greater than 0".to_string());
    }

    if generator.model().trim().is_empty() {
        return Err("generator.model must not be empty".to_string());
    }

    let base_url = generator.base_url();
    let host = base_url
        .strip_prefix("http://")
        .or_else(|| base_url.strip_prefix("https://"));
    if host.is_none_or(str::is_empty) {
        return Err(format!(
            "generator.base_url `{base_url}` must start with http:// or https:// and name a host"
        ));
    }

    Ok(())
}
