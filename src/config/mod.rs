//! Configuration loading with layered precedence.
//!
//! Settings come from four layers, weakest first: built-in defaults, a
//! TOML config file, environment variables, and CLI flags. Each layer
//! only overrides what it explicitly sets.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration loading failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    #[error("Failed to read config file at {}: {reason}", path.display())]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO failure.
        reason: String,
    },
    /// The config file is not valid TOML or has unknown fields.
    #[error("Failed to parse config file at {}: {reason}", path.display())]
    ParseError {
        /// Path that failed to parse.
        path: PathBuf,
        /// Parser diagnostic.
        reason: String,
    },
}

/// On-disk configuration, all fields optional.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Identifier of the player to pin to the player slot.
    pub player: Option<String>,
    /// Where the application writes its own diagnostic log.
    pub log_file_path: Option<PathBuf>,
}

/// Fully resolved configuration after all layers are applied.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// Identifier of the player to pin to the player slot, if any.
    pub player: Option<String>,
    /// Where the application writes its own diagnostic log.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            player: None,
            log_file_path: default_log_path(),
        }
    }
}

fn default_log_path() -> PathBuf {
    dirs::state_dir()
        .map(|d| d.join("matchrec").join("matchrec.log"))
        .unwrap_or_else(|| PathBuf::from("matchrec.log"))
}

/// Default location of the config file, under the user config directory.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("matchrec").join("config.toml"))
}

/// Load a config file from an explicit path.
///
/// A missing file is not an error; it yields an empty config.
///
/// # Errors
///
/// Returns `ConfigError` when the file exists but cannot be read or
/// parsed.
pub fn load_config_file(path: &Path) -> Result<ConfigFile, ConfigError> {
    if !path.exists() {
        return Ok(ConfigFile::default());
    }

    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Load the config file using path precedence: an explicit path, then the
/// `MATCHREC_CONFIG` environment variable, then the default location.
///
/// # Errors
///
/// Returns `ConfigError` when the chosen file cannot be read or parsed.
pub fn load_config_with_precedence(explicit: Option<&Path>) -> Result<ConfigFile, ConfigError> {
    if let Some(path) = explicit {
        return load_config_file(path);
    }
    if let Ok(env_path) = std::env::var("MATCHREC_CONFIG") {
        return load_config_file(Path::new(&env_path));
    }
    match default_config_path() {
        Some(path) => load_config_file(&path),
        None => Ok(ConfigFile::default()),
    }
}

/// Merge a config file over the defaults.
pub fn merge_config(file: ConfigFile) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();
    ResolvedConfig {
        player: file.player.or(defaults.player),
        log_file_path: file.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply environment variable overrides on top of a resolved config.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(player) = std::env::var("MATCHREC_PLAYER") {
        if !player.is_empty() {
            config.player = Some(player);
        }
    }
    config
}

/// Apply CLI flag overrides on top of a resolved config.
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    player_override: Option<String>,
) -> ResolvedConfig {
    if let Some(player) = player_override {
        config.player = Some(player);
    }
    config
}
