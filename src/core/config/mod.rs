//! core::config
//!
//! Configuration schema and loading.
//!
//! # Precedence
//!
//! Configuration values are resolved in this order (later overrides earlier):
//! 1. Default values
//! 2. Global config file
//!
//! # Config Locations
//!
//! Searched in order, first existing file wins:
//! 1. `$GITGATE_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/gitgate/config.toml`
//! 3. `~/.gitgate/config.toml`
//!
//! A missing file is not an error. A file that exists but does not parse
//! or validate is.
//!
//! # Example
//!
//! ```no_run
//! use gitgate::core::config::Config;
//!
//! let config = Config::load().unwrap();
//! println!("Program: {}", config.program());
//! println!("Protected: {:?}", config.protected_branches());
//! ```

pub mod schema;

pub use schema::{GlobalConfig, DEFAULT_PROGRAM, DEFAULT_PROTECTED_BRANCHES};

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Loaded configuration with defaults applied through accessors.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Global configuration
    pub global: GlobalConfig,
    /// Path to the config file (if loaded)
    path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the default locations.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be read, parsed,
    /// or validated. Missing config files are not an error.
    pub fn load() -> Result<Config, ConfigError> {
        match Self::locate() {
            Some(path) => Self::load_file(&path),
            None => Ok(Config::default()),
        }
    }

    /// Load configuration from a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated.
    pub fn load_file(path: &Path) -> Result<Config, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let global: GlobalConfig =
            toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        global.validate()?;

        Ok(Config {
            global,
            path: Some(path.to_path_buf()),
        })
    }

    /// Wrap an in-memory configuration that was not read from a file.
    pub fn from_global(global: GlobalConfig) -> Config {
        Config { global, path: None }
    }

    /// Find the first existing config file.
    fn locate() -> Option<PathBuf> {
        if let Ok(path) = std::env::var("GITGATE_CONFIG") {
            let path = PathBuf::from(path);
            if path.exists() {
                return Some(path);
            }
        }

        if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
            let path = PathBuf::from(xdg_home).join("gitgate/config.toml");
            if path.exists() {
                return Some(path);
            }
        }

        dirs::home_dir()
            .map(|home| home.join(".gitgate/config.toml"))
            .filter(|path| path.exists())
    }

    /// Path of the loaded config file, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    // =========================================================================
    // Accessor methods with defaults
    // =========================================================================

    /// Version-control executable to invoke.
    ///
    /// Defaults to "git" if not configured.
    pub fn program(&self) -> &str {
        self.global.program.as_deref().unwrap_or(DEFAULT_PROGRAM)
    }

    /// Branches on which gated aliases are refused.
    ///
    /// Defaults to trunk, main, and master if not configured.
    pub fn protected_branches(&self) -> Vec<String> {
        match &self.global.protected_branches {
            Some(branches) => branches.clone(),
            None => DEFAULT_PROTECTED_BRANCHES
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}
