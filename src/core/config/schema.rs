//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Validation
//!
//! Values are validated after parsing: the collaborator program must be
//! non-empty and protected branch names must be non-empty and free of
//! surrounding whitespace.

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Default collaborator executable.
pub const DEFAULT_PROGRAM: &str = "git";

/// Branches protected when no configuration overrides them.
pub const DEFAULT_PROTECTED_BRANCHES: &[&str] = &["trunk", "main", "master"];

/// User configuration.
///
/// # Example
///
/// ```toml
/// program = "git"
/// protected_branches = ["trunk", "main", "master", "release"]
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Version-control executable to run (default: "git")
    pub program: Option<String>,

    /// Branches on which gated aliases are refused
    pub protected_branches: Option<Vec<String>>,
}

impl GlobalConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(program) = &self.program {
            if program.trim().is_empty() {
                return Err(ConfigError::InvalidValue(
                    "program cannot be empty".to_string(),
                ));
            }
        }

        if let Some(branches) = &self.protected_branches {
            for branch in branches {
                if branch.is_empty() || branch.trim() != branch {
                    return Err(ConfigError::InvalidValue(format!(
                        "invalid protected branch '{}'",
                        branch
                    )));
                }
            }
        }

        Ok(())
    }
}
