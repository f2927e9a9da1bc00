//! engine::gate
//!
//! Branch policy gating for mutating aliases.
//!
//! # Architecture
//!
//! Gated aliases (add, commit, push, originpush) are refused on protected
//! branches. The check is an exact, case-sensitive comparison against a
//! fixed list; there is no pattern matching. Read-only aliases never
//! consult the gate.
//!
//! # Invariants
//!
//! - Gating is deterministic and has no side effects
//! - A refused command never reaches the process runner
//!
//! # Example
//!
//! ```
//! use gitgate::engine::gate::PolicyGate;
//!
//! let gate = PolicyGate::default();
//! assert!(!gate.is_allowed("main"));
//! assert!(gate.is_allowed("feature/login"));
//! assert!(gate.check("push", "master").is_err());
//! ```

use thiserror::Error;

use crate::core::config::DEFAULT_PROTECTED_BRANCHES;

/// A gated command was attempted on a protected branch.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("'{command}' is not allowed on protected branch '{branch}'")]
pub struct PolicyError {
    /// Canonical alias name of the refused command.
    pub command: String,
    /// The protected branch.
    pub branch: String,
}

/// Denylist of protected branch names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyGate {
    protected: Vec<String>,
}

impl Default for PolicyGate {
    fn default() -> Self {
        Self::new(DEFAULT_PROTECTED_BRANCHES.iter().copied())
    }
}

impl PolicyGate {
    /// Create a gate protecting exactly the given branch names.
    pub fn new<I, S>(protected: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            protected: protected.into_iter().map(Into::into).collect(),
        }
    }

    /// Protected branch names.
    pub fn protected(&self) -> &[String] {
        &self.protected
    }

    /// False when `branch` is exactly one of the protected names.
    pub fn is_allowed(&self, branch: &str) -> bool {
        !self.protected.iter().any(|p| p == branch)
    }

    /// Refuse `command` if `branch` is protected.
    ///
    /// # Errors
    ///
    /// Returns `PolicyError` when the branch is protected.
    pub fn check(&self, command: &str, branch: &str) -> Result<(), PolicyError> {
        if self.is_allowed(branch) {
            Ok(())
        } else {
            Err(PolicyError {
                command: command.to_string(),
                branch: branch.to_string(),
            })
        }
    }
}
