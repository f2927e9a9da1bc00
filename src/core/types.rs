//! core::types
//!
//! Plain data carried between the resolver, translator, and runner.
//!
//! # Types
//!
//! - [`RepositoryContext`] - Repository root and current branch, resolved once
//! - [`InvocationResult`] - Combined output and exit status of one child process
//!
//! # Example
//!
//! ```
//! use gitgate::core::types::RepositoryContext;
//!
//! let ctx = RepositoryContext::new("/work/repo", "feature/x");
//! assert_eq!(ctx.branch(), "feature/x");
//! assert!(!ctx.is_outside_repository());
//!
//! assert!(RepositoryContext::outside().is_outside_repository());
//! ```

use std::fmt;

/// Repository root and current branch for one invocation.
///
/// Constructed once at startup and passed by reference to everything
/// that needs it. Both fields are empty when the invocation happens
/// outside any repository.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepositoryContext {
    root: String,
    branch: String,
}

impl RepositoryContext {
    /// Create a context from a resolved root and branch.
    pub fn new(root: impl Into<String>, branch: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            branch: branch.into(),
        }
    }

    /// The context used when no repository could be found.
    pub fn outside() -> Self {
        Self::default()
    }

    /// Absolute path of the repository root (empty outside a repository).
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Short name of the current branch (empty outside a repository).
    pub fn branch(&self) -> &str {
        &self.branch
    }

    /// True only when neither the root nor the branch resolved.
    pub fn is_outside_repository(&self) -> bool {
        self.root.is_empty() && self.branch.is_empty()
    }
}

impl fmt::Display for RepositoryContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} in {}", self.branch, self.root)
    }
}

/// Outcome of one child process execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationResult {
    /// Interleaved stdout and stderr, decoded lossily as UTF-8.
    pub combined_output: String,
    /// Exit code, or `None` if the child was killed by a signal.
    pub exit_code: Option<i32>,
}

impl InvocationResult {
    /// Create a result from captured output and an exit code.
    pub fn new(combined_output: impl Into<String>, exit_code: Option<i32>) -> Self {
        Self {
            combined_output: combined_output.into(),
            exit_code,
        }
    }

    /// Successful result with the given output.
    pub fn ok(combined_output: impl Into<String>) -> Self {
        Self::new(combined_output, Some(0))
    }

    /// Failed result with the given output and exit code.
    pub fn failed(combined_output: impl Into<String>, exit_code: i32) -> Self {
        Self::new(combined_output, Some(exit_code))
    }

    /// True when the child exited with status zero.
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}
