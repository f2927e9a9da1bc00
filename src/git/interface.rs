//! git::interface
//!
//! Repository context queries against the collaborator executable.
//!
//! Each query runs a fixed read-only subcommand through a
//! [`ProcessRunner`], trims surrounding whitespace from the output, and
//! returns it. No repository files are read directly.
//!
//! # Example
//!
//! ```no_run
//! use gitgate::git::{Git, SystemRunner};
//!
//! let runner = SystemRunner::new();
//! let git = Git::new(&runner, "git");
//! let ctx = git.resolve()?;
//! println!("{}", ctx);
//! # Ok::<(), gitgate::git::ContextError>(())
//! ```

use thiserror::Error;
use tracing::debug;

use super::process::{ProcessError, ProcessRunner};
use crate::core::types::RepositoryContext;

/// Arguments asking for the absolute repository root.
pub const TOP_LEVEL_ARGS: &[&str] = &["rev-parse", "--show-toplevel"];

/// Arguments asking for the short name of the current branch.
pub const CURRENT_BRANCH_ARGS: &[&str] = &["symbolic-ref", "--short", "HEAD"];

/// Which context query failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextQuery {
    TopLevelDirectory,
    CurrentBranch,
}

impl std::fmt::Display for ContextQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContextQuery::TopLevelDirectory => write!(f, "top-level directory"),
            ContextQuery::CurrentBranch => write!(f, "current branch"),
        }
    }
}

/// Errors resolving the repository context.
#[derive(Debug, Error)]
pub enum ContextError {
    /// The collaborator ran and reported failure (not a repository,
    /// detached HEAD).
    #[error("failed to get {query}: {}", .output.trim())]
    QueryFailed {
        query: ContextQuery,
        /// Captured output of the failing query.
        output: String,
    },

    /// The collaborator could not be run at all.
    #[error("failed to get {query}: {source}")]
    Process {
        query: ContextQuery,
        source: ProcessError,
    },
}

impl ContextError {
    /// The query that failed.
    pub fn query(&self) -> ContextQuery {
        match self {
            ContextError::QueryFailed { query, .. } | ContextError::Process { query, .. } => *query,
        }
    }
}

/// Context resolver bound to a runner and a collaborator program.
#[derive(Debug)]
pub struct Git<'a, R: ProcessRunner + ?Sized> {
    runner: &'a R,
    program: &'a str,
}

impl<'a, R: ProcessRunner + ?Sized> Git<'a, R> {
    /// Create a resolver that runs `program` through `runner`.
    pub fn new(runner: &'a R, program: &'a str) -> Self {
        Self { runner, program }
    }

    /// Absolute path of the repository root.
    ///
    /// # Errors
    ///
    /// Returns `ContextError` if not inside a repository.
    pub fn resolve_top_level_directory(&self) -> Result<String, ContextError> {
        self.query(ContextQuery::TopLevelDirectory, TOP_LEVEL_ARGS)
    }

    /// Short symbolic name of the current branch.
    ///
    /// # Errors
    ///
    /// Returns `ContextError` on detached HEAD or outside a repository.
    pub fn resolve_current_branch(&self) -> Result<String, ContextError> {
        self.query(ContextQuery::CurrentBranch, CURRENT_BRANCH_ARGS)
    }

    /// Resolve root and branch, failing on the first error.
    ///
    /// # Errors
    ///
    /// Returns the first `ContextError` encountered.
    pub fn resolve(&self) -> Result<RepositoryContext, ContextError> {
        let root = self.resolve_top_level_directory()?;
        let branch = self.resolve_current_branch()?;
        debug!(%root, %branch, "resolved repository context");
        Ok(RepositoryContext::new(root, branch))
    }

    /// Resolve root and branch, treating each failure as "not found".
    ///
    /// Both fields end up empty when the working directory is outside any
    /// repository.
    pub fn resolve_or_outside(&self) -> RepositoryContext {
        let root = self.resolve_top_level_directory().unwrap_or_else(|err| {
            debug!(%err, "no repository root");
            String::new()
        });
        let branch = self.resolve_current_branch().unwrap_or_else(|err| {
            debug!(%err, "no current branch");
            String::new()
        });
        RepositoryContext::new(root, branch)
    }

    fn query(&self, query: ContextQuery, args: &[&str]) -> Result<String, ContextError> {
        let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        let result = self
            .runner
            .run(self.program, &args)
            .map_err(|source| ContextError::Process { query, source })?;

        if !result.success() {
            return Err(ContextError::QueryFailed {
                query,
                output: result.combined_output,
            });
        }

        Ok(result.combined_output.trim().to_string())
    }
}
