//! git::mock
//!
//! Scripted process runner for deterministic testing.
//!
//! # Design
//!
//! The mock runner answers each invocation from a table of scripted
//! responses keyed by argument vector, and records every invocation so
//! tests can assert what was (or was not) executed. Unscripted invocations
//! succeed with empty output.
//!
//! # Example
//!
//! ```
//! use gitgate::core::types::InvocationResult;
//! use gitgate::git::mock::MockRunner;
//! use gitgate::git::ProcessRunner;
//!
//! let runner = MockRunner::new()
//!     .respond(&["rev-parse", "HEAD"], InvocationResult::ok("abc123\n"));
//!
//! let args = vec!["rev-parse".to_string(), "HEAD".to_string()];
//! let result = runner.run("git", &args).unwrap();
//! assert_eq!(result.combined_output, "abc123\n");
//! assert_eq!(runner.invocations(), vec![vec!["rev-parse", "HEAD"]]);
//! ```

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use super::interface::{CURRENT_BRANCH_ARGS, TOP_LEVEL_ARGS};
use super::process::{ProcessError, ProcessRunner};
use crate::core::types::InvocationResult;

/// Mock process runner for testing.
///
/// Clones share state, so a clone handed to the code under test still
/// records into the original.
#[derive(Debug, Clone)]
pub struct MockRunner {
    inner: Arc<Mutex<MockRunnerInner>>,
}

/// Internal mutable state.
#[derive(Debug, Default)]
struct MockRunnerInner {
    /// Scripted results by argument vector.
    responses: HashMap<Vec<String>, InvocationResult>,
    /// Whether `locate` reports the program as missing.
    missing_program: bool,
    /// Whether every `run` fails to spawn.
    fail_spawn: bool,
    /// Recorded argument vectors, in order.
    invocations: Vec<Vec<String>>,
}

impl Default for MockRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl MockRunner {
    /// Runner with no scripted responses.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(MockRunnerInner::default())),
        }
    }

    /// Runner whose context queries resolve to `root` and `branch`.
    pub fn in_repository(root: &str, branch: &str) -> Self {
        Self::new()
            .respond(TOP_LEVEL_ARGS, InvocationResult::ok(format!("{}\n", root)))
            .respond(
                CURRENT_BRANCH_ARGS,
                InvocationResult::ok(format!("{}\n", branch)),
            )
    }

    /// Runner whose context queries fail as they do outside a repository.
    pub fn outside_repository() -> Self {
        let not_a_repo =
            "fatal: not a git repository (or any of the parent directories): .git\n";
        Self::new()
            .respond(TOP_LEVEL_ARGS, InvocationResult::failed(not_a_repo, 128))
            .respond(CURRENT_BRANCH_ARGS, InvocationResult::failed(not_a_repo, 128))
    }

    /// Script the result for an exact argument vector.
    pub fn respond(self, args: &[&str], result: InvocationResult) -> Self {
        let key = args.iter().map(|s| s.to_string()).collect();
        self.lock().responses.insert(key, result);
        self
    }

    /// Make `locate` report the program as missing.
    pub fn missing_program(self) -> Self {
        self.lock().missing_program = true;
        self
    }

    /// Make every `run` fail as if the program could not be started.
    pub fn fail_spawn(self) -> Self {
        self.lock().fail_spawn = true;
        self
    }

    /// All recorded argument vectors, in order.
    pub fn invocations(&self) -> Vec<Vec<String>> {
        self.lock().invocations.clone()
    }

    /// Recorded invocations other than the two context queries.
    pub fn commands(&self) -> Vec<Vec<String>> {
        self.invocations()
            .into_iter()
            .filter(|argv| argv != TOP_LEVEL_ARGS && argv != CURRENT_BRANCH_ARGS)
            .collect()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MockRunnerInner> {
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl ProcessRunner for MockRunner {
    fn locate(&self, program: &str) -> Option<PathBuf> {
        if self.lock().missing_program {
            None
        } else {
            Some(PathBuf::from("/usr/bin").join(program))
        }
    }

    fn run(&self, program: &str, args: &[String]) -> Result<InvocationResult, ProcessError> {
        let mut inner = self.lock();
        inner.invocations.push(args.to_vec());

        if inner.fail_spawn {
            return Err(ProcessError::Spawn {
                program: program.to_string(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "mock spawn failure"),
            });
        }

        Ok(inner
            .responses
            .get(args)
            .cloned()
            .unwrap_or_else(|| InvocationResult::ok("")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn unscripted_invocation_succeeds_empty() {
        let runner = MockRunner::new();
        let result = runner.run("git", &argv(&["status"])).unwrap();
        assert!(result.success());
        assert!(result.combined_output.is_empty());
    }

    #[test]
    fn clones_share_recordings() {
        let runner = MockRunner::new();
        let clone = runner.clone();
        clone.run("git", &argv(&["status"])).unwrap();
        assert_eq!(runner.invocations(), vec![argv(&["status"])]);
    }

    #[test]
    fn commands_excludes_context_queries() {
        let runner = MockRunner::in_repository("/repo", "main");
        runner.run("git", &argv(TOP_LEVEL_ARGS)).unwrap();
        runner.run("git", &argv(CURRENT_BRANCH_ARGS)).unwrap();
        runner.run("git", &argv(&["log"])).unwrap();
        assert_eq!(runner.commands(), vec![argv(&["log"])]);
    }

    #[test]
    fn missing_program_is_not_located() {
        assert!(MockRunner::new().missing_program().locate("git").is_none());
        assert!(MockRunner::new().locate("git").is_some());
    }
}
