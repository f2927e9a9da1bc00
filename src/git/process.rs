//! git::process
//!
//! Child process execution behind the [`ProcessRunner`] trait.
//!
//! # Design
//!
//! The runner is synchronous: `run` blocks until the child exits. Stdout
//! and stderr share one pipe so the captured text keeps the order in which
//! the child wrote it. Stdin is the null device; the child never sees the
//! user's terminal input.
//!
//! There are no retries and no timeouts. A child that hangs hangs the
//! caller.
//!
//! # Example
//!
//! ```no_run
//! use gitgate::git::{ProcessRunner, SystemRunner};
//!
//! let runner = SystemRunner::new();
//! let result = runner.run("git", &["--version".to_string()]).unwrap();
//! assert!(result.success());
//! print!("{}", result.combined_output);
//! ```

use std::io::Read;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use thiserror::Error;
use tracing::debug;

use crate::core::types::InvocationResult;

/// Errors from starting or collecting a child process.
///
/// A child that starts and exits nonzero is not an error at this layer;
/// it is an [`InvocationResult`] whose `success()` is false.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// The program could not be started.
    #[error("failed to start '{program}': {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },

    /// Output could not be collected from a running child.
    #[error("failed to collect output of '{program}': {source}")]
    Io {
        program: String,
        source: std::io::Error,
    },
}

/// Capability to locate and run external programs.
///
/// The dispatcher only talks to the collaborator through this trait, so
/// tests can substitute [`crate::git::mock::MockRunner`].
pub trait ProcessRunner {
    /// Find `program` on the search path.
    fn locate(&self, program: &str) -> Option<PathBuf>;

    /// Run `program` with `args`, wait for it, and capture combined output.
    ///
    /// # Errors
    ///
    /// Returns `ProcessError` if the program cannot be started or its
    /// output cannot be read.
    fn run(&self, program: &str, args: &[String]) -> Result<InvocationResult, ProcessError>;
}

/// Runs real OS processes.
#[derive(Debug, Clone, Default)]
pub struct SystemRunner {
    /// Working directory for children (inherited when `None`).
    cwd: Option<PathBuf>,
}

impl SystemRunner {
    /// Runner whose children inherit the current directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Runner whose children start in `cwd`.
    pub fn in_dir(cwd: impl Into<PathBuf>) -> Self {
        Self {
            cwd: Some(cwd.into()),
        }
    }
}

impl ProcessRunner for SystemRunner {
    fn locate(&self, program: &str) -> Option<PathBuf> {
        let found = match &self.cwd {
            Some(cwd) => which::which_in(program, std::env::var_os("PATH"), cwd),
            None => which::which(program),
        };
        found.ok()
    }

    fn run(&self, program: &str, args: &[String]) -> Result<InvocationResult, ProcessError> {
        debug!(program, ?args, "spawning");

        let io_err = |source| ProcessError::Io {
            program: program.to_string(),
            source,
        };
        let (mut reader, writer) = std::io::pipe().map_err(io_err)?;
        let writer_err = writer.try_clone().map_err(io_err)?;

        // The command owns the parent's copies of the pipe writers. It must
        // be dropped before reading or the reader never sees end-of-file.
        let mut child = {
            let mut command = Command::new(program);
            command
                .args(args)
                .stdin(Stdio::null())
                .stdout(writer)
                .stderr(writer_err);
            if let Some(cwd) = &self.cwd {
                command.current_dir(cwd);
            }
            command.spawn().map_err(|source| ProcessError::Spawn {
                program: program.to_string(),
                source,
            })?
        };

        let mut buf = Vec::new();
        reader.read_to_end(&mut buf).map_err(io_err)?;
        let status = child.wait().map_err(io_err)?;

        debug!(program, code = ?status.code(), "child exited");
        Ok(InvocationResult::new(
            String::from_utf8_lossy(&buf).into_owned(),
            status.code(),
        ))
    }
}
