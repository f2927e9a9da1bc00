//! engine::dispatch
//!
//! The single entry point for running an alias.
//!
//! # Lifecycle
//!
//! ```text
//! Validate -> Locate -> Resolve -> Translate -> Gate -> Execute -> Relay
//! ```
//!
//! # Invariants
//!
//! - A refused command (policy, clone inside a repository) never spawns
//! - Compound commands stop at the first failing step
//! - Successful output goes to `out` line by line, failing output to `err`
//!   verbatim
//!
//! # Example
//!
//! ```
//! use gitgate::engine::{dispatch, Context, DispatchError};
//! use gitgate::git::mock::MockRunner;
//!
//! let runner = MockRunner::in_repository("/repo", "main");
//! let argv = vec!["commit".to_string(), "-m".to_string(), "x".to_string()];
//! let (mut out, mut err) = (Vec::new(), Vec::new());
//!
//! let result = dispatch(&argv, &Context::default(), &runner, &mut out, &mut err);
//! assert!(matches!(result, Err(DispatchError::Policy(_))));
//! assert!(runner.commands().is_empty());
//! ```

use std::io::Write;

use thiserror::Error;
use tracing::{debug, info};

use super::gate::PolicyError;
use super::Context;
use crate::core::aliases::{translate, CommandKind, Translation};
use crate::core::types::RepositoryContext;
use crate::git::{ContextError, Git, ProcessError, ProcessRunner};
use crate::ui::output;

/// Usage line shown when no alias is given.
pub const USAGE: &str = "usage: gitgate <command> [args...]";

/// Errors that terminate an invocation.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// No alias was given.
    #[error("{}", USAGE)]
    Usage,

    /// The collaborator is not on the search path.
    #[error("'{program}' is not installed or not on PATH")]
    ToolNotFound { program: String },

    /// Repository root or branch could not be resolved.
    #[error(transparent)]
    Context(#[from] ContextError),

    /// A gated command on a protected branch.
    #[error(transparent)]
    Policy(#[from] PolicyError),

    /// `clone` attempted inside a repository.
    #[error("No!")]
    CloneRejected,

    /// The child could not be started.
    #[error("failed to run '{command}': {source}")]
    Spawn {
        command: String,
        source: ProcessError,
    },

    /// The child exited unsuccessfully.
    #[error("failed to run '{command}': {}", describe_exit(.exit_code))]
    Execution {
        command: String,
        exit_code: Option<i32>,
    },

    /// Relaying output to the standard streams failed.
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl DispatchError {
    /// Process exit code for this error.
    ///
    /// Execution failures keep the child's code when it fits in a byte;
    /// everything else exits with 1.
    pub fn exit_code(&self) -> u8 {
        match self {
            DispatchError::Execution {
                exit_code: Some(code),
                ..
            } => u8::try_from(*code).ok().filter(|c| *c != 0).unwrap_or(1),
            _ => 1,
        }
    }
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit status {}", code),
        None => "terminated by signal".to_string(),
    }
}

/// Run one invocation: `argv[0]` is the alias, the rest are forwarded.
///
/// # Errors
///
/// Returns a `DispatchError` for every terminal condition. On execution
/// failure the child's captured output has already been written to `err`.
pub fn dispatch<R, O, E>(
    argv: &[String],
    ctx: &Context,
    runner: &R,
    out: &mut O,
    err: &mut E,
) -> Result<(), DispatchError>
where
    R: ProcessRunner + ?Sized,
    O: Write + ?Sized,
    E: Write + ?Sized,
{
    let (alias, trailing) = argv.split_first().ok_or(DispatchError::Usage)?;

    if runner.locate(&ctx.program).is_none() {
        return Err(DispatchError::ToolNotFound {
            program: ctx.program.clone(),
        });
    }

    let git = Git::new(runner, &ctx.program);
    let repo = if alias == "clone" {
        git.resolve_or_outside()
    } else {
        git.resolve()?
    };

    let translation = translate(alias, trailing, &repo);
    debug!(alias = %alias, command = translation.name(), kind = ?translation.kind(), "translated");

    admit(&translation, &repo, ctx)?;

    if let Translation::Single { announce: true, .. } = &translation {
        output::write_lines(out, &repo.to_string())?;
    }

    for step in translation.invocations() {
        execute(step, ctx, runner, out, err)?;
    }
    Ok(())
}

/// Decide whether a translation may run in `repo`.
fn admit(
    translation: &Translation,
    repo: &RepositoryContext,
    ctx: &Context,
) -> Result<(), DispatchError> {
    match translation.kind() {
        CommandKind::Gated => {
            if let Err(e) = ctx.gate.check(translation.name(), repo.branch()) {
                info!(command = translation.name(), branch = repo.branch(), "refused by policy");
                return Err(e.into());
            }
            Ok(())
        }
        CommandKind::Bootstrap if !repo.is_outside_repository() => {
            info!(root = repo.root(), "clone refused inside a repository");
            Err(DispatchError::CloneRejected)
        }
        _ => Ok(()),
    }
}

/// Run one argument vector and relay its output.
fn execute<R, O, E>(
    args: &[String],
    ctx: &Context,
    runner: &R,
    out: &mut O,
    err: &mut E,
) -> Result<(), DispatchError>
where
    R: ProcessRunner + ?Sized,
    O: Write + ?Sized,
    E: Write + ?Sized,
{
    let command = display_command(&ctx.program, args);
    info!(%command, "executing");

    let result = runner
        .run(&ctx.program, args)
        .map_err(|source| DispatchError::Spawn {
            command: command.clone(),
            source,
        })?;

    if !result.success() {
        output::write_raw(err, &result.combined_output)?;
        return Err(DispatchError::Execution {
            command,
            exit_code: result.exit_code,
        });
    }

    output::write_lines(out, &result.combined_output)?;
    Ok(())
}

fn display_command(program: &str, args: &[String]) -> String {
    std::iter::once(program)
        .chain(args.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ")
}
