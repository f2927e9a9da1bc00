//! cli
//!
//! Command-line interface layer for gitgate.
//!
//! # Responsibilities
//!
//! - Parse the raw argument vector and reject an empty one before any
//!   configuration is read
//! - Load configuration and build the engine context
//! - Hand off to [`crate::engine::dispatch`] with the real process runner
//!   and the standard streams

pub mod args;

pub use args::Cli;

use crate::core::config::Config;
use crate::engine::{self, Context, DispatchError};
use crate::git::SystemRunner;
use anyhow::{Context as _, Result};

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();
    if cli.split().is_none() {
        return Err(DispatchError::Usage.into());
    }

    let config = Config::load().context("failed to load configuration")?;
    if let Some(path) = config.path() {
        tracing::debug!(path = %path.display(), "loaded configuration");
    }
    let ctx = Context::from_config(&config);

    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    engine::dispatch(
        &cli.argv,
        &ctx,
        &SystemRunner::new(),
        &mut stdout.lock(),
        &mut stderr.lock(),
    )?;
    Ok(())
}
