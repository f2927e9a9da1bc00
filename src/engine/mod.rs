//! engine
//!
//! Orchestrates one invocation: Validate -> Resolve -> Translate -> Gate ->
//! Execute -> Relay.
//!
//! # Architecture
//!
//! The engine owns no state between invocations. Everything it needs comes
//! in through a [`Context`] (collaborator program, policy gate), a
//! [`crate::git::ProcessRunner`], and the two output streams.
//!
//! # Invariants
//!
//! - Gating happens after translation and before any execution
//! - The repository context is resolved once and passed by reference
//! - Every terminal condition is a [`DispatchError`]
//!
//! # Example
//!
//! ```no_run
//! use gitgate::engine::{dispatch, Context};
//! use gitgate::git::SystemRunner;
//!
//! let argv = vec!["log".to_string(), "-5".to_string()];
//! let (mut out, mut err) = (std::io::stdout(), std::io::stderr());
//! dispatch(&argv, &Context::default(), &SystemRunner::new(), &mut out, &mut err)?;
//! # Ok::<(), gitgate::engine::DispatchError>(())
//! ```

pub mod dispatch;
pub mod gate;

pub use dispatch::{dispatch, DispatchError, USAGE};
pub use gate::{PolicyError, PolicyGate};

use crate::core::config::{Config, DEFAULT_PROGRAM};

/// Execution context for a dispatch.
#[derive(Debug, Clone)]
pub struct Context {
    /// Collaborator executable name or path.
    pub program: String,
    /// Branch policy applied to gated aliases.
    pub gate: PolicyGate,
}

impl Default for Context {
    fn default() -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
            gate: PolicyGate::default(),
        }
    }
}

impl Context {
    /// Build a context from loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        Self {
            program: config.program().to_string(),
            gate: PolicyGate::new(config.protected_branches()),
        }
    }
}
