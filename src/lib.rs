//! gitgate - branch-guarded alias wrapper around git
//!
//! gitgate forwards a short vocabulary of aliases (`co`, `l`, `c`, `op`, ...)
//! to the `git` executable and refuses mutating aliases on protected branches.
//! Anything it does not recognize is passed through to git verbatim.
//!
//! # Architecture
//!
//! - [`cli`] - Argument parsing and the binary entry point
//! - [`engine`] - Dispatch lifecycle and the branch policy gate
//! - [`core`] - Domain types, the alias table, and configuration
//! - [`git`] - Process runner and repository context queries
//! - [`ui`] - Output relay to the standard streams
//!
//! # Invariants
//!
//! 1. Gated aliases never spawn a child process on a protected branch
//! 2. Exactly one collaborator execution per invocation (`update` runs two)
//! 3. Unknown aliases are forwarded, never rejected

pub mod cli;
pub mod core;
pub mod engine;
pub mod git;
pub mod ui;
