//! git
//!
//! The only doorway to the collaborator executable.
//!
//! # Architecture
//!
//! gitgate never reads repository files or links a git library. Every
//! interaction is a child process started through [`ProcessRunner`]:
//!
//! - [`process`] - The runner trait and the real [`SystemRunner`]
//! - [`interface`] - Repository context queries ([`Git`])
//! - [`mock`] - Scripted runner for tests
//!
//! # Invariants
//!
//! - Context queries are read-only subcommands
//! - A nonzero child exit is data, not a runner error
//! - No other module spawns processes

pub mod interface;
pub mod mock;
pub mod process;

pub use interface::{ContextError, ContextQuery, Git};
pub use process::{ProcessError, ProcessRunner, SystemRunner};
