//! core
//!
//! Core domain types, the alias table, and configuration for gitgate.
//!
//! # Modules
//!
//! - [`types`] - Repository context and invocation results
//! - [`aliases`] - Static alias table and translation to git argv
//! - [`config`] - Configuration schema and loading
//!
//! # Design Principles
//!
//! - Nothing here spawns processes or touches the repository
//! - The alias table is static data, never mutated at runtime
//! - Translation is deterministic given alias, arguments, and context

pub mod aliases;
pub mod config;
pub mod types;
