//! ui
//!
//! User-facing output.
//!
//! # Modules
//!
//! - [`output`] - Relay of captured output and error reporting
//!
//! # Design
//!
//! Everything the user sees goes through this module. Diagnostics go
//! through `tracing` instead and are off unless `GITGATE_LOG` enables them.

pub mod output;
