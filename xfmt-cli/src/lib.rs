//! xfmt CLI library
//!
//! Command-line surface for the `xfmt-core` reflow filter: argument parsing,
//! configuration files, and input/output selection.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;

pub use commands::Cli;
pub use error::{CliError, CliResult};
