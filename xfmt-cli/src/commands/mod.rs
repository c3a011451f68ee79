//! CLI command implementations

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod format;
pub mod generate_config;
pub mod validate;

/// Top-level command line
///
/// Without a subcommand, `xfmt` behaves like `xfmt format`: it reads stdin
/// and writes the reformatted text to stdout.
#[derive(Debug, Parser)]
#[command(
    name = "xfmt",
    version,
    about = "Reflow text to a maximum width, keeping indentation and comment markers",
    long_about = None,
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Formatting options used when no subcommand is given
    #[command(flatten)]
    pub format: format::FormatArgs,
}

impl Cli {
    /// Dispatch to the selected command
    pub fn run(self) -> Result<()> {
        match self.command {
            Some(Commands::Format(args)) => args.execute(),
            Some(Commands::GenerateConfig(args)) => args.execute(),
            Some(Commands::Validate(args)) => args.execute(),
            None => self.format.execute(),
        }
    }
}

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Reformat text (the default when no subcommand is given)
    Format(format::FormatArgs),

    /// Write a commented configuration file template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// Check a configuration file and print the effective settings
    Validate(validate::ValidateArgs),
}
