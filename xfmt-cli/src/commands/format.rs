//! Format command implementation

use crate::config::CliConfig;
use crate::input::{resolve_patterns, InputSource};
use crate::output::OutputTarget;
use anyhow::{Context, Result};
use clap::Args;
use std::io::Write;
use std::path::PathBuf;
use xfmt_core::{Config, Formatter, NonTextRule};

/// Arguments for the format command
#[derive(Debug, Args)]
pub struct FormatArgs {
    /// Max width of a line, not including the indentation/comment prefix [default: 80]
    #[arg(short, long, value_name = "N", env = "XFMT_WIDTH", value_parser = parse_width)]
    pub width: Option<usize>,

    /// Merge lines that start with a dash ("- ") instead of breaking before them
    #[arg(long)]
    pub dash: bool,

    /// Merge lines that start with an asterisk ("* ") instead of breaking before them
    #[arg(long)]
    pub star: bool,

    /// Which leading characters start a new paragraph [default: ascii]
    #[arg(long, value_enum, value_name = "RULE")]
    pub non_text: Option<NonTextArg>,

    /// Input files or patterns (supports glob; default: stdin)
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Command-line names for [`NonTextRule`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum NonTextArg {
    /// Any ASCII character other than a letter starts a new paragraph
    Ascii,
    /// Like ascii, but an uppercase "Z" also starts a new paragraph
    Legacy,
    /// Only empty lines, prefix changes and break prefixes start paragraphs
    Off,
}

impl From<NonTextArg> for NonTextRule {
    fn from(arg: NonTextArg) -> Self {
        match arg {
            NonTextArg::Ascii => NonTextRule::AsciiLetters,
            NonTextArg::Legacy => NonTextRule::Legacy,
            NonTextArg::Off => NonTextRule::Off,
        }
    }
}

fn parse_width(s: &str) -> Result<usize, String> {
    let width: usize = s.parse().map_err(|e| format!("invalid width '{s}': {e}"))?;
    if width == 0 {
        return Err("width must be greater than 0".to_string());
    }
    Ok(width)
}

impl FormatArgs {
    /// Execute the format command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();
        log::debug!("Arguments: {:?}", self);

        let file_config = CliConfig::load(self.config.as_deref())?;
        let config = self.effective_config(file_config.format)?;
        log::info!(
            "Formatting with max width {}, break prefixes {:?}, non-text rule {}",
            config.max_width,
            config.break_prefixes,
            config.non_text.name()
        );
        let formatter = Formatter::new(config)?;

        let sources = self.input_sources()?;
        let mut out = OutputTarget::from_arg(self.output.clone()).open()?;

        let mut unterminated = false;
        for source in &sources {
            let name = source.display_name();
            let reader = source.open()?;
            // Keep the previous file's last line off this file's first line
            if unterminated {
                out.write_all(b"\n").context("Failed to write output")?;
            }
            let stats = formatter
                .format(reader, &mut out)
                .with_context(|| format!("Failed to format {name}"))?;
            unterminated = stats.unterminated;
            log::info!(
                "{name}: {} lines in, {} paragraphs, {} lines out",
                stats.lines_read,
                stats.paragraphs,
                stats.lines_written
            );
        }

        Ok(())
    }

    /// Layer command-line flags over the configuration file settings
    pub fn effective_config(&self, base: Config) -> Result<Config> {
        let mut builder = Config::builder()
            .max_width(self.width.unwrap_or(base.max_width))
            .break_prefixes(base.break_prefixes)
            .non_text(self.non_text.map_or(base.non_text, NonTextRule::from));
        if self.dash {
            builder = builder.dash_breaks(false);
        }
        if self.star {
            builder = builder.star_breaks(false);
        }
        Ok(builder.build()?)
    }

    /// Inputs to format, in order
    pub fn input_sources(&self) -> Result<Vec<InputSource>> {
        if self.input.is_empty() {
            return Ok(vec![InputSource::Stdin]);
        }
        let files = resolve_patterns(&self.input)?;
        Ok(files.into_iter().map(InputSource::File).collect())
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        // A logger may already be installed when several commands run in one process
        let env = env_logger::Env::default().default_filter_or(log_level);
        let _ = env_logger::Builder::from_env(env).try_init();
    }
}
