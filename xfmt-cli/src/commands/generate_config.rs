//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use xfmt_core::config::DEFAULT_MAX_WIDTH;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Width written into the template
    #[arg(short, long, value_name = "N", default_value_t = DEFAULT_MAX_WIDTH)]
    pub width: usize,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating xfmt configuration template...");
        println!("  Output file: {}", self.output.display());

        fs::write(&self.output, self.generate_template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the file to adjust width and paragraph breaks");
        println!("2. Validate it:");
        println!("   xfmt validate -c {}", self.output.display());
        println!("3. Use it:");
        println!("   xfmt -c {} < input.txt", self.output.display());

        Ok(())
    }

    /// Generate template configuration content
    fn generate_template(&self) -> String {
        format!(
            r##"# xfmt configuration

[format]
# Maximum width of a line's content, in bytes. The prefix (indentation plus
# an optional "//" or "#" comment marker) does not count toward it.
max_width = {}

# A line whose content starts with one of these never merges into the
# paragraph above it.
break_prefixes = ["- ", "* "]

# Which first characters also start a new paragraph:
#   "ascii"  - any ASCII character that is not a letter (digits, punctuation)
#   "legacy" - like "ascii", but an uppercase "Z" counts as non-text too
#   "off"    - never; only empty lines, prefix changes and break_prefixes
non_text = "ascii"
"##,
            self.width
        )
    }
}
