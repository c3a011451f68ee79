//! xfmt: reads text from stdin, reformats it and writes it to stdout, wrapping
//! lines and recognizing code comments.

use clap::Parser;
use std::process::ExitCode;
use xfmt_cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("xfmt: {e:#}");
            ExitCode::FAILURE
        }
    }
}
