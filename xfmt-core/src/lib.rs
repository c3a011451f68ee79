//! Prefix-preserving text reflow
//!
//! `xfmt-core` re-wraps paragraphs of text to a maximum width while keeping
//! each line's structural prefix (indentation, and a `//` or `#` comment
//! marker) intact, so wrapped code comments stay valid comments.
//!
//! The pipeline runs line by line with one line of lookahead:
//!
//! - [`source::LineSource`] reads physical lines and their terminators
//! - [`prefix::classify`] splits a line into prefix and content
//! - [`gather::Gatherer`] merges lines with equal prefixes into paragraphs
//! - [`wrap::wrap`] splits paragraph content at spaces to fit the width
//! - [`Formatter`] writes `prefix + segment + terminator` for every segment
//!
//! # Example
//!
//! ```rust
//! use xfmt_core::{format_str, Config};
//!
//! let config = Config::builder().max_width(20).build().unwrap();
//! let input = "// The quick brown fox\n// jumps over the lazy dog.\n";
//! let output = format_str(input, &config).unwrap();
//! assert_eq!(
//!     output,
//!     "// The quick brown fox\n// jumps over the lazy\n// dog.\n"
//! );
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod formatter;
pub mod gather;
pub mod line;
pub mod prefix;
pub mod source;
pub mod wrap;

// Re-export key types
pub use config::{Config, ConfigBuilder, NonTextRule};
pub use error::{ConfigError, FormatError, Result};
pub use formatter::{format, format_bytes, format_str, FormatStats, Formatter};
pub use gather::{Gatherer, Paragraph};
pub use line::{PhysicalLine, Terminator};
