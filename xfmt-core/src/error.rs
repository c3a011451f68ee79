//! Error types for the reflow pipeline
//!
//! Reading and writing are the only ways a run can fail once it has started.
//! Malformed input never produces an error; it only changes where paragraphs
//! break.

use thiserror::Error;

/// Configuration rejected before any input is read
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// `max_width` must be at least one byte
    #[error("max width must be greater than 0")]
    ZeroWidth,

    /// An empty break prefix would split every line into its own paragraph
    #[error("break prefix at index {index} is empty")]
    EmptyBreakPrefix {
        /// Position of the offending entry in `break_prefixes`
        index: usize,
    },
}

/// Errors surfaced by a formatting run
#[derive(Error, Debug)]
pub enum FormatError {
    /// The input stream failed with something other than a clean end-of-stream
    #[error("read: {0}")]
    Read(#[source] std::io::Error),

    /// The output stream refused bytes, or failed to flush
    #[error("write: {0}")]
    Write(#[source] std::io::Error),

    /// The configuration handed to the formatter is unusable
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

impl FormatError {
    /// True for failures of the underlying input stream
    pub fn is_read(&self) -> bool {
        matches!(self, FormatError::Read(_))
    }

    /// True for failures of the underlying output stream
    pub fn is_write(&self) -> bool {
        matches!(self, FormatError::Write(_))
    }
}

/// Result type for formatting operations
pub type Result<T> = std::result::Result<T, FormatError>;
