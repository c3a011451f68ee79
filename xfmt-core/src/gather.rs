//! Paragraph gathering
//!
//! Consecutive physical lines with the same prefix are merged into a single
//! logical line (a paragraph). Merging stops at a prefix change, an empty
//! line, a break prefix, or a line that starts with non-text.

use crate::config::Config;
use crate::error::Result;
use crate::line::Terminator;
use crate::prefix::classify;
use crate::source::LineSource;
use std::io::BufRead;

/// A logical line: the shared prefix plus the merged content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph {
    /// Prefix shared by every merged physical line
    pub prefix: Vec<u8>,
    /// Merged content, one space between the contents of merged lines
    pub content: Vec<u8>,
    /// Terminator of the first merged line
    pub terminator: Terminator,
    /// Number of physical lines merged
    pub line_count: usize,
}

impl Paragraph {
    /// Prefix followed by content, as one logical line
    pub fn text(&self) -> Vec<u8> {
        let mut text = Vec::with_capacity(self.prefix.len() + self.content.len());
        text.extend_from_slice(&self.prefix);
        text.extend_from_slice(&self.content);
        text
    }
}

/// Lazily turns a line source into paragraphs
///
/// Iteration ends when the input is exhausted or after the first error.
#[derive(Debug)]
pub struct Gatherer<'c, R> {
    source: LineSource<R>,
    config: &'c Config,
    failed: bool,
}

impl<'c, R: BufRead> Gatherer<'c, R> {
    /// Create a gatherer over a buffered reader
    pub fn new(reader: R, config: &'c Config) -> Self {
        Self::from_source(LineSource::new(reader), config)
    }

    /// Create a gatherer over an existing line source
    pub fn from_source(source: LineSource<R>, config: &'c Config) -> Self {
        Self {
            source,
            config,
            failed: false,
        }
    }

    /// Number of physical lines read so far
    pub fn lines_read(&self) -> usize {
        self.source.lines_read()
    }

    /// Build the next paragraph, or `None` at end of input
    pub fn next_paragraph(&mut self) -> Result<Option<Paragraph>> {
        // The first line is taken unconditionally.
        let Some(first) = self.source.peek()? else {
            return Ok(None);
        };
        let terminator = first.terminator;
        let (prefix, content) = classify(&first.content);
        let mut paragraph = Paragraph {
            prefix: prefix.to_vec(),
            content: content.to_vec(),
            terminator,
            line_count: 1,
        };
        self.source.consume();

        if paragraph.content.is_empty() {
            return Ok(Some(paragraph));
        }

        while let Some(line) = self.source.peek()? {
            let (prefix, content) = classify(&line.content);
            if !accepts(self.config, &paragraph, prefix, content) {
                break;
            }
            paragraph.content.push(b' ');
            paragraph.content.extend_from_slice(content);
            paragraph.line_count += 1;
            self.source.consume();
        }

        Ok(Some(paragraph))
    }
}

/// Whether a candidate line continues the paragraph under construction
fn accepts(config: &Config, paragraph: &Paragraph, prefix: &[u8], content: &[u8]) -> bool {
    prefix == paragraph.prefix.as_slice()
        && !content.is_empty()
        && !config.starts_with_break(content)
        && !config.non_text.starts_with_non_text(content)
}

impl<R: BufRead> Iterator for Gatherer<'_, R> {
    type Item = Result<Paragraph>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.next_paragraph() {
            Ok(paragraph) => paragraph.map(Ok),
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}

impl<R: BufRead> std::iter::FusedIterator for Gatherer<'_, R> {}
