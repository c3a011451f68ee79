//! Formatter: drives the gather/wrap pipeline from a reader to a writer

use crate::{
    config::Config,
    error::{FormatError, Result},
    gather::{Gatherer, Paragraph},
    line::Terminator,
    wrap::wrap,
};
use std::io::{BufRead, BufReader, BufWriter, Read, Write};

/// Counters collected during a formatting run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormatStats {
    /// Physical lines read from the input
    pub lines_read: usize,
    /// Paragraphs gathered
    pub paragraphs: usize,
    /// Physical lines written to the output
    pub lines_written: usize,
    /// The last line written carried no terminator
    pub unterminated: bool,
}

/// Reflows text according to a validated configuration
#[derive(Debug, Clone)]
pub struct Formatter {
    config: Config,
}

impl Formatter {
    /// Create a formatter, rejecting an unusable configuration up front
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration this formatter runs with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Read text from `reader` and write the reformatted text to `writer`
    ///
    /// Both ends are buffered internally. The first read or write failure
    /// aborts the run; output written before it is not rolled back.
    pub fn format<R: Read, W: Write>(&self, reader: R, writer: W) -> Result<FormatStats> {
        self.format_buffered(BufReader::new(reader), BufWriter::new(writer))
    }

    /// Like [`Formatter::format`], for a reader that is already buffered
    pub fn format_buffered<R: BufRead, W: Write>(
        &self,
        reader: R,
        mut writer: W,
    ) -> Result<FormatStats> {
        let mut stats = FormatStats::default();
        let mut gatherer = Gatherer::new(reader, &self.config);

        while let Some(paragraph) = gatherer.next_paragraph()? {
            stats.paragraphs += 1;
            stats.lines_written += self.write_paragraph(&paragraph, &mut writer)?;
            stats.unterminated = paragraph.terminator == Terminator::None;
        }
        writer.flush().map_err(FormatError::Write)?;

        stats.lines_read = gatherer.lines_read();
        log::debug!(
            "formatted {} lines into {} paragraphs, {} lines written",
            stats.lines_read,
            stats.paragraphs,
            stats.lines_written
        );
        Ok(stats)
    }

    fn write_paragraph<W: Write>(&self, paragraph: &Paragraph, writer: &mut W) -> Result<usize> {
        let segments = wrap(&paragraph.content, self.config.max_width);
        log::trace!(
            "paragraph prefix={:?} merged={} segments={}",
            String::from_utf8_lossy(&paragraph.prefix),
            paragraph.line_count,
            segments.len()
        );

        let terminator = paragraph.terminator.as_bytes();
        for &segment in &segments {
            for part in [paragraph.prefix.as_slice(), segment, terminator] {
                writer.write_all(part).map_err(FormatError::Write)?;
            }
        }
        Ok(segments.len())
    }
}

/// Reformat everything from `reader` into `writer`
pub fn format<R: Read, W: Write>(reader: R, writer: W, config: &Config) -> Result<FormatStats> {
    Formatter::new(config.clone())?.format(reader, writer)
}

/// Reformat a byte slice into a new buffer
pub fn format_bytes(input: &[u8], config: &Config) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(input.len());
    Formatter::new(config.clone())?.format_buffered(input, &mut out)?;
    Ok(out)
}

/// Reformat a string
///
/// Output is valid UTF-8 because segments only ever split at ASCII spaces.
///
/// ```
/// use xfmt_core::{format_str, Config};
///
/// let config = Config::builder().max_width(5).build().unwrap();
/// assert_eq!(format_str("hello world\n", &config).unwrap(), "hello\nworld\n");
/// ```
pub fn format_str(input: &str, config: &Config) -> Result<String> {
    let out = format_bytes(input.as_bytes(), config)?;
    Ok(String::from_utf8_lossy(&out).into_owned())
}
