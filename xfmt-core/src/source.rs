//! Line source with one line of lookahead

use crate::error::{FormatError, Result};
use crate::line::PhysicalLine;
use std::io::BufRead;

/// Reads physical lines from a buffered reader, one at a time
///
/// At most one line is held back. `peek` fills the slot if it is empty,
/// `consume` takes the held line out of it.
pub struct LineSource<R> {
    reader: R,
    pending: Option<PhysicalLine>,
    lines_read: usize,
}

impl<R: BufRead> LineSource<R> {
    /// Create a line source over a buffered reader
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: None,
            lines_read: 0,
        }
    }

    /// Look at the next line without consuming it
    ///
    /// Returns `Ok(None)` at a clean end of stream.
    pub fn peek(&mut self) -> Result<Option<&PhysicalLine>> {
        if self.pending.is_none() {
            self.pending = self.read_line()?;
        }
        Ok(self.pending.as_ref())
    }

    /// Take the line returned by the last `peek`
    ///
    /// Returns `None` if nothing is pending.
    pub fn consume(&mut self) -> Option<PhysicalLine> {
        self.pending.take()
    }

    /// Number of physical lines read from the underlying stream so far
    pub fn lines_read(&self) -> usize {
        self.lines_read
    }

    fn read_line(&mut self) -> Result<Option<PhysicalLine>> {
        let mut raw = Vec::new();
        let n = self
            .reader
            .read_until(b'\n', &mut raw)
            .map_err(FormatError::Read)?;
        if n == 0 {
            return Ok(None);
        }
        self.lines_read += 1;
        Ok(Some(PhysicalLine::from_raw(raw)))
    }
}

impl<R> std::fmt::Debug for LineSource<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LineSource")
            .field("pending", &self.pending)
            .field("lines_read", &self.lines_read)
            .finish_non_exhaustive()
    }
}
