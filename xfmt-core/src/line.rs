//! Physical lines and their terminators

/// Line ending of a physical line, reproduced verbatim on output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Terminator {
    /// Final line of a stream that does not end in a newline
    #[default]
    None,
    /// `"\n"`
    Lf,
    /// `"\r\n"`
    CrLf,
}

impl Terminator {
    /// Bytes written after each output line
    pub fn as_bytes(self) -> &'static [u8] {
        match self {
            Terminator::None => b"",
            Terminator::Lf => b"\n",
            Terminator::CrLf => b"\r\n",
        }
    }
}

/// One line as read from the input, without its terminator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhysicalLine {
    /// Line bytes, terminator stripped
    pub content: Vec<u8>,
    /// How the line ended
    pub terminator: Terminator,
}

impl PhysicalLine {
    /// Split a raw line (as returned by `read_until(b'\n')`) into content and
    /// terminator
    pub fn from_raw(mut raw: Vec<u8>) -> Self {
        let terminator = if raw.ends_with(b"\r\n") {
            raw.truncate(raw.len() - 2);
            Terminator::CrLf
        } else if raw.ends_with(b"\n") {
            raw.truncate(raw.len() - 1);
            Terminator::Lf
        } else {
            Terminator::None
        };
        Self {
            content: raw,
            terminator,
        }
    }
}
