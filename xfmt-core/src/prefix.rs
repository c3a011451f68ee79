//! Prefix classification
//!
//! A prefix is the leading indentation of a line, optionally followed by a
//! comment marker (`//` or `#`) and the whitespace after it. Everything after
//! the prefix is content.

fn is_blank(b: &u8) -> bool {
    matches!(b, b' ' | b'\t')
}

fn blank_run(s: &[u8]) -> usize {
    s.iter().take_while(|b| is_blank(b)).count()
}

/// Split a line into `(prefix, content)`
///
/// Total over all inputs; the two parts are adjacent, so
/// `prefix.len() + content.len() == line.len()`.
///
/// ```
/// use xfmt_core::prefix::classify;
///
/// assert_eq!(classify(b"    // hello"), (&b"    // "[..], &b"hello"[..]));
/// assert_eq!(classify(b"# note"), (&b"# "[..], &b"note"[..]));
/// assert_eq!(classify(b"plain"), (&b""[..], &b"plain"[..]));
/// ```
pub fn classify(line: &[u8]) -> (&[u8], &[u8]) {
    let mut end = blank_run(line);

    let rest = &line[end..];
    if rest.starts_with(b"//") {
        end += 2;
    } else if rest.starts_with(b"#") {
        end += 1;
    }

    end += blank_run(&line[end..]);
    line.split_at(end)
}
