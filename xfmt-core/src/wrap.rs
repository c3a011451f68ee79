//! Greedy word wrapping on ASCII spaces

/// Split `content` into segments of at most `max_width` bytes
///
/// Content that already fits is returned whole, even when empty. Otherwise
/// words (separated by single spaces) are packed greedily; a word longer than
/// `max_width` is emitted on a line of its own, unmodified. Every segment is a
/// sub-slice of `content`.
///
/// ```
/// use xfmt_core::wrap::wrap;
///
/// let segments = wrap(b"hello world", 5);
/// assert_eq!(segments, vec![&b"hello"[..], &b"world"[..]]);
/// ```
pub fn wrap(content: &[u8], max_width: usize) -> Vec<&[u8]> {
    if content.len() <= max_width {
        return vec![content];
    }

    let mut segments = Vec::new();
    // Current non-empty line as a byte range of `content`
    let mut line: Option<(usize, usize)> = None;
    let mut offset = 0;

    for word in content.split(|&b| b == b' ') {
        let start = offset;
        let end = start + word.len();
        offset = end + 1;

        line = match line {
            Some((ls, le)) if le - ls + 1 + word.len() > max_width => {
                segments.push(&content[ls..le]);
                (!word.is_empty()).then_some((start, end))
            }
            Some((ls, _)) => Some((ls, end)),
            None => (!word.is_empty()).then_some((start, end)),
        };
    }

    if let Some((ls, le)) = line {
        segments.push(&content[ls..le]);
    }
    if segments.is_empty() {
        // Only reachable for content made entirely of spaces
        segments.push(&content[..0]);
    }
    segments
}
