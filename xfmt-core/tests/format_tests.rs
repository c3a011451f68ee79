//! End-to-end formatting tests
//!
//! Every `tests/testdata/NAME.in` is formatted at width 80 with the default
//! break prefixes and compared byte-for-byte with `NAME.out`.

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;
use xfmt_core::{format, format_str, Config, FormatError, NonTextRule};

#[test]
fn test_testdata_fixtures() {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/testdata");
    let config = Config::default();

    let mut checked = 0;
    let mut failures = Vec::new();
    for entry in fs::read_dir(&dir).expect("reading testdata/") {
        let path = entry.unwrap().path();
        if path.extension().and_then(|e| e.to_str()) != Some("in") {
            continue;
        }

        let want = fs::read(path.with_extension("out")).expect("reading expected output");
        let input = fs::File::open(&path).expect("opening input");

        let mut got = Vec::new();
        format(input, &mut got, &config).expect("formatting fixture");
        if got != want {
            failures.push(format!(
                "{}:\ngot:\n{}\nwant:\n{}",
                path.display(),
                String::from_utf8_lossy(&got),
                String::from_utf8_lossy(&want)
            ));
        }
        checked += 1;
    }

    assert!(checked >= 8, "expected fixtures in {}", dir.display());
    assert!(failures.is_empty(), "{}", failures.join("\n\n"));
}

#[test]
fn test_hello_world_width_5() {
    let config = Config::builder().max_width(5).build().unwrap();
    assert_eq!(
        format_str("hello world\n", &config).unwrap(),
        "hello\nworld\n"
    );
}

#[test]
fn test_comment_lines_merge() {
    let config = Config::default();
    assert_eq!(
        format_str("// foo\n// bar baz\n", &config).unwrap(),
        "// foo bar baz\n"
    );
}

#[test]
fn test_dash_item_absorbs_following_text() {
    // "- " is not a comment marker, so both lines share the empty prefix
    let config = Config::default();
    assert_eq!(
        format_str("- item one\nitem two\n", &config).unwrap(),
        "- item one item two\n"
    );
    assert_eq!(
        format_str("- item one\n- item two\n", &config).unwrap(),
        "- item one\n- item two\n"
    );
}

#[test]
fn test_dash_item_without_breaks_or_heuristic() {
    let config = Config::builder()
        .dash_breaks(false)
        .non_text(NonTextRule::Off)
        .build()
        .unwrap();
    assert_eq!(
        format_str("- item one\nitem two\n", &config).unwrap(),
        "- item one item two\n"
    );
    assert_eq!(
        format_str("intro\n- item\n", &config).unwrap(),
        "intro - item\n"
    );
}

#[test]
fn test_break_prefix_holds_without_heuristic() {
    let config = Config::builder()
        .non_text(NonTextRule::Off)
        .build()
        .unwrap();
    assert_eq!(
        format_str("intro\n- item\n* star\n", &config).unwrap(),
        "intro\n- item\n* star\n"
    );
}

#[test]
fn test_custom_break_prefix() {
    let config = Config::builder()
        .break_prefixes(["TODO: "])
        .build()
        .unwrap();
    assert_eq!(
        format_str("fix this\nTODO: later\nand that\n", &config).unwrap(),
        "fix this\nTODO: later and that\n"
    );
}

#[test]
fn test_empty_input() {
    let mut out = Vec::new();
    let stats = format(io::empty(), &mut out, &Config::default()).unwrap();
    assert!(out.is_empty());
    assert_eq!(stats.lines_read, 0);
    assert_eq!(stats.paragraphs, 0);
}

#[test]
fn test_non_utf8_bytes_pass_through() {
    let config = Config::builder().max_width(4).build().unwrap();
    let mut out = Vec::new();
    format(&b"# \xff\xfe ab\n"[..], &mut out, &config).unwrap();
    assert_eq!(out, b"# \xff\xfe\n# ab\n");
}

struct ErrReader;

impl Read for ErrReader {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::Other, "bad reader"))
    }
}

struct ErrWriter;

impl Write for ErrWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::Other, "bad writer"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::Other, "bad writer"))
    }
}

/// Hands out its data, then fails instead of reporting end of stream
struct TruncatedReader<'a> {
    data: &'a [u8],
}

impl Read for TruncatedReader<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.data.is_empty() {
            return Err(io::Error::new(io::ErrorKind::ConnectionReset, "reset"));
        }
        let n = buf.len().min(self.data.len());
        buf[..n].copy_from_slice(&self.data[..n]);
        self.data = &self.data[n..];
        Ok(n)
    }
}

#[test]
fn test_failing_reader() {
    let mut out = Vec::new();
    let err = format(ErrReader, &mut out, &Config::default()).unwrap_err();
    assert!(matches!(err, FormatError::Read(_)));
    assert!(out.is_empty());
    assert_eq!(err.to_string(), "read: bad reader");
}

#[test]
fn test_failing_writer() {
    let err = format(&b"test"[..], ErrWriter, &Config::default()).unwrap_err();
    assert!(matches!(err, FormatError::Write(_)));
}

#[test]
fn test_reader_failing_mid_stream() {
    let reader = TruncatedReader {
        data: b"first paragraph\n\nsecond",
    };
    let err = format(reader, io::sink(), &Config::default()).unwrap_err();
    assert!(err.is_read());
}

#[test]
fn test_zero_width_is_a_config_error() {
    let config = Config {
        max_width: 0,
        ..Config::default()
    };
    let err = format_str("anything", &config).unwrap_err();
    assert!(matches!(err, FormatError::Config(_)));
}
