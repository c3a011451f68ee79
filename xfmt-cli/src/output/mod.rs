//! Output destination: stdout or a file

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

/// Where reformatted text goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Standard output
    Stdout,
    /// A file, created or truncated
    File(PathBuf),
}

impl OutputTarget {
    /// Target for an optional `--output` path
    pub fn from_arg(path: Option<PathBuf>) -> Self {
        path.map_or(OutputTarget::Stdout, OutputTarget::File)
    }

    /// Open the target for writing
    ///
    /// The formatter buffers its own writes, so the handle is returned raw.
    pub fn open(&self) -> Result<Box<dyn Write>> {
        match self {
            OutputTarget::Stdout => Ok(Box::new(io::stdout().lock())),
            OutputTarget::File(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Ok(Box::new(file))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_from_arg() {
        assert_eq!(OutputTarget::from_arg(None), OutputTarget::Stdout);
        assert_eq!(
            OutputTarget::from_arg(Some(PathBuf::from("out.txt"))),
            OutputTarget::File(PathBuf::from("out.txt"))
        );
    }

    #[test]
    fn test_file_is_truncated() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.txt");
        fs::write(&path, "old contents that are longer").unwrap();

        {
            let mut out = OutputTarget::File(path.clone()).open().unwrap();
            out.write_all(b"new\n").unwrap();
        }
        assert_eq!(fs::read_to_string(&path).unwrap(), "new\n");
    }

    #[test]
    fn test_unwritable_location() {
        let target = OutputTarget::File(PathBuf::from("/nonexistent/dir/out.txt"));
        let err = target.open().err().unwrap();
        assert!(err.to_string().contains("Failed to create output file"));
    }
}
