//! Input source handling
//!
//! The conventional "read lines from these sources" behavior: with no
//! arguments the filter reads standard input, otherwise each named file
//! is read in argument order, concatenated into one line stream.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::PathBuf;

/// Ordered list of line sources for one run
#[derive(Debug)]
pub struct Sources {
    files: Vec<PathBuf>,
}

impl Sources {
    /// Build from CLI arguments; an empty list means stdin
    pub fn from_args(files: Vec<PathBuf>) -> Self {
        Self { files }
    }

    /// True when no files were named and stdin will be read
    pub fn is_stdin(&self) -> bool {
        self.files.is_empty()
    }

    /// Open the sources as one buffered reader, in argument order.
    ///
    /// Every file is opened up front, so a missing source fails the run
    /// before any report is inspected.
    pub fn into_reader(self) -> Result<Box<dyn BufRead>> {
        if self.files.is_empty() {
            return Ok(Box::new(BufReader::new(io::stdin())));
        }

        let mut chained: Box<dyn Read> = Box::new(io::empty());
        for path in &self.files {
            let file = File::open(path)
                .with_context(|| format!("failed to open input list {}", path.display()))?;
            chained = Box::new(chained.chain(file));
        }
        Ok(Box::new(BufReader::new(chained)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_empty_args_means_stdin() {
        let sources = Sources::from_args(Vec::new());
        assert!(sources.is_stdin());
    }

    #[test]
    fn test_named_files_are_not_stdin() {
        let sources = Sources::from_args(vec![PathBuf::from("list.txt")]);
        assert!(!sources.is_stdin());
    }

    #[test]
    fn test_files_concatenate_in_argument_order() {
        let dir = TempDir::new().unwrap();
        let first = dir.path().join("first.txt");
        let second = dir.path().join("second.txt");
        fs::write(&first, "a.xml\nb.xml\n").unwrap();
        fs::write(&second, "c.xml\n").unwrap();

        let mut reader = Sources::from_args(vec![first, second]).into_reader().unwrap();
        let mut lines = String::new();
        reader.read_to_string(&mut lines).unwrap();
        assert_eq!(lines, "a.xml\nb.xml\nc.xml\n");
    }

    #[test]
    fn test_missing_source_fails_up_front() {
        let dir = TempDir::new().unwrap();
        let err = Sources::from_args(vec![dir.path().join("nope.txt")])
            .into_reader()
            .err()
            .unwrap();
        assert!(err.to_string().contains("nope.txt"));
    }
}
