//! JUnit report summary extraction
//!
//! Reads a single XML test report and pulls the aggregate `errors` and
//! `failures` counts off the document's root element. The tag name is not
//! checked: any well-formed document whose root carries those attributes
//! qualifies, which covers both `<testsuite>` and `<testsuites>` shapes.

use quick_xml::events::attributes::Attribute;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while reading a single report document
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("failed to read report {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed XML in {}", path.display())]
    Xml {
        path: PathBuf,
        #[source]
        source: quick_xml::Error,
    },

    #[error("invalid {attr} count {value:?} in {}", path.display())]
    Count {
        path: PathBuf,
        attr: &'static str,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("no root element in {}", path.display())]
    NoRoot { path: PathBuf },
}

/// Aggregate counts from a report's root element
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SuiteSummary {
    /// Value of the root `errors` attribute (None when absent or empty)
    pub errors: Option<u64>,
    /// Value of the root `failures` attribute (None when absent or empty)
    pub failures: Option<u64>,
}

impl SuiteSummary {
    /// Parse the report at `path` and extract the root element's counts.
    ///
    /// The whole document is streamed to end-of-file, so malformed XML
    /// anywhere in the report is an error even though only the root
    /// element's attributes matter for classification.
    pub fn from_file(path: &Path) -> Result<Self, ReportError> {
        let file = File::open(path).map_err(|source| ReportError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut reader = Reader::from_reader(BufReader::new(file));

        let mut buf = Vec::new();
        let mut summary = None;
        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(ref root)) | Ok(Event::Empty(ref root)) if summary.is_none() => {
                    summary = Some(Self::from_root(path, root)?);
                }
                Ok(Event::Eof) => break,
                Ok(_) => {}
                Err(source) => {
                    return Err(ReportError::Xml {
                        path: path.to_path_buf(),
                        source,
                    })
                }
            }
            buf.clear();
        }

        summary.ok_or_else(|| ReportError::NoRoot {
            path: path.to_path_buf(),
        })
    }

    /// A report fails when either count is present and greater than zero
    pub fn is_failing(&self) -> bool {
        self.errors.unwrap_or(0) > 0 || self.failures.unwrap_or(0) > 0
    }

    /// Read the two counts off the root element's attribute list
    fn from_root(path: &Path, root: &BytesStart<'_>) -> Result<Self, ReportError> {
        let mut summary = Self::default();
        for attr in root.attributes() {
            let attr = attr.map_err(|source| ReportError::Xml {
                path: path.to_path_buf(),
                source: source.into(),
            })?;
            match attr.key.as_ref() {
                b"errors" => summary.errors = parse_count(path, "errors", &attr)?,
                b"failures" => summary.failures = parse_count(path, "failures", &attr)?,
                _ => {}
            }
        }
        Ok(summary)
    }
}

/// Convert one attribute value to a count.
///
/// Empty or whitespace-only text counts as absent; any other non-integer
/// text is a conversion error.
fn parse_count(
    path: &Path,
    attr_name: &'static str,
    attr: &Attribute<'_>,
) -> Result<Option<u64>, ReportError> {
    let value = attr.unescape_value().map_err(|source| ReportError::Xml {
        path: path.to_path_buf(),
        source,
    })?;
    let text = value.trim();
    if text.is_empty() {
        return Ok(None);
    }
    let count = text.parse::<u64>().map_err(|source| ReportError::Count {
        path: path.to_path_buf(),
        attr: attr_name,
        value: text.to_string(),
        source,
    })?;
    Ok(Some(count))
}
