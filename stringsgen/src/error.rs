//! All error types for the stringsgen crate.
//!
//! Resource readers, format detection and the checked build path return these.
//! Rendering itself ([`crate::builder::L10nEnumBuilder::build`]) never fails.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("unknown format `{0}`")]
    UnknownFormat(String),

    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("CSV parse error: {0}")]
    CsvParse(#[from] csv::Error),

    #[error("syntax error on line {line}: {message}")]
    Syntax { line: usize, message: String },

    /// A resource supplier could not turn a file into a key/value mapping.
    #[error("cannot read resources from {}: {source}", .path.display())]
    ResourceFormat {
        path: PathBuf,
        #[source]
        source: Box<Error>,
    },

    #[error("identifier `{identifier}` is generated for both `{first}` and `{second}`")]
    DuplicateIdentifier {
        identifier: String,
        first: String,
        second: String,
    },

    #[error("invalid indentation `{0}` (expected `tabs`, `spaces`, `spaces:N` or `N`)")]
    InvalidIndentation(String),
}

impl Error {
    /// Creates a syntax error for the given 1-based line.
    pub fn syntax(line: usize, message: impl Into<String>) -> Self {
        Error::Syntax {
            line,
            message: message.into(),
        }
    }

    /// Wraps `source` as a resource format failure for `path`.
    ///
    /// Already wrapped errors are returned unchanged so the path is reported once.
    pub fn resource_format(path: impl Into<PathBuf>, source: Error) -> Self {
        match source {
            Error::ResourceFormat { .. } => source,
            other => Error::ResourceFormat {
                path: path.into(),
                source: Box::new(other),
            },
        }
    }
}
