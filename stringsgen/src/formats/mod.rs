//! Resource readers that supply `(key, format string)` pairs.
//!
//! This module re-exports the reader types and provides the [`FormatType`]
//! enum, which picks a reader for a file, and the [`ResourceSupplier`] trait
//! the builder consumes.

pub mod csv;
pub mod json;
pub mod strings;

use std::{
    fmt::{Display, Formatter},
    path::Path,
    str::FromStr,
};

// Reexporting the formats for easier access
pub use csv::CSVRecord;
pub use json::Format as JsonFormat;
pub use strings::Format as StringsFormat;

use crate::{Error, traits::Parser};

/// Supplies the key/value mapping stored in a resource file.
///
/// Pairs must come back in a stable order: the generated enum lists its cases
/// in exactly this order.
pub trait ResourceSupplier {
    fn load(&self, path: &Path) -> Result<Vec<(String, String)>, Error>;
}

/// All supported resource file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatType {
    /// Apple `.strings`, UTF-8 or UTF-16 with BOM. Pairs in file order.
    Strings,
    /// Two-column `key,value` CSV. Pairs in file order.
    CSV,
    /// Flat JSON object. Pairs sorted by key.
    Json,
}

/// Implements [`std::fmt::Display`] for [`FormatType`].
///
/// # Example
/// ```rust
/// use stringsgen::formats::FormatType;
/// assert_eq!(FormatType::Strings.to_string(), "strings");
/// assert_eq!(FormatType::CSV.to_string(), "csv");
/// assert_eq!(FormatType::Json.to_string(), "json");
/// ```
impl Display for FormatType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            FormatType::Strings => write!(f, "strings"),
            FormatType::CSV => write!(f, "csv"),
            FormatType::Json => write!(f, "json"),
        }
    }
}

/// Accepts `strings`, `csv` and `json`, case-insensitively.
///
/// Returns [`crate::error::Error::UnknownFormat`] for anything else.
impl FromStr for FormatType {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        match s.as_str() {
            "strings" | "apple" => Ok(FormatType::Strings),
            "csv" => Ok(FormatType::CSV),
            "json" => Ok(FormatType::Json),
            other => Err(Error::UnknownFormat(other.to_string())),
        }
    }
}

impl FormatType {
    /// Returns the typical file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            FormatType::Strings => "strings",
            FormatType::CSV => "csv",
            FormatType::Json => "json",
        }
    }

    /// Infers the format from the extension of `path`.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        match path.as_ref().extension().and_then(|s| s.to_str()) {
            Some("strings") => Ok(FormatType::Strings),
            Some("csv") => Ok(FormatType::CSV),
            Some("json") => Ok(FormatType::Json),
            extension => Err(Error::UnsupportedFormat(format!(
                "Unsupported file extension: {:?}.",
                extension
            ))),
        }
    }
}

impl ResourceSupplier for FormatType {
    fn load(&self, path: &Path) -> Result<Vec<(String, String)>, Error> {
        let pairs = match self {
            FormatType::Strings => StringsFormat::read_from(path).map(Parser::into_pairs),
            FormatType::CSV => Vec::<CSVRecord>::read_from(path).map(Parser::into_pairs),
            FormatType::Json => JsonFormat::read_from(path).map(Parser::into_pairs),
        };
        pairs.map_err(|e| Error::resource_format(path, e))
    }
}
