//! Traits shared by the resource readers.

use std::{
    fs::File,
    io::{BufRead, BufReader, Cursor},
    path::Path,
};

use crate::error::Error;

/// A trait for reading one resource file into ordered key/value pairs.
///
/// # Example
///
/// ```rust,no_run
/// use stringsgen::traits::Parser;
/// let format = stringsgen::formats::strings::Format::read_from("en.lproj/Localizable.strings")?;
/// for (key, value) in format.into_pairs() {
///     println!("{key} = {value}");
/// }
/// Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait Parser {
    /// Parse from any reader.
    fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error>
    where
        Self: Sized;

    /// Parse from file path.
    fn read_from<P: AsRef<Path>>(path: P) -> Result<Self, Error>
    where
        Self: Sized,
    {
        let file = File::open(path).map_err(Error::Io)?;
        let reader = BufReader::new(file);
        Self::from_reader(reader)
    }

    /// Parse from a string.
    fn from_str(s: &str) -> Result<Self, Error>
    where
        Self: Sized,
    {
        Self::from_reader(Cursor::new(s))
    }

    /// Consumes the parsed file, yielding `(key, format string)` pairs in a
    /// stable order.
    fn into_pairs(self) -> Vec<(String, String)>;
}
