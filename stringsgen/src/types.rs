use serde::Serialize;

use crate::placeholder::{PlaceholderType, infer_types};

/// One localizable key and the placeholder types its format string expects.
///
/// The `types` are ordered as the placeholders appear in the format string.
/// Entries cannot be changed once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    key: String,
    types: Vec<PlaceholderType>,
}

impl Entry {
    /// Creates an entry from already known placeholder types.
    pub fn new(key: impl Into<String>, types: Vec<PlaceholderType>) -> Self {
        Entry {
            key: key.into(),
            types,
        }
    }

    /// Creates an entry by inferring the placeholder types of `format`.
    ///
    /// ```rust
    /// use stringsgen::{Entry, PlaceholderType};
    /// let entry = Entry::from_format("apples_given", "I give %d apples to %@");
    /// assert_eq!(entry.types(), &[PlaceholderType::Int, PlaceholderType::String]);
    /// ```
    pub fn from_format(key: impl Into<String>, format: &str) -> Self {
        Entry::new(key, infer_types(format))
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn types(&self) -> &[PlaceholderType] {
        &self.types
    }

    /// Number of payload components of the generated case.
    pub fn arity(&self) -> usize {
        self.types.len()
    }
}
