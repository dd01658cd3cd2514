#![forbid(unsafe_code)]
//! Typed Swift accessors for localized strings.
//!
//! stringsgen reads flat string tables (Apple `.strings`, CSV or JSON),
//! infers the placeholder types of every format string and renders a Swift
//! enum with one case per key, so app code writes `tr(.ApplesGiven(3, name))`
//! instead of passing raw keys around.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use stringsgen::{EmitOptions, Indentation, L10nEnumBuilder};
//!
//! let mut builder = L10nEnumBuilder::new();
//! builder.parse_file_by_extension("en.lproj/Localizable.strings")?;
//!
//! let options = EmitOptions {
//!     enum_name: "Strings".to_string(),
//!     indentation: Indentation::Tabs,
//! };
//! std::fs::write("Strings.swift", builder.build_checked(&options)?)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Placeholders
//!
//! `%@` becomes `String`, `%f` becomes `Float`, `%d`, `%i` and `%u` become
//! `Int`. Other conversions, `%%` and positional placeholders (`%1$@`) add no
//! payload.

pub mod builder;
pub mod error;
pub mod formats;
pub mod identifier;
pub mod indentation;
pub mod placeholder;
pub mod traits;
pub mod types;

// Re-export most used types for easy consumption
pub use crate::{
    builder::{EmitOptions, L10nEnumBuilder},
    error::Error,
    formats::{FormatType, ResourceSupplier},
    identifier::{IdentifierSanitizer, SwiftIdentifier},
    indentation::Indentation,
    placeholder::{PlaceholderType, infer_types},
    types::Entry,
};
