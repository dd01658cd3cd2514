//! Placeholder type inference for printf-style format strings.
//!
//! Only the conversions that map onto a Swift argument type are recognized:
//!
//! | conversion | type     |
//! |------------|----------|
//! | `%@`       | `String` |
//! | `%f`       | `Float`  |
//! | `%d` `%i` `%u` | `Int` |
//!
//! Everything else is skipped. In particular positional placeholders such as
//! `%1$@` and length modifiers such as `%ld` are not understood: the character
//! after `%` is not a conversion, so the occurrence produces no type.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// The Swift type a placeholder is bound to in the generated enum payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlaceholderType {
    String,
    Float,
    Int,
}

impl PlaceholderType {
    /// Maps a conversion character to its placeholder type, if it has one.
    pub fn from_conversion_char(c: char) -> Option<Self> {
        match c {
            '@' => Some(PlaceholderType::String),
            'f' => Some(PlaceholderType::Float),
            'd' | 'i' | 'u' => Some(PlaceholderType::Int),
            _ => None,
        }
    }

    /// The literal Swift type name used in case payloads.
    pub fn swift_type_name(&self) -> &'static str {
        match self {
            PlaceholderType::String => "String",
            PlaceholderType::Float => "Float",
            PlaceholderType::Int => "Int",
        }
    }
}

impl Display for PlaceholderType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.swift_type_name())
    }
}

/// Infers the ordered placeholder types of a format string.
///
/// `"I give %d apples to %@"` gives `[Int, String]`. A `%` arms the scanner and
/// the next character either completes a placeholder or disarms it, so `%%`
/// and any unrecognized conversion contribute nothing. Never fails.
pub fn infer_types(format: &str) -> Vec<PlaceholderType> {
    let mut types = Vec::new();
    let mut awaiting_conversion = false;

    for c in format.chars() {
        if !awaiting_conversion {
            if c == '%' {
                awaiting_conversion = true;
            }
            continue;
        }

        if let Some(placeholder) = PlaceholderType::from_conversion_char(c) {
            types.push(placeholder);
        }
        awaiting_conversion = false;
    }

    types
}
