//! Indentation style of the generated code.

use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// How one level of nesting is indented in generated code.
///
/// Parsed from `tabs`, `spaces` (four spaces), `spaces:N` or a bare width `N`.
///
/// ```rust
/// use stringsgen::Indentation;
/// use std::str::FromStr;
/// assert_eq!(Indentation::from_str("spaces:2").unwrap(), Indentation::Spaces(2));
/// assert_eq!(Indentation::from_str("tabs").unwrap(), Indentation::Tabs);
/// assert_eq!(Indentation::Spaces(2).at(3), "      ");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Indentation {
    /// Each level is indented by `width` spaces.
    Spaces(usize),
    /// Each level is indented by one tab.
    Tabs,
}

impl Default for Indentation {
    fn default() -> Self {
        Indentation::Spaces(4)
    }
}

impl Indentation {
    /// The whitespace prefix for the given nesting level.
    pub fn at(&self, level: usize) -> String {
        match self {
            Indentation::Spaces(width) => " ".repeat(width * level),
            Indentation::Tabs => "\t".repeat(level),
        }
    }
}

impl Display for Indentation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Indentation::Spaces(width) => write!(f, "spaces:{}", width),
            Indentation::Tabs => write!(f, "tabs"),
        }
    }
}

impl FromStr for Indentation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        let invalid = || Error::InvalidIndentation(s.to_string());
        match normalized.as_str() {
            "tab" | "tabs" => Ok(Indentation::Tabs),
            "space" | "spaces" => Ok(Indentation::default()),
            other => {
                let width = other
                    .strip_prefix("spaces:")
                    .or_else(|| other.strip_prefix("space:"))
                    .unwrap_or(other);
                width
                    .trim()
                    .parse::<usize>()
                    .map(Indentation::Spaces)
                    .map_err(|_| invalid())
            }
        }
    }
}

impl TryFrom<String> for Indentation {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Indentation::from_str(&value)
    }
}

impl From<Indentation> for String {
    fn from(value: Indentation) -> Self {
        value.to_string()
    }
}
