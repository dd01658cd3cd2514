//! Turning arbitrary resource keys into Swift identifiers.

/// Maps arbitrary text to a valid identifier of the target language.
///
/// Implementations must be deterministic and total: every input, including the
/// empty string, yields a usable identifier.
pub trait IdentifierSanitizer {
    /// Sanitizes `text`. Characters listed in `forbidden` are treated as word
    /// separators even when the target language would otherwise accept them.
    fn sanitize(&self, text: &str, forbidden: &str) -> String;
}

/// Swift words that cannot be used as bare identifiers after capitalization.
const SWIFT_RESERVED: &[&str] = &["Any", "Protocol", "Self", "Type"];

/// The default sanitizer: builds an UpperCamelCase Swift identifier.
///
/// Text is split on every character Swift does not accept in an identifier
/// (plus the `forbidden` ones), the first letter of each part is uppercased
/// and the parts are joined. A leading digit gets a `_` prefix and reserved
/// words are wrapped in backticks.
///
/// ```rust
/// use stringsgen::identifier::{IdentifierSanitizer, SwiftIdentifier};
/// assert_eq!(SwiftIdentifier.sanitize("apples_given", "_"), "ApplesGiven");
/// assert_eq!(SwiftIdentifier.sanitize("alert.title", ""), "AlertTitle");
/// assert_eq!(SwiftIdentifier.sanitize("404-page", "_"), "_404Page");
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SwiftIdentifier;

impl SwiftIdentifier {
    fn is_head(c: char, forbidden: &str) -> bool {
        (c.is_alphabetic() || c == '_') && !forbidden.contains(c)
    }

    fn is_tail(c: char, forbidden: &str) -> bool {
        (c.is_alphanumeric() || c == '_') && !forbidden.contains(c)
    }
}

impl IdentifierSanitizer for SwiftIdentifier {
    fn sanitize(&self, text: &str, forbidden: &str) -> String {
        let mut identifier = String::with_capacity(text.len() + 1);

        for part in text.split(|c: char| !Self::is_tail(c, forbidden)) {
            let mut chars = part.chars();
            if let Some(first) = chars.next() {
                // Only the first letter changes; the rest keeps its casing.
                identifier.extend(first.to_uppercase());
                identifier.push_str(chars.as_str());
            }
        }

        if identifier.is_empty() {
            return String::from("_");
        }

        // Checked after joining: separators in front of a digit are dropped.
        if identifier.chars().next().is_some_and(|c| !Self::is_head(c, forbidden)) {
            identifier.insert(0, '_');
        }

        if SWIFT_RESERVED.contains(&identifier.as_str()) {
            return format!("`{}`", identifier);
        }

        identifier
    }
}
