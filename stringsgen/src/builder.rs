//! Collecting entries and rendering the Swift accessor enum.
//!
//! [`L10nEnumBuilder`] gathers [`Entry`] records in arrival order, either one
//! at a time or from whole resource files, and renders them in one pass:
//!
//! ```rust
//! use stringsgen::{EmitOptions, L10nEnumBuilder};
//!
//! let mut builder = L10nEnumBuilder::new();
//! builder.parse_resource_mapping([
//!     ("greeting", "Hello!"),
//!     ("apples_given", "I give %d apples to %@"),
//! ]);
//! let swift = builder.build(&EmitOptions::default());
//! assert!(swift.contains("case ApplesGiven(Int, String)"));
//! assert!(swift.contains("return L10n.tr(\"apples_given\", p0, p1)"));
//! ```

use std::collections::{HashMap, HashSet};
use std::path::Path;

use indoc::indoc;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::{
    error::Error,
    formats::{FormatType, ResourceSupplier},
    identifier::{IdentifierSanitizer, SwiftIdentifier},
    indentation::Indentation,
    types::Entry,
};

const HEADER: &str = indoc! {"
    // This file is automatically generated by stringsgen.
    // Do not edit it manually, as your changes will be overwritten.

    import Foundation

"};

/// Characters that separate words in resource keys and never survive into a
/// case name.
const KEY_SEPARATORS: &str = "_";

/// Shape of the generated code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmitOptions {
    /// Name of the generated enum, sanitized before use.
    pub enum_name: String,
    pub indentation: Indentation,
}

impl Default for EmitOptions {
    fn default() -> Self {
        EmitOptions {
            enum_name: String::from("L10n"),
            indentation: Indentation::default(),
        }
    }
}

/// Accumulates entries and renders them as a Swift enum.
#[derive(Debug, Clone, Default)]
pub struct L10nEnumBuilder<S = SwiftIdentifier> {
    entries: Vec<Entry>,
    keys: HashSet<String>,
    sanitizer: S,
}

impl L10nEnumBuilder<SwiftIdentifier> {
    /// Creates an empty builder using the Swift identifier rules.
    pub fn new() -> Self {
        L10nEnumBuilder::with_sanitizer(SwiftIdentifier)
    }
}

impl<S: IdentifierSanitizer> L10nEnumBuilder<S> {
    /// Creates an empty builder with a custom identifier sanitizer.
    pub fn with_sanitizer(sanitizer: S) -> Self {
        L10nEnumBuilder {
            entries: Vec::new(),
            keys: HashSet::new(),
            sanitizer,
        }
    }

    /// The collected entries, in insertion order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Appends an entry. Duplicate keys are kept and logged.
    pub fn add_entry(&mut self, entry: Entry) {
        trace!(key = entry.key(), types = ?entry.types(), "adding entry");
        if !self.keys.insert(entry.key().to_string()) {
            warn!(key = entry.key(), "duplicate key, both entries will be generated");
        }
        self.entries.push(entry);
    }

    /// Infers the placeholder types of every pair and appends the entries in
    /// iteration order. Pairs with an empty key are skipped.
    ///
    /// The builder never reorders entries; pass an ordered collection when the
    /// output has to be reproducible.
    ///
    /// Returns the number of entries added.
    pub fn parse_resource_mapping<I, K, V>(&mut self, pairs: I) -> usize
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<str>,
    {
        let mut added = 0;
        for (key, value) in pairs {
            let key = key.into();
            if key.is_empty() {
                warn!("skipping entry with an empty key");
                continue;
            }
            self.add_entry(Entry::from_format(key, value.as_ref()));
            added += 1;
        }
        added
    }

    /// Loads the pairs of `path` through `supplier` and appends them.
    ///
    /// A supplier failure is returned as is; nothing is appended in that case.
    pub fn parse_file<P, R>(&mut self, path: P, supplier: &R) -> Result<usize, Error>
    where
        P: AsRef<Path>,
        R: ResourceSupplier + ?Sized,
    {
        let path = path.as_ref();
        let pairs = supplier.load(path)?;
        let added = self.parse_resource_mapping(pairs);
        debug!(path = %path.display(), entries = added, "parsed resource file");
        Ok(added)
    }

    /// Like [`Self::parse_file`], picking the reader from the file extension.
    pub fn parse_file_by_extension<P: AsRef<Path>>(&mut self, path: P) -> Result<usize, Error> {
        let format = FormatType::from_path(&path)?;
        self.parse_file(path, &format)
    }

    /// The Swift case name generated for `entry`.
    pub fn case_name(&self, entry: &Entry) -> String {
        self.sanitizer.sanitize(entry.key(), KEY_SEPARATORS)
    }

    /// Renders the collected entries.
    ///
    /// Rendering is deterministic: the same entries and options always give
    /// the same text. Keys that sanitize to the same case name produce
    /// duplicate cases; use [`Self::build_checked`] to reject them.
    pub fn build(&self, options: &EmitOptions) -> String {
        let enum_name = self.sanitizer.sanitize(&options.enum_name, "");
        let cases: Vec<String> = self
            .entries
            .iter()
            .map(|entry| self.case_name(entry))
            .collect();
        debug!(enum_name = %enum_name, entries = cases.len(), "rendering enum");

        let mut out = SwiftWriter::new(options.indentation);
        out.raw(HEADER);

        out.line(0, &format!("enum {} {{", enum_name));
        for (entry, case) in self.entries.iter().zip(&cases) {
            let mut line = format!("case {}", case);
            if entry.arity() > 0 {
                let types: Vec<&str> = entry.types().iter().map(|t| t.swift_type_name()).collect();
                line.push_str(&format!("({})", types.join(", ")));
            }
            out.line(1, &line);
        }
        out.line(0, "}");
        out.blank();

        out.line(0, &format!("extension {}: CustomStringConvertible {{", enum_name));
        out.line(1, "var description: String { return self.string }");
        out.blank();
        out.line(1, "var string: String {");
        out.line(2, "switch self {");
        for (entry, case) in self.entries.iter().zip(&cases) {
            let params: Vec<String> = (0..entry.arity()).map(|i| format!("p{}", i)).collect();

            let mut pattern = format!("case .{}", case);
            if !params.is_empty() {
                let bindings: Vec<String> = params.iter().map(|p| format!("let {}", p)).collect();
                pattern.push_str(&format!("({})", bindings.join(", ")));
            }
            pattern.push(':');
            out.line(3, &pattern);

            let mut call = format!("return {}.tr(\"{}\"", enum_name, escape_literal(entry.key()));
            for param in &params {
                call.push_str(", ");
                call.push_str(param);
            }
            call.push(')');
            out.line(4, &call);
        }
        out.line(2, "}");
        out.line(1, "}");
        out.blank();
        out.line(1, "private static func tr(_ key: String, _ args: CVarArg...) -> String {");
        out.line(2, "let format = NSLocalizedString(key, comment: \"\")");
        out.line(2, "return String(format: format, arguments: args)");
        out.line(1, "}");
        out.line(0, "}");
        out.blank();

        out.line(0, &format!("func tr(_ key: {}) -> String {{", enum_name));
        out.line(1, "return key.string");
        out.line(0, "}");

        out.finish()
    }

    /// Renders the collected entries after checking that every key maps to
    /// its own case name.
    pub fn build_checked(&self, options: &EmitOptions) -> Result<String, Error> {
        let mut seen: HashMap<String, &str> = HashMap::with_capacity(self.entries.len());
        for entry in &self.entries {
            let identifier = self.case_name(entry);
            if let Some(first) = seen.get(&identifier) {
                return Err(Error::DuplicateIdentifier {
                    identifier,
                    first: first.to_string(),
                    second: entry.key().to_string(),
                });
            }
            seen.insert(identifier, entry.key());
        }
        Ok(self.build(options))
    }
}

/// Line-oriented text buffer that prefixes lines with the configured
/// indentation.
struct SwiftWriter {
    text: String,
    indentation: Indentation,
}

impl SwiftWriter {
    fn new(indentation: Indentation) -> Self {
        SwiftWriter {
            text: String::new(),
            indentation,
        }
    }

    fn raw(&mut self, text: &str) {
        self.text.push_str(text);
    }

    fn line(&mut self, level: usize, content: &str) {
        self.text.push_str(&self.indentation.at(level));
        self.text.push_str(content);
        self.text.push('\n');
    }

    fn blank(&mut self) {
        self.text.push('\n');
    }

    fn finish(self) -> String {
        self.text
    }
}

/// Escapes `text` for use inside a Swift string literal.
fn escape_literal(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            '\0' => escaped.push_str("\\0"),
            c => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::placeholder::PlaceholderType;

    fn sample_builder() -> L10nEnumBuilder {
        let mut builder = L10nEnumBuilder::new();
        builder.add_entry(Entry::new("greeting", vec![]));
        builder.add_entry(Entry::new(
            "apples_given",
            vec![PlaceholderType::Int, PlaceholderType::String],
        ));
        builder
    }

    #[test]
    fn test_full_output_with_default_options() {
        let expected = indoc! {r#"
            // This file is automatically generated by stringsgen.
            // Do not edit it manually, as your changes will be overwritten.

            import Foundation

            enum L10n {
                case Greeting
                case ApplesGiven(Int, String)
            }

            extension L10n: CustomStringConvertible {
                var description: String { return self.string }

                var string: String {
                    switch self {
                        case .Greeting:
                            return L10n.tr("greeting")
                        case .ApplesGiven(let p0, let p1):
                            return L10n.tr("apples_given", p0, p1)
                    }
                }

                private static func tr(_ key: String, _ args: CVarArg...) -> String {
                    let format = NSLocalizedString(key, comment: "")
                    return String(format: format, arguments: args)
                }
            }

            func tr(_ key: L10n) -> String {
                return key.string
            }
        "#};
        assert_eq!(sample_builder().build(&EmitOptions::default()), expected);
    }

    #[test]
    fn test_tabs_only_change_whitespace() {
        let builder = sample_builder();
        let spaces = builder.build(&EmitOptions::default());
        let tabs = builder.build(&EmitOptions {
            indentation: Indentation::Tabs,
            ..EmitOptions::default()
        });
        assert!(tabs.contains("\n\tcase ApplesGiven(Int, String)\n"));
        assert!(tabs.contains("\n\t\t\t\treturn L10n.tr(\"greeting\")\n"));

        let strip = |text: &str| -> Vec<String> {
            text.lines().map(|line| line.trim_start().to_string()).collect()
        };
        assert_eq!(strip(&spaces), strip(&tabs));
    }

    #[test]
    fn test_custom_space_width() {
        let text = sample_builder().build(&EmitOptions {
            indentation: Indentation::Spaces(2),
            ..EmitOptions::default()
        });
        assert!(text.contains("\n  case Greeting\n"));
        assert!(text.contains("\n      case .Greeting:\n"));
        assert!(text.contains("\n        return L10n.tr(\"greeting\")\n"));
    }

    #[test]
    fn test_enum_name_is_sanitized() {
        let text = sample_builder().build(&EmitOptions {
            enum_name: "my strings".to_string(),
            ..EmitOptions::default()
        });
        assert!(text.contains("enum MyStrings {"));
        assert!(text.contains("extension MyStrings: CustomStringConvertible {"));
        assert!(text.contains("return MyStrings.tr(\"greeting\")"));
        assert!(text.contains("func tr(_ key: MyStrings) -> String {"));
    }

    #[test]
    fn test_empty_builder_renders_skeleton() {
        let text = L10nEnumBuilder::new().build(&EmitOptions::default());
        assert!(text.contains("enum L10n {\n}\n"));
        assert!(text.contains("switch self {\n        }\n"));
        assert!(text.ends_with("func tr(_ key: L10n) -> String {\n    return key.string\n}\n"));
    }

    #[test]
    fn test_key_literal_is_escaped() {
        let mut builder = L10nEnumBuilder::new();
        builder.add_entry(Entry::new("say \"hi\"\\now", vec![]));
        let text = builder.build(&EmitOptions::default());
        assert!(text.contains("case SayHiNow\n"));
        assert!(text.contains(r#"return L10n.tr("say \"hi\"\\now")"#));
    }

    #[test]
    fn test_parse_resource_mapping_keeps_order_and_duplicates() {
        let mut builder = L10nEnumBuilder::new();
        let added = builder.parse_resource_mapping(vec![
            ("zeta", "%@"),
            ("alpha", "%d of %d"),
            ("zeta", "again %f"),
            ("", "ignored"),
        ]);
        assert_eq!(added, 3);
        let keys: Vec<&str> = builder.entries().iter().map(Entry::key).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "zeta"]);
        assert_eq!(builder.entries()[2].types(), &[PlaceholderType::Float]);

        let text = builder.build(&EmitOptions::default());
        assert_eq!(text.matches("    case Zeta(").count(), 2);
    }

    #[test]
    fn test_seen_keys_cover_every_way_of_adding() {
        let mut builder = L10nEnumBuilder::new();
        builder.add_entry(Entry::new("title", vec![]));
        builder.parse_resource_mapping([("title", "%@"), ("subtitle", "x")]);
        builder.add_entry(Entry::from_format("subtitle", "%d"));

        assert_eq!(builder.entries().len(), 4);
        assert_eq!(builder.keys.len(), 2);
        assert!(builder.keys.contains("title"));
        assert!(builder.keys.contains("subtitle"));
    }

    #[test]
    fn test_tr_uses_plain_format_arguments() {
        let text = sample_builder().build(&EmitOptions::default());
        assert!(text.contains("        return String(format: format, arguments: args)\n"));
        assert!(!text.contains("locale:"));
    }

    #[test]
    fn test_build_is_idempotent() {
        let builder = sample_builder();
        let options = EmitOptions::default();
        assert_eq!(builder.build(&options), builder.build(&options));
    }

    #[test]
    fn test_build_checked_rejects_colliding_identifiers() {
        let mut builder = L10nEnumBuilder::new();
        builder.parse_resource_mapping([("apples_given", "%d"), ("apples.given", "%d")]);
        let err = builder.build_checked(&EmitOptions::default()).unwrap_err();
        match err {
            Error::DuplicateIdentifier {
                identifier,
                first,
                second,
            } => {
                assert_eq!(identifier, "ApplesGiven");
                assert_eq!(first, "apples_given");
                assert_eq!(second, "apples.given");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_build_checked_matches_build_without_collisions() {
        let builder = sample_builder();
        let options = EmitOptions::default();
        assert_eq!(builder.build_checked(&options).unwrap(), builder.build(&options));
    }

    #[test]
    fn test_custom_sanitizer_is_used_for_every_identifier() {
        struct Upper;
        impl IdentifierSanitizer for Upper {
            fn sanitize(&self, text: &str, forbidden: &str) -> String {
                text.chars()
                    .filter(|c| !forbidden.contains(*c))
                    .collect::<String>()
                    .to_uppercase()
            }
        }

        let mut builder = L10nEnumBuilder::with_sanitizer(Upper);
        builder.add_entry(Entry::new("a_b", vec![PlaceholderType::Float]));
        let text = builder.build(&EmitOptions::default());
        assert!(text.contains("enum L10N {"));
        assert!(text.contains("case AB(Float)"));
        assert!(text.contains("return L10N.tr(\"a_b\", p0)"));
    }

    #[test]
    fn test_emit_options_deserialize_with_defaults() {
        let options: EmitOptions = serde_json::from_str(r#"{ "indentation": "tabs" }"#).unwrap();
        assert_eq!(options.enum_name, "L10n");
        assert_eq!(options.indentation, Indentation::Tabs);
    }

    #[test]
    fn test_escape_literal() {
        assert_eq!(escape_literal("plain.key"), "plain.key");
        assert_eq!(escape_literal("tab\there"), "tab\\there");
        assert_eq!(escape_literal("a\"b"), "a\\\"b");
    }
}
