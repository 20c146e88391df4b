//! Parsing of `Localizable.strings` style resource files.
//!
//! A key/value line looks like `"key" = "value";`. Keys keep their quote
//! characters, so occurrence counting later matches `"key"` and not `key`.
//!
//! Lines that do not follow the grammar (comments, blank lines, section
//! markers, multi-line values) produce no entry. That is normal input, not an
//! error.

use std::path::Path;

use super::text::{TextFile, split_lines};

/// One key extracted from a resource line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceEntry {
    /// The quoted key, quotes included.
    pub key: String,
    /// True when the value is the empty string literal `""`.
    pub has_empty_value: bool,
}

/// Split a line on every `=`, dropping empty pieces.
fn split_on_equals(line: &str) -> Vec<&str> {
    line.split('=').filter(|part| !part.is_empty()).collect()
}

/// Check if a line is a key/value line.
///
/// After trimming, the line must start with `"`, end with `;`, and split into
/// exactly two pieces on `=`. A value that itself contains `=` fails the last
/// check, so `"a" = "b=c";` is not a key/value line.
pub fn is_key_value_line(line: &str) -> bool {
    let line = line.trim();

    if !(line.starts_with('"') && line.ends_with(';')) {
        return false;
    }

    split_on_equals(line).len() == 2
}

/// Returns the quoted key of a key/value line, or `None`.
///
/// ```
/// use loccheck::core::extract_key;
///
/// assert_eq!(extract_key(r#"  "home.title" = "Welcome";"#).as_deref(), Some(r#""home.title""#));
/// assert_eq!(extract_key(r#"// "home.title" = "Welcome";"#), None);
/// ```
pub fn extract_key(line: &str) -> Option<String> {
    parse_entry(line).map(|entry| entry.key)
}

/// Parse a line into a [`ResourceEntry`].
///
/// The key part only has to start and end with `"`, so a lone `"` is a key:
/// `"=";` yields the key `"`.
pub fn parse_entry(line: &str) -> Option<ResourceEntry> {
    if !is_key_value_line(line) {
        return None;
    }

    let parts = split_on_equals(line);
    let [left, right] = parts.as_slice() else {
        return None;
    };

    let key = left.trim();
    if !(key.starts_with('"') && key.ends_with('"')) {
        return None;
    }

    Some(ResourceEntry {
        key: key.to_string(),
        has_empty_value: is_empty_value(right),
    })
}

fn is_empty_value(raw: &str) -> bool {
    let value = raw.trim();
    match value.strip_suffix(';') {
        Some(value) => value.trim() == "\"\"",
        None => false,
    }
}

/// A resource file loaded into memory.
///
/// An unreadable file loads as empty: it yields no entries and the audit
/// simply processes zero keys.
#[derive(Debug, Clone, Default)]
pub struct ResourceFile {
    content: Option<String>,
}

impl ResourceFile {
    pub fn load(path: &Path) -> Self {
        Self {
            content: TextFile::new(path).read(),
        }
    }

    pub fn from_content(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
        }
    }

    /// Whether the file could be read at all.
    pub fn is_readable(&self) -> bool {
        self.content.is_some()
    }

    /// Entries in file order. Call again to start over.
    pub fn entries(&self) -> impl Iterator<Item = ResourceEntry> + '_ {
        split_lines(self.content.as_deref().unwrap_or_default()).filter_map(parse_entry)
    }
}
