//! Line-oriented access to text files.
//!
//! Reading is a soft operation: a file that cannot be opened or is not valid
//! UTF-8 simply produces no content, so callers see zero lines instead of an
//! error.

use std::{
    fs,
    path::{Path, PathBuf},
};

/// A text file read on demand.
///
/// Each call to [`TextFile::read`] goes back to the filesystem, so the
/// sequence of lines can be restarted any number of times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFile {
    path: PathBuf,
}

impl TextFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole file, or `None` if it is unreadable or not UTF-8.
    ///
    /// A leading byte-order mark is removed.
    pub fn read(&self) -> Option<String> {
        let content = fs::read_to_string(&self.path).ok()?;
        match content.strip_prefix('\u{feff}') {
            Some(rest) => Some(rest.to_string()),
            None => Some(content),
        }
    }
}

/// Split text into lines on `\n`, skipping empty segments.
///
/// A trailing `\r` stays on the line; callers that care trim it.
///
/// ```
/// use loccheck::core::split_lines;
///
/// let lines: Vec<&str> = split_lines("a\n\nb\n").collect();
/// assert_eq!(lines, vec!["a", "b"]);
/// ```
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n').filter(|line| !line.is_empty())
}
