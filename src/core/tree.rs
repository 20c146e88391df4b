use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use anyhow::{Result, anyhow};
use walkdir::WalkDir;

/// Set of allowed file extensions, lowercase and without the leading dot.
///
/// An empty filter accepts every file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionFilter {
    extensions: BTreeSet<String>,
}

impl ExtensionFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let extensions = extensions
            .into_iter()
            .filter_map(|ext| normalize_extension(ext.as_ref()))
            .collect();
        Self { extensions }
    }

    /// Parse a comma separated list such as `swift,m` or `.swift, .M`.
    pub fn parse(list: &str) -> Self {
        Self::new(list.split(','))
    }

    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }

    pub fn extensions(&self) -> impl Iterator<Item = &str> {
        self.extensions.iter().map(String::as_str)
    }

    /// Whether a file at `path` passes the filter. Extension matching is
    /// case-insensitive.
    pub fn accepts(&self, path: &Path) -> bool {
        if self.extensions.is_empty() {
            return true;
        }
        path.extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .is_some_and(|ext| self.extensions.contains(&ext))
    }
}

fn normalize_extension(raw: &str) -> Option<String> {
    let ext = raw.trim().trim_start_matches('.').to_lowercase();
    (!ext.is_empty()).then_some(ext)
}

/// A directory tree whose files are scanned for keys.
#[derive(Debug, Clone)]
pub struct ProjectTree {
    root: PathBuf,
    filter: ExtensionFilter,
    recursive: bool,
}

impl ProjectTree {
    pub fn new(root: impl Into<PathBuf>, filter: ExtensionFilter) -> Self {
        Self {
            root: root.into(),
            filter,
            recursive: true,
        }
    }

    /// Only list files directly inside the root.
    pub fn non_recursive(mut self) -> Self {
        self.recursive = false;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn filter(&self) -> &ExtensionFilter {
        &self.filter
    }

    /// Walk the tree depth-first, yielding every file that passes the filter.
    ///
    /// Directories are always entered; the filter applies to files only.
    /// A directory that cannot be listed (including a missing root) yields an
    /// `Err` naming it, and the caller is expected to stop there. Symlinks are
    /// followed; symlink loops are skipped.
    pub fn files(&self) -> impl Iterator<Item = Result<PathBuf>> + '_ {
        let mut walker = WalkDir::new(&self.root)
            .follow_links(true)
            .sort_by_file_name();
        if !self.recursive {
            walker = walker.max_depth(1);
        }

        walker.into_iter().filter_map(move |entry| match entry {
            Ok(entry) => {
                if entry.depth() == 0 && !entry.file_type().is_dir() {
                    return Some(Err(anyhow!(
                        "Could not open directory {}: not a directory",
                        entry.path().display()
                    )));
                }
                if entry.file_type().is_dir() {
                    return None;
                }
                let path = entry.into_path();
                self.filter.accepts(&path).then_some(Ok(path))
            }
            Err(err) => {
                if err.loop_ancestor().is_some() {
                    return None;
                }
                let path = err
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| self.root.clone());
                if err.depth() == 0 || path.is_dir() {
                    Some(Err(anyhow!("Could not open directory {}: {}", path.display(), err)))
                } else {
                    // Broken symlink: let the read fail softly later.
                    self.filter.accepts(&path).then_some(Ok(path))
                }
            }
        })
    }
}
