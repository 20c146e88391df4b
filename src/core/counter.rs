//! Counting how many lines of a project tree mention a key.
//!
//! The unit is lines: a line that contains the key twice counts once. Matching
//! is a case-sensitive literal substring search.

use std::path::PathBuf;

use anyhow::Result;
use clap::ValueEnum;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::{
    text::{TextFile, split_lines},
    tree::ProjectTree,
};

/// Number of lines in `text` that contain `key`.
///
/// ```
/// use loccheck::core::count_lines_containing;
///
/// assert_eq!(count_lines_containing(r#""k" = "k" + "k""#, r#""k""#), 1);
/// ```
pub fn count_lines_containing(text: &str, key: &str) -> usize {
    split_lines(text).filter(|line| line.contains(key)).count()
}

/// How occurrences are counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CountStrategy {
    /// Walk the whole tree again for every key.
    #[default]
    Rescan,
    /// Read the tree once into memory and answer every key from it.
    Indexed,
}

pub trait OccurrenceCounter {
    /// Count lines containing `key` across the tree.
    ///
    /// Fails only when a directory of the tree cannot be listed.
    fn count(&mut self, key: &str) -> Result<usize>;
}

/// Walks the tree for each key. Unreadable files count as empty.
pub struct RescanCounter {
    tree: ProjectTree,
}

impl RescanCounter {
    pub fn new(tree: ProjectTree) -> Self {
        Self { tree }
    }
}

impl OccurrenceCounter for RescanCounter {
    fn count(&mut self, key: &str) -> Result<usize> {
        let mut found = 0;
        for path in self.tree.files() {
            if let Some(content) = TextFile::new(path?).read() {
                found += count_lines_containing(&content, key);
            }
        }
        Ok(found)
    }
}

/// Reads every file of the tree once, on first use.
pub struct IndexedCounter {
    tree: ProjectTree,
    lines: Option<Vec<String>>,
}

impl IndexedCounter {
    pub fn new(tree: ProjectTree) -> Self {
        Self { tree, lines: None }
    }

    fn build(&self) -> Result<Vec<String>> {
        let paths = self.tree.files().collect::<Result<Vec<PathBuf>>>()?;

        let lines = paths
            .par_iter()
            .filter_map(|path| TextFile::new(path).read())
            .flat_map_iter(|content| {
                split_lines(&content)
                    .map(str::to_string)
                    .collect::<Vec<_>>()
            })
            .collect();

        Ok(lines)
    }

    /// Number of indexed lines, building the index if needed.
    pub fn indexed_lines(&mut self) -> Result<usize> {
        Ok(self.index()?.len())
    }

    fn index(&mut self) -> Result<&[String]> {
        if self.lines.is_none() {
            self.lines = Some(self.build()?);
        }
        Ok(self.lines.as_deref().unwrap_or_default())
    }
}

impl OccurrenceCounter for IndexedCounter {
    fn count(&mut self, key: &str) -> Result<usize> {
        let lines = self.index()?;
        Ok(lines.iter().filter(|line| line.contains(key)).count())
    }
}

/// Build the counter for a strategy.
pub fn counter_for(strategy: CountStrategy, tree: ProjectTree) -> Box<dyn OccurrenceCounter> {
    match strategy {
        CountStrategy::Rescan => Box::new(RescanCounter::new(tree)),
        CountStrategy::Indexed => Box::new(IndexedCounter::new(tree)),
    }
}
