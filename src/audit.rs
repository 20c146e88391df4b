//! The audit pass: every key of the resource file is counted over the project
//! tree and classified against the threshold.
//!
//! Results are streamed as [`AuditEvent`]s in resource file order, one key at a
//! time, so a long run shows progress as it goes.

use std::path::PathBuf;

use anyhow::{Result, bail};

use crate::core::{
    CountStrategy, ExtensionFilter, ProjectTree, ResourceEntry, ResourceFile, counter_for,
};

/// Everything one run needs. Built once at startup and never changed.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub source_file: PathBuf,
    pub project_root: PathBuf,
    pub extensions: ExtensionFilter,
    /// Keys found this many times or fewer are unused.
    pub min_occurrences: usize,
    pub report_empty_values: bool,
    pub verbose: bool,
    pub strategy: CountStrategy,
}

impl ScanConfig {
    pub fn new(source_file: impl Into<PathBuf>, project_root: impl Into<PathBuf>) -> Self {
        Self {
            source_file: source_file.into(),
            project_root: project_root.into(),
            extensions: ExtensionFilter::all(),
            min_occurrences: 0,
            report_empty_values: false,
            verbose: false,
            strategy: CountStrategy::default(),
        }
    }

    /// Both input paths must exist before anything is scanned.
    pub fn check_preconditions(&self) -> Result<()> {
        if !self.source_file.exists() {
            bail!(
                "File {} does not exist. Could not start.",
                self.source_file.display()
            );
        }
        if !self.project_root.exists() {
            bail!(
                "Directory {} does not exist. Could not start.",
                self.project_root.display()
            );
        }
        Ok(())
    }

    pub fn tree(&self) -> ProjectTree {
        ProjectTree::new(&self.project_root, self.extensions.clone())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Unused(usize),
    Used(usize),
}

impl Verdict {
    pub fn classify(count: usize, threshold: usize) -> Self {
        if count <= threshold {
            Verdict::Unused(count)
        } else {
            Verdict::Used(count)
        }
    }
}

/// Something worth telling the user about a key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuditEvent {
    EmptyValue { key: String },
    Unused { key: String, count: usize },
    Used { key: String, count: usize },
}

/// Receives events as the audit produces them.
pub trait AuditSink {
    fn event(&mut self, event: AuditEvent) -> Result<()>;
}

impl AuditSink for Vec<AuditEvent> {
    fn event(&mut self, event: AuditEvent) -> Result<()> {
        self.push(event);
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AuditSummary {
    pub keys_checked: usize,
    pub unused_keys: usize,
    pub empty_values: usize,
}

pub struct Audit<'a> {
    config: &'a ScanConfig,
}

impl<'a> Audit<'a> {
    pub fn new(config: &'a ScanConfig) -> Self {
        Self { config }
    }

    /// Audit the keys of the configured resource file.
    pub fn run(&self, sink: &mut impl AuditSink) -> Result<AuditSummary> {
        let resource = ResourceFile::load(&self.config.source_file);
        self.run_entries(resource.entries(), sink)
    }

    /// Audit an explicit sequence of entries.
    ///
    /// Stops at the first directory that cannot be listed.
    pub fn run_entries(
        &self,
        entries: impl IntoIterator<Item = ResourceEntry>,
        sink: &mut impl AuditSink,
    ) -> Result<AuditSummary> {
        let config = self.config;
        let mut counter = counter_for(config.strategy, config.tree());
        let mut summary = AuditSummary::default();

        for entry in entries {
            if config.report_empty_values && entry.has_empty_value {
                summary.empty_values += 1;
                sink.event(AuditEvent::EmptyValue {
                    key: entry.key.clone(),
                })?;
            }

            let count = counter.count(&entry.key)?;
            summary.keys_checked += 1;

            match Verdict::classify(count, config.min_occurrences) {
                Verdict::Unused(count) => {
                    summary.unused_keys += 1;
                    sink.event(AuditEvent::Unused {
                        key: entry.key,
                        count,
                    })?;
                }
                Verdict::Used(count) if config.verbose => {
                    sink.event(AuditEvent::Used {
                        key: entry.key,
                        count,
                    })?;
                }
                Verdict::Used(_) => {}
            }
        }

        Ok(summary)
    }
}
