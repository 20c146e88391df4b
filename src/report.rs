//! Human-readable output.
//!
//! The reporter writes to any [`Write`], stdout in the binary and a buffer in
//! tests. Colors come from `colored` and honor `NO_COLOR`.

use std::io::{self, Write};

use anyhow::Result;
use colored::Colorize;

use crate::audit::{AuditEvent, AuditSink, AuditSummary, ScanConfig};
use crate::core::ExtensionFilter;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

fn times(count: usize) -> &'static str {
    if count > 1 { "times" } else { "time" }
}

/// Describe which files are searched, e.g. `files with extensions m, swift`.
pub fn describe_extensions(filter: &ExtensionFilter) -> String {
    let extensions: Vec<&str> = filter.extensions().collect();
    match extensions.as_slice() {
        [] => "all files".to_string(),
        [single] => format!("files with extension {}", single),
        many => format!("files with extensions {}", many.join(", ")),
    }
}

pub struct Reporter<W: Write> {
    writer: W,
}

impl Reporter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Reporter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Print what is about to be checked.
    pub fn banner(&mut self, config: &ScanConfig) -> Result<()> {
        let w = &mut self.writer;
        writeln!(w, "{}", "loccheck".bold())?;
        writeln!(
            w,
            "Checks whether keys from a strings file are unused in a project."
        )?;
        writeln!(w, "{}", "-".repeat(56))?;
        writeln!(w)?;
        writeln!(w, "Will check keys from file...")?;
        writeln!(w, "  {}", config.source_file.display())?;
        writeln!(
            w,
            "in {} from directory...",
            describe_extensions(&config.extensions)
        )?;
        writeln!(w, "  {}", config.project_root.display())?;
        writeln!(w)?;

        if config.report_empty_values {
            writeln!(w, "{} Empty values will be logged.", "info:".bold().cyan())?;
        }
        if config.verbose {
            writeln!(
                w,
                "{} Verbose mode is enabled: used keys are printed too.",
                "info:".bold().cyan()
            )?;
        }

        writeln!(w, "Running... (this may take a while on large projects)")?;
        writeln!(w)?;
        w.flush()?;
        Ok(())
    }

    /// Print one event as a single line.
    pub fn report(&mut self, event: &AuditEvent) -> Result<()> {
        let w = &mut self.writer;
        match event {
            AuditEvent::EmptyValue { key } => {
                writeln!(
                    w,
                    "{} key '{}' has an empty value.",
                    "warning:".bold().yellow(),
                    key
                )?;
            }
            AuditEvent::Unused { key, count } => {
                writeln!(
                    w,
                    "{} {}",
                    FAILURE_MARK.red(),
                    format!(
                        "key '{}' is unused (found {} {}).",
                        key,
                        count,
                        times(*count)
                    )
                    .red()
                )?;
            }
            AuditEvent::Used { key, count } => {
                writeln!(
                    w,
                    "{} key '{}' is used {} {}.",
                    SUCCESS_MARK.green(),
                    key,
                    count,
                    times(*count)
                )?;
            }
        }
        w.flush()?;
        Ok(())
    }

    /// Print the completion marker.
    pub fn finish(&mut self, summary: &AuditSummary) -> Result<()> {
        let msg = format!(
            "Finished: checked {} {}, {} unused.",
            summary.keys_checked,
            if summary.keys_checked == 1 {
                "key"
            } else {
                "keys"
            },
            summary.unused_keys
        );
        writeln!(self.writer)?;
        writeln!(self.writer, "{} {}", SUCCESS_MARK.green(), msg.green())?;
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> AuditSink for Reporter<W> {
    fn event(&mut self, event: AuditEvent) -> Result<()> {
        self.report(&event)
    }
}
