use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;

use crate::{
    audit::{Audit, ScanConfig},
    cli::{args::CheckArgs, exit_status::ExitStatus},
    config::{Config, load_config},
    core::{ExtensionFilter, ResourceFile},
    report::Reporter,
};

/// Merge command-line values over the config file.
///
/// Flags can only turn options on; values given on the command line replace
/// the ones from the file.
pub fn resolve_scan_config(args: &CheckArgs, file: Config) -> Result<ScanConfig> {
    let source_file = args
        .source_file
        .clone()
        .or(file.source_file)
        .context("Missing SOURCE_FILE: pass it as the first argument or set \"sourceFile\" in the config file")?;
    let project_root = args
        .project_path
        .clone()
        .or(file.project_root)
        .context("Missing PROJECT_PATH: pass it as the second argument or set \"projectRoot\" in the config file")?;
    let min_occurrences = args
        .min_occurrences
        .or(file.min_occurrences)
        .context("Missing MIN_OCCURRENCES: pass it as the third argument or set \"minOccurrences\" in the config file")?;

    let extensions = if args.extensions.is_empty() {
        ExtensionFilter::new(&file.extensions)
    } else {
        ExtensionFilter::new(&args.extensions)
    };

    Ok(ScanConfig {
        source_file,
        project_root,
        extensions,
        min_occurrences,
        report_empty_values: args.log_empty_values || file.report_empty_values,
        verbose: args.verbose || file.verbose,
        strategy: args.strategy.unwrap_or(file.strategy),
    })
}

pub fn check(args: &CheckArgs, cwd: &Path) -> Result<ExitStatus> {
    let loaded = load_config(cwd)?;
    let config = resolve_scan_config(args, loaded.config)?;

    if config.verbose
        && let Some(path) = &loaded.path
    {
        eprintln!("{} using config file {}", "note:".bold().cyan(), path.display());
    }

    config.check_preconditions()?;

    let resource = ResourceFile::load(&config.source_file);
    if !resource.is_readable() && config.verbose {
        eprintln!(
            "{} could not read {}, no keys to check",
            "warning:".bold().yellow(),
            config.source_file.display()
        );
    }

    let mut reporter = Reporter::stdout();
    reporter.banner(&config)?;
    let summary = Audit::new(&config).run_entries(resource.entries(), &mut reporter)?;
    reporter.finish(&summary)?;

    Ok(ExitStatus::from_unused(
        summary.unused_keys,
        args.fail_on_unused,
    ))
}
