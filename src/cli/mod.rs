//! Command-line layer: argument parsing, config merging and exit status.

use std::env;

use anyhow::{Context, Result};

mod args;
mod commands;
mod exit_status;

pub use args::{Arguments, CheckArgs, Command};
pub use commands::check::resolve_scan_config;
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let cwd = env::current_dir().context("Failed to get current directory")?;

    match args.command {
        Some(Command::Init) => commands::init::init(&cwd),
        None => commands::check::check(&args.check, &cwd),
    }
}
