use std::process::ExitCode;

/// Process exit status.
///
/// - `Success` (0): the audit ran to completion
/// - `Failure` (1): unused keys were found and `--fail-on-unused` was given
/// - `Error` (2): the audit could not run (missing input, unreadable directory, bad config)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl ExitStatus {
    pub fn from_unused(unused_keys: usize, fail_on_unused: bool) -> Self {
        if fail_on_unused && unused_keys > 0 {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
