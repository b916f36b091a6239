use std::process::ExitCode;

use super::commands::CommandResult;

/// Exit status for CLI commands.
///
/// - `Success` (0): Command completed, nothing that fails the run was found
/// - `Failure` (1): Command completed but found blocking issues (validate only)
/// - `Error` (1): Command failed (config error, unreadable source root, ...)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed, nothing that fails the run was found.
    Success,
    /// Command completed but found blocking issues.
    Failure,
    /// Command failed due to a processing error.
    Error,
}

impl ExitStatus {
    pub fn from_result(result: &CommandResult) -> Self {
        if result.exit_on_errors && result.error_count > 0 {
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
            ExitStatus::Failure | ExitStatus::Error => ExitCode::from(1),
        }
    }
}
