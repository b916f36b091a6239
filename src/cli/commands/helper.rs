use std::path::PathBuf;

use super::{CommandResult, CommandSummary};
use crate::{
    core::AuditContext,
    issues::{Issue, Severity},
};

pub fn finish(
    summary: CommandSummary,
    mut issues: Vec<Issue>,
    ctx: &AuditContext,
    report_path: PathBuf,
    exit_on_errors: bool,
) -> CommandResult {
    issues.sort();

    let error_count = issues
        .iter()
        .filter(|i| i.severity() == Severity::Error)
        .count();
    let warning_count = issues.len() - error_count;

    CommandResult {
        summary,
        error_count,
        warning_count,
        exit_on_errors,
        issues,
        source_files_checked: ctx.files.len(),
        catalog_files_checked: ctx.catalog_files_checked(),
        report_path: Some(report_path),
    }
}
