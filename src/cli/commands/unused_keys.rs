use std::collections::HashSet;

use anyhow::Result;

use super::super::{
    actions::{Action, DeleteKey},
    args::UnusedKeysCommand,
};
use super::helper::finish;
use super::{CommandResult, CommandSummary, UnusedKeysSummary};
use crate::{
    core::AuditContext,
    issues::Issue,
    report::{UNUSED_REPORT_PREFIX, generated_at, render_unused_report, save_report},
    rules::check_unused_keys,
};

pub fn unused_keys(cmd: UnusedKeysCommand) -> Result<CommandResult> {
    let ctx = AuditContext::new(&cmd.common)?;
    let execute = cmd.execute;

    let unused_issues = check_unused_keys(ctx.catalog(), ctx.references());

    // The report describes what was found, before any deletion.
    let report = render_unused_report(&unused_issues, &generated_at());
    let report_path = save_report(&report, cmd.common.output.as_deref(), UNUSED_REPORT_PREFIX)?;

    let file_count = unused_issues
        .iter()
        .map(|issue| issue.context.file_path())
        .collect::<HashSet<_>>()
        .len();

    let applied = if execute && !unused_issues.is_empty() {
        Some(DeleteKey::run(&unused_issues)?)
    } else {
        None
    };

    let issues = unused_issues
        .iter()
        .cloned()
        .map(Issue::UnusedKey)
        .collect();

    Ok(finish(
        CommandSummary::UnusedKeys(UnusedKeysSummary {
            unused_issues,
            file_count,
            is_execute: execute,
            applied,
        }),
        issues,
        &ctx,
        report_path,
        false,
    ))
}
