use anyhow::Result;

use super::super::args::ValidateCommand;
use super::helper::finish;
use super::{CommandResult, CommandSummary, ValidateSummary};
use crate::{
    core::AuditContext,
    issues::Issue,
    report::{VALIDATION_REPORT_PREFIX, generated_at, render_validation_report, save_report},
    rules::{check_consistency, check_missing_translations, check_unused_keys},
};

/// Run every catalog check. Missing translations and load errors fail the run.
pub fn validate(cmd: ValidateCommand) -> Result<CommandResult> {
    let ctx = AuditContext::new(&cmd.common)?;
    let catalog = ctx.catalog();

    let missing = check_missing_translations(catalog, ctx.references(), ctx.default_namespace());
    let inconsistent = check_consistency(catalog);
    let unused = check_unused_keys(catalog, ctx.references());
    let load_errors = ctx.load_errors().to_vec();

    let summary = ValidateSummary {
        missing_count: missing.len(),
        load_error_count: load_errors.len(),
        inconsistent_count: inconsistent.len(),
        unused_count: unused.len(),
    };

    let mut issues: Vec<Issue> = Vec::new();
    issues.extend(missing.into_iter().map(Issue::MissingTranslation));
    issues.extend(load_errors.into_iter().map(Issue::LoadError));
    issues.extend(inconsistent.into_iter().map(Issue::InconsistentKey));
    issues.extend(unused.into_iter().map(Issue::UnusedKey));

    let report = render_validation_report(&issues, &generated_at());
    let report_path = save_report(
        &report,
        cmd.common.output.as_deref(),
        VALIDATION_REPORT_PREFIX,
    )?;

    Ok(finish(
        CommandSummary::Validate(summary),
        issues,
        &ctx,
        report_path,
        true,
    ))
}
