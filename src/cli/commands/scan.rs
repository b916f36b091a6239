use std::collections::HashSet;

use anyhow::{Result, bail};

use super::super::args::ScanCommand;
use super::helper::finish;
use super::{CommandResult, CommandSummary, ScanSummary};
use crate::{
    core::AuditContext,
    issues::Issue,
    report::{SCAN_REPORT_PREFIX, generated_at, render_scan_report, save_report},
};

pub fn scan(cmd: ScanCommand) -> Result<CommandResult> {
    let mut ctx = AuditContext::new(&cmd.common)?;
    if let Some(min_length) = cmd.min_length {
        if min_length == 0 {
            bail!("--min-length must be at least 1");
        }
        ctx.config.min_length = min_length;
    }

    let hardcoded = ctx.literal_scanner().scan_sources(ctx.sources());
    if ctx.verbose {
        eprintln!(
            "note: scanned {} source file(s), found {} candidate text(s)",
            ctx.sources().len(),
            hardcoded.len()
        );
    }

    let report = render_scan_report(&hardcoded, &generated_at());
    let report_path = save_report(&report, cmd.common.output.as_deref(), SCAN_REPORT_PREFIX)?;

    let file_count = hardcoded
        .iter()
        .map(|issue| issue.context.file_path())
        .collect::<HashSet<_>>()
        .len();

    Ok(finish(
        CommandSummary::Scan(ScanSummary {
            text_count: hardcoded.len(),
            file_count,
        }),
        hardcoded.into_iter().map(Issue::HardcodedText).collect(),
        &ctx,
        report_path,
        false,
    ))
}
