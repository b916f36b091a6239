use anyhow::Result;

use super::super::args::StatsCommand;
use super::helper::finish;
use super::{CommandResult, CommandSummary, StatsSummary};
use crate::{
    core::AuditContext,
    report::{STATS_REPORT_PREFIX, generated_at, render_stats_report, save_report},
    rules::compute_coverage,
};

pub fn stats(cmd: StatsCommand) -> Result<CommandResult> {
    let ctx = AuditContext::new(&cmd.common)?;

    let stats = compute_coverage(ctx.catalog(), ctx.references(), ctx.default_namespace());

    let report = render_stats_report(&stats, &generated_at());
    let report_path = save_report(&report, cmd.common.output.as_deref(), STATS_REPORT_PREFIX)?;

    Ok(finish(
        CommandSummary::Stats(StatsSummary { stats }),
        Vec::new(),
        &ctx,
        report_path,
        false,
    ))
}
