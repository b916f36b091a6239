//! Console output for command results.
//!
//! Findings are printed in cargo-style format; each command then prints its
//! own summary. Markdown reports live in [`crate::report`].

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::{
    actions::{Action, DeleteKey},
    commands::{
        CommandResult, CommandSummary, InitSummary, ScanSummary, StatsSummary, UnusedKeysSummary,
        ValidateSummary,
    },
};
use crate::issues::{Issue, Report, ReportLocation, Severity};
use crate::report::stats::advisories;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print issues in cargo-style format.
pub fn report_to<W: Write>(issues: &[Issue], writer: &mut W) {
    if issues.is_empty() {
        return;
    }

    let max_line_width = calculate_max_line_width(issues);

    for issue in issues {
        print_issue(issue, writer, max_line_width);
    }

    print_problem_summary(issues, writer);
}

/// Print a success message when no issues are found.
pub fn print_success_to<W: Write>(source_files: usize, catalog_files: usize, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Checked {} source {}, {} catalog {} - no issues found",
            source_files,
            if source_files == 1 { "file" } else { "files" },
            catalog_files,
            if catalog_files == 1 { "file" } else { "files" }
        )
        .green()
    );
}

pub fn print(result: &CommandResult) {
    print_to(result, &mut io::stdout().lock());
}

pub fn print_to<W: Write>(result: &CommandResult, writer: &mut W) {
    match &result.summary {
        CommandSummary::Scan(summary) => {
            report_to(&result.issues, writer);
            print_scan(summary, writer);
        }
        CommandSummary::Stats(summary) => print_stats(summary, writer),
        CommandSummary::UnusedKeys(summary) => print_unused_keys(summary, writer),
        CommandSummary::Validate(summary) => {
            report_to(&result.issues, writer);
            print_validate(summary, result, writer);
        }
        CommandSummary::Init(summary) => print_init(summary, writer),
    }

    if let Some(path) = &result.report_path {
        let _ = writeln!(writer, "Report saved to {}", path.display().to_string().cyan());
    }
}

// ============================================================
// Internal Functions
// ============================================================

fn print_issue<W: Write>(issue: &Issue, writer: &mut W, max_line_width: usize) {
    let severity = issue.report_severity();
    let severity_str = match severity {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: \"{}\"  {}",
        severity_str,
        issue.message(),
        issue.report_rule().to_string().dimmed().cyan()
    );

    match issue.location() {
        ReportLocation::Source(ctx) => {
            let _ = writeln!(
                writer,
                "  {} {}:{}:{}",
                "-->".blue(),
                ctx.file_path(),
                ctx.line(),
                ctx.col()
            );
            let _ = writeln!(writer, "{:>width$} {}", "", "|".blue(), width = max_line_width);
            let _ = writeln!(
                writer,
                "{:>width$} {} {}",
                ctx.line().to_string().blue(),
                "|".blue(),
                ctx.excerpt,
                width = max_line_width
            );

            // Underline the flagged text when it appears in the excerpt
            let message = issue.message();
            if let Some(pos) = ctx.excerpt.find(&message) {
                let padding = UnicodeWidthStr::width(&ctx.excerpt[..pos]);
                let carets = "^".repeat(UnicodeWidthStr::width(message.as_str()).max(1));
                let carets = match severity {
                    Severity::Error => carets.red(),
                    Severity::Warning => carets.yellow(),
                };
                let _ = writeln!(
                    writer,
                    "{:>width$} {} {:>padding$}{}",
                    "",
                    "|".blue(),
                    "",
                    carets,
                    width = max_line_width,
                    padding = padding
                );
            }
        }
        ReportLocation::Message(ctx) => {
            let _ = writeln!(
                writer,
                "  {} {}:{}",
                "-->".blue(),
                ctx.file_path(),
                ctx.line()
            );
        }
        ReportLocation::File { path } => {
            let _ = writeln!(writer, "  {} {}", "-->".blue(), path);
        }
    }

    if let Some(details) = issue.details() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "note:".bold(),
            details,
            width = max_line_width
        );
    }

    let _ = writeln!(writer); // Empty line between issues
}

fn print_problem_summary<W: Write>(issues: &[Issue], writer: &mut W) {
    let total_errors = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Error)
        .count();
    let total_warnings = issues.len() - total_errors;

    let _ = writeln!(
        writer,
        "{} {} problems ({} {}, {} {})",
        FAILURE_MARK.red(),
        issues.len(),
        total_errors,
        if total_errors == 1 { "error" } else { "errors" }.red(),
        total_warnings,
        if total_warnings == 1 {
            "warning"
        } else {
            "warnings"
        }
        .yellow()
    );
}

fn calculate_max_line_width(issues: &[Issue]) -> usize {
    issues
        .iter()
        .filter_map(|i| match i.location() {
            ReportLocation::Source(ctx) => Some(ctx.line()),
            _ => None,
        })
        .max()
        .map(|n| n.to_string().len())
        .unwrap_or(1)
}

fn print_scan<W: Write>(summary: &ScanSummary, writer: &mut W) {
    if summary.text_count == 0 {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            "No hardcoded text found".green()
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {} text(s) in {} file(s) may need translation.",
            "Found".yellow().bold(),
            summary.text_count,
            summary.file_count
        );
    }
}

fn print_stats<W: Write>(summary: &StatsSummary, writer: &mut W) {
    let stats = &summary.stats;
    let _ = writeln!(
        writer,
        "{} {:.1}% ({} of {} keys used, {} unused, {} missing)",
        "Coverage".bold(),
        stats.coverage,
        stats.used_keys,
        stats.total_keys,
        stats.unused_keys,
        stats.missing_keys
    );

    let ns_width = stats
        .by_namespace
        .iter()
        .map(|ns| ns.namespace.len())
        .max()
        .unwrap_or(0);
    for ns in &stats.by_namespace {
        let _ = writeln!(
            writer,
            "  {:<width$}  {:>6.1}%  {}/{} used, {} unused, {} missing",
            ns.namespace,
            ns.coverage,
            ns.used,
            ns.total,
            ns.unused,
            ns.missing,
            width = ns_width
        );
    }

    let lang_width = stats
        .by_language
        .iter()
        .map(|lang| lang.language.len())
        .max()
        .unwrap_or(0);
    for lang in &stats.by_language {
        let _ = writeln!(
            writer,
            "  {:<width$}  {:>6.1}%  {} keys, {} missing",
            lang.language,
            lang.coverage,
            lang.total,
            lang.missing,
            width = lang_width
        );
    }

    for line in advisories(stats) {
        let _ = writeln!(writer, "{} {}", "hint:".bold().cyan(), line);
    }
}

fn print_unused_keys<W: Write>(summary: &UnusedKeysSummary, writer: &mut W) {
    let total = summary.unused_issues.len();
    if total == 0 {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            "No unused translation keys found".green()
        );
        return;
    }

    match &summary.applied {
        Some(stats) => {
            let _ = writeln!(
                writer,
                "{} {} key(s) in {} file(s) (processed {} key(s)).",
                "Deleted".green().bold(),
                stats.changes_applied,
                stats.files_modified,
                total
            );
            if stats.files_failed > 0 {
                let _ = writeln!(
                    writer,
                    "{} {} file(s) could not be updated",
                    "warning:".bold().yellow(),
                    stats.files_failed
                );
            }
        }
        None => {
            for op in DeleteKey::to_operations(&summary.unused_issues) {
                op.preview_to(writer);
            }
            let _ = writeln!(
                writer,
                "{} {} key(s) in {} file(s).",
                "Would delete".yellow().bold(),
                total,
                summary.file_count
            );
            let _ = writeln!(writer, "Run with {} to delete these keys.", "--execute".cyan());
        }
    }
}

fn print_validate<W: Write>(summary: &ValidateSummary, result: &CommandResult, writer: &mut W) {
    if result.issues.is_empty() {
        print_success_to(
            result.source_files_checked,
            result.catalog_files_checked,
            writer,
        );
        return;
    }

    let _ = writeln!(
        writer,
        "  missing: {}, load errors: {}, inconsistent: {}, unused: {}",
        summary.missing_count,
        summary.load_error_count,
        summary.inconsistent_count,
        summary.unused_count
    );
}

fn print_init<W: Write>(summary: &InitSummary, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Created {}", summary.path).green()
    );
}
