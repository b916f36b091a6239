use std::path::PathBuf;

use crate::{
    issues::{Issue, UnusedKeyIssue},
    rules::CoverageStats,
};

use super::super::actions::ActionStats;

#[derive(Debug)]
pub enum CommandSummary {
    Scan(ScanSummary),
    Stats(StatsSummary),
    UnusedKeys(UnusedKeysSummary),
    Validate(ValidateSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct ScanSummary {
    pub text_count: usize,
    pub file_count: usize,
}

#[derive(Debug)]
pub struct StatsSummary {
    pub stats: CoverageStats,
}

#[derive(Debug)]
pub struct UnusedKeysSummary {
    pub unused_issues: Vec<UnusedKeyIssue>,
    pub file_count: usize,
    pub is_execute: bool,
    /// Deletion results, present only with `--execute`.
    pub applied: Option<ActionStats>,
}

#[derive(Debug)]
pub struct ValidateSummary {
    pub missing_count: usize,
    pub load_error_count: usize,
    pub inconsistent_count: usize,
    pub unused_count: usize,
}

#[derive(Debug)]
pub struct InitSummary {
    pub path: String,
}

/// Result of running an i18n-audit command
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    pub error_count: usize,
    pub warning_count: usize,
    /// If true, exit code 1 should be returned when error_count > 0.
    /// If false, always exit 0 (findings are informational).
    pub exit_on_errors: bool,
    /// Findings to list in cargo-style output.
    pub issues: Vec<Issue>,
    /// Number of source files that were analyzed.
    pub source_files_checked: usize,
    /// Number of catalog files found on disk.
    pub catalog_files_checked: usize,
    /// Where the Markdown report was written.
    pub report_path: Option<PathBuf>,
}
