//! Markdown report generation.
//!
//! Renderers are pure: they take the findings and a caller-provided
//! timestamp, so identical input always produces identical text. Only
//! [`save_report`] touches the filesystem.
//!
//! ## Module Structure
//!
//! - `scan`: Hardcoded text, grouped by file
//! - `stats`: Coverage statistics, by namespace and by language
//! - `unused`: Unused keys, by file and by namespace
//! - `validation`: All findings, grouped by kind

pub mod scan;
pub mod stats;
pub mod unused;
pub mod validation;

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

pub use scan::render_scan_report;
pub use stats::render_stats_report;
pub use unused::render_unused_report;
pub use validation::render_validation_report;

pub const SCAN_REPORT_PREFIX: &str = "i18n-scan-report";
pub const STATS_REPORT_PREFIX: &str = "i18n-stats-report";
pub const UNUSED_REPORT_PREFIX: &str = "i18n-unused-keys-report";
pub const VALIDATION_REPORT_PREFIX: &str = "i18n-validation-report";

/// Human-readable local time for the report header.
pub fn generated_at() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// `<prefix>-<unix-millis>.md`
pub fn default_report_name(prefix: &str, millis: i64) -> String {
    format!("{}-{}.md", prefix, millis)
}

/// Write a report to `output`, or to a timestamped file in the current directory.
pub fn save_report(content: &str, output: Option<&Path>, prefix: &str) -> Result<PathBuf> {
    let path = match output {
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(default_report_name(
            prefix,
            chrono::Utc::now().timestamp_millis(),
        )),
    };
    fs::write(&path, content)
        .with_context(|| format!("Failed to write report: {}", path.display()))?;
    Ok(path)
}

/// Format a percentage with one decimal place.
pub(crate) fn percent(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Singular or plural noun for a count.
pub(crate) fn plural<'a>(count: usize, singular: &'a str, plural: &'a str) -> &'a str {
    if count == 1 { singular } else { plural }
}
