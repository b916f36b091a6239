use crate::{
    report::{percent, plural},
    rules::CoverageStats,
};

/// Below this overall coverage the report suggests prioritizing translations.
const LOW_COVERAGE: f64 = 50.0;
/// Below this overall coverage the report calls coverage moderate.
const MODERATE_COVERAGE: f64 = 80.0;

pub fn render_stats_report(stats: &CoverageStats, generated_at: &str) -> String {
    let mut out = Vec::new();
    out.push("# i18n Statistics Report".to_string());
    out.push(String::new());
    out.push(format!("Generated: {}", generated_at));
    out.push(String::new());

    out.push("## Overview".to_string());
    out.push(String::new());
    out.push(format!("- **Total keys**: {}", stats.total_keys));
    out.push(format!("- **Used**: {}", stats.used_keys));
    out.push(format!("- **Unused**: {}", stats.unused_keys));
    out.push(format!("- **Missing**: {}", stats.missing_keys));
    out.push(format!("- **References in source**: {}", stats.references));
    out.push(format!("- **Coverage**: {}", percent(stats.coverage)));
    out.push(String::new());

    out.push("## By Namespace".to_string());
    out.push(String::new());
    out.push("| Namespace | Total | Used | Unused | Missing | Coverage |".to_string());
    out.push("|-----------|-------|------|--------|---------|----------|".to_string());
    for ns in &stats.by_namespace {
        out.push(format!(
            "| {} | {} | {} | {} | {} | {} |",
            ns.namespace,
            ns.total,
            ns.used,
            ns.unused,
            ns.missing,
            percent(ns.coverage)
        ));
    }
    out.push(String::new());

    out.push("## By Language".to_string());
    out.push(String::new());
    out.push("| Language | Total | Used | Missing | Coverage |".to_string());
    out.push("|----------|-------|------|---------|----------|".to_string());
    for lang in &stats.by_language {
        out.push(format!(
            "| {} | {} | {} | {} | {} |",
            lang.language,
            lang.total,
            lang.used,
            lang.missing,
            percent(lang.coverage)
        ));
    }
    out.push(String::new());

    out.push("## Recommendations".to_string());
    out.push(String::new());
    out.extend(advisories(stats).into_iter().map(|line| format!("- {}", line)));
    out.push(String::new());

    out.join("\n")
}

/// Advice lines derived from the statistics.
pub fn advisories(stats: &CoverageStats) -> Vec<String> {
    let mut lines = Vec::new();
    if stats.coverage < LOW_COVERAGE {
        lines.push("Coverage is low: translate the most used components first.".to_string());
    } else if stats.coverage < MODERATE_COVERAGE {
        lines.push("Coverage is moderate: keep filling in translations.".to_string());
    } else {
        lines.push("Coverage is good: review translations regularly.".to_string());
    }

    if stats.unused_keys > 0 {
        lines.push(format!(
            "Found {} unused {}: clean them up with `i18n-audit unused-keys`.",
            stats.unused_keys,
            plural(stats.unused_keys, "key", "keys")
        ));
    }

    let missing = stats.languages_with_missing();
    if !missing.is_empty() {
        lines.push(format!(
            "Languages with missing translations: {}",
            missing.join(", ")
        ));
    }
    lines
}
