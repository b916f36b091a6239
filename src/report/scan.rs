use indexmap::IndexMap;

use crate::{
    issues::{HardcodedTextIssue, TextKind},
    report::plural,
};

const KINDS: [TextKind; 3] = [TextKind::String, TextKind::Template, TextKind::Markup];

/// Hardcoded text report, grouped by file in first-seen order.
pub fn render_scan_report(issues: &[HardcodedTextIssue], generated_at: &str) -> String {
    let mut out = Vec::new();
    out.push("# i18n Scan Report".to_string());
    out.push(String::new());
    out.push(format!("Generated: {}", generated_at));
    out.push(format!(
        "Found {} {} that may need translation",
        issues.len(),
        plural(issues.len(), "text", "texts")
    ));
    out.push(String::new());

    if issues.is_empty() {
        out.push("No hardcoded text found.".to_string());
        out.push(String::new());
        return out.join("\n");
    }

    out.push("## Summary".to_string());
    out.push(String::new());
    out.push("| Kind | Count |".to_string());
    out.push("|------|-------|".to_string());
    for kind in KINDS {
        let count = issues.iter().filter(|issue| issue.kind == kind).count();
        if count > 0 {
            out.push(format!("| {} | {} |", kind, count));
        }
    }
    out.push(String::new());

    let mut by_file: IndexMap<&str, Vec<&HardcodedTextIssue>> = IndexMap::new();
    for issue in issues {
        by_file
            .entry(issue.context.file_path())
            .or_default()
            .push(issue);
    }

    for (file, file_issues) in by_file {
        out.push(format!("## {}", file));
        out.push(String::new());
        out.push(format!(
            "{} {}",
            file_issues.len(),
            plural(file_issues.len(), "text", "texts")
        ));
        out.push(String::new());
        for issue in file_issues {
            out.push(format!("**Line {}** ({})", issue.context.line(), issue.kind));
            out.push(format!("```{}```", issue.context.excerpt));
            out.push(format!("Text: \"{}\"", issue.text));
            out.push(String::new());
        }
    }

    out.join("\n")
}
