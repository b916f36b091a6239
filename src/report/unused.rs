use indexmap::IndexMap;

use crate::{issues::UnusedKeyIssue, report::plural};

pub fn render_unused_report(issues: &[UnusedKeyIssue], generated_at: &str) -> String {
    let mut out = Vec::new();
    out.push("# i18n Unused Keys Report".to_string());
    out.push(String::new());
    out.push(format!("Generated: {}", generated_at));
    out.push(format!(
        "Found {} unused {}",
        issues.len(),
        plural(issues.len(), "key", "keys")
    ));
    out.push(String::new());

    if issues.is_empty() {
        out.push("No unused translation keys found.".to_string());
        out.push(String::new());
        return out.join("\n");
    }

    let mut by_file: IndexMap<&str, Vec<&UnusedKeyIssue>> = IndexMap::new();
    let mut by_namespace: IndexMap<&str, usize> = IndexMap::new();
    for issue in issues {
        by_file
            .entry(issue.context.file_path())
            .or_default()
            .push(issue);
        *by_namespace.entry(issue.namespace.as_str()).or_default() += 1;
    }

    out.push("## By File".to_string());
    out.push(String::new());
    for (file, file_issues) in by_file {
        out.push(format!("### {}", file));
        out.push(String::new());
        out.push(format!(
            "{} unused {}:",
            file_issues.len(),
            plural(file_issues.len(), "key", "keys")
        ));
        out.push(String::new());
        for issue in file_issues {
            out.push(format!(
                "- `{}` (line {})",
                issue.qualified_key(),
                issue.context.line()
            ));
        }
        out.push(String::new());
    }

    out.push("## By Namespace".to_string());
    out.push(String::new());
    out.push("| Namespace | Unused |".to_string());
    out.push("|-----------|--------|".to_string());
    for (namespace, count) in by_namespace {
        out.push(format!("| {} | {} |", namespace, count));
    }
    out.push(String::new());

    out.push("## Recommendations".to_string());
    out.push(String::new());
    out.push(
        "- Confirm these keys are really unused before deleting them: keys built at runtime are not detected."
            .to_string(),
    );
    out.push("- Review the dry run first, then delete with `--execute`.".to_string());
    out.push("- Run your tests after deleting keys.".to_string());
    out.push(String::new());

    out.join("\n")
}
