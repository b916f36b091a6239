use indexmap::IndexMap;

use crate::{
    issues::{Issue, Report, Rule},
    report::plural,
};

/// Validation report with one section per finding kind.
///
/// Sections follow [`Rule`] order (missing, load errors, inconsistent,
/// unused); findings keep their input order inside a section.
pub fn render_validation_report(issues: &[Issue], generated_at: &str) -> String {
    let mut out = Vec::new();
    out.push("# i18n Validation Report".to_string());
    out.push(String::new());
    out.push(format!("Generated: {}", generated_at));
    out.push(format!(
        "Found {} {}",
        issues.len(),
        plural(issues.len(), "issue", "issues")
    ));
    out.push(String::new());

    if issues.is_empty() {
        out.push("No issues found.".to_string());
        out.push(String::new());
        return out.join("\n");
    }

    let mut by_rule: IndexMap<Rule, Vec<&Issue>> = IndexMap::new();
    for issue in issues {
        by_rule.entry(issue.rule()).or_default().push(issue);
    }
    by_rule.sort_keys();

    for (rule, rule_issues) in by_rule {
        out.push(format!("## {} ({})", rule.title(), rule_issues.len()));
        out.push(String::new());
        for issue in rule_issues {
            match issue.namespace() {
                Some(namespace) => out.push(format!("- **{}**: {}", namespace, issue.message())),
                None => out.push(format!("- {}", issue.message())),
            }
        }
        out.push(String::new());
    }

    out.join("\n")
}
