//! Missing translation detection.
//!
//! Every reference must resolve in every configured language.

use crate::{
    core::Catalog,
    issues::MissingTranslationIssue,
    rules::helpers::{References, references_in_namespace},
};

/// Check each language × namespace × attributed reference.
///
/// References attributed to a namespace outside the configured list are not
/// checked. Findings come out languages first, then namespaces, then
/// references in sorted order.
pub fn check_missing_translations(
    catalog: &Catalog,
    references: &References,
    default_namespace: &str,
) -> Vec<MissingTranslationIssue> {
    let mut issues = Vec::new();
    for language in catalog.languages() {
        for namespace in catalog.namespaces() {
            let Some(file) = catalog.get(language, namespace) else {
                continue;
            };
            for (raw, reference) in references_in_namespace(references, namespace, default_namespace)
            {
                if file.tree.resolve(&reference.key).is_none() {
                    issues.push(MissingTranslationIssue {
                        language: language.clone(),
                        namespace: namespace.clone(),
                        reference: raw.to_string(),
                        file_path: file.file_path(),
                    });
                }
            }
        }
    }
    issues
}
