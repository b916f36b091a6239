//! Cross-language key consistency.
//!
//! The first configured language is the reference. Every other language is
//! compared against it on qualified `namespace:key` sets.

use indexmap::IndexSet;

use crate::{
    core::{Catalog, namespace_of, qualify},
    issues::{ConsistencySide, InconsistentKeyIssue},
};

pub fn check_consistency(catalog: &Catalog) -> Vec<InconsistentKeyIssue> {
    let Some(reference_language) = catalog.reference_language() else {
        return Vec::new();
    };
    let reference_keys = qualified_keys(catalog, reference_language);

    let mut issues = Vec::new();
    for language in catalog.languages().iter().skip(1) {
        let keys = qualified_keys(catalog, language);

        let issue = |key: &String, side| {
            let namespace = namespace_of(key);
            InconsistentKeyIssue {
                language: language.clone(),
                reference_language: reference_language.to_string(),
                namespace: namespace.to_string(),
                key: key.clone(),
                side,
                file_path: catalog
                    .get(language, namespace)
                    .map(|file| file.file_path())
                    .unwrap_or_default(),
            }
        };

        issues.extend(
            reference_keys
                .iter()
                .filter(|key| !keys.contains(*key))
                .map(|key| issue(key, ConsistencySide::Missing)),
        );
        issues.extend(
            keys.iter()
                .filter(|key| !reference_keys.contains(*key))
                .map(|key| issue(key, ConsistencySide::Extra)),
        );
    }
    issues
}

/// All `namespace:key` entries for a language, in namespace then document order.
fn qualified_keys(catalog: &Catalog, language: &str) -> IndexSet<String> {
    catalog
        .namespaces()
        .iter()
        .filter_map(|namespace| catalog.get(language, namespace))
        .flat_map(|file| {
            file.tree
                .flatten()
                .into_iter()
                .map(move |key| qualify(&file.namespace, &key))
        })
        .collect()
}
