//! Key usage and coverage statistics.
//!
//! Per namespace the key universe is the union of keys across languages.
//! A key is used when a reference attributed to its namespace names it
//! (bare references count for the default namespace). Coverage is
//! `used / total × 100`, and 0 when there are no keys.

use std::collections::BTreeSet;

use indexmap::IndexSet;

use crate::{
    core::Catalog,
    rules::helpers::{References, references_in_namespace},
};

#[derive(Debug, Clone, PartialEq)]
pub struct NamespaceStats {
    pub namespace: String,
    /// Distinct keys across all languages.
    pub total: usize,
    pub used: usize,
    pub unused: usize,
    /// Attributed references that resolve in no language.
    pub missing: usize,
    pub coverage: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LanguageStats {
    pub language: String,
    pub total: usize,
    pub used: usize,
    /// Attributed references this language cannot resolve.
    pub missing: usize,
    /// Share of the language's keys not offset by missing references.
    pub coverage: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CoverageStats {
    pub total_keys: usize,
    pub used_keys: usize,
    pub unused_keys: usize,
    pub missing_keys: usize,
    /// Distinct references found in source.
    pub references: usize,
    pub coverage: f64,
    pub by_namespace: Vec<NamespaceStats>,
    pub by_language: Vec<LanguageStats>,
}

impl CoverageStats {
    /// Languages with at least one missing translation, in configured order.
    pub fn languages_with_missing(&self) -> Vec<&str> {
        self.by_language
            .iter()
            .filter(|stats| stats.missing > 0)
            .map(|stats| stats.language.as_str())
            .collect()
    }
}

/// `part / whole × 100`, or 0 when `whole` is 0.
pub fn coverage_percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 * 100.0 / whole as f64
    }
}

pub fn compute_coverage(
    catalog: &Catalog,
    references: &References,
    default_namespace: &str,
) -> CoverageStats {
    let mut by_namespace = Vec::with_capacity(catalog.namespaces().len());
    let mut by_language: Vec<LanguageStats> = catalog
        .languages()
        .iter()
        .map(|language| LanguageStats {
            language: language.clone(),
            total: 0,
            used: 0,
            missing: 0,
            coverage: 0.0,
        })
        .collect();

    for namespace in catalog.namespaces() {
        let attributed = references_in_namespace(references, namespace, default_namespace);
        let attributed_keys: BTreeSet<&str> = attributed
            .iter()
            .map(|(_, reference)| reference.key.as_str())
            .collect();

        let mut union: IndexSet<String> = IndexSet::new();
        for (index, language) in catalog.languages().iter().enumerate() {
            let Some(file) = catalog.get(language, namespace) else {
                continue;
            };
            let keys = file.tree.flatten();
            let stats = &mut by_language[index];
            stats.total += keys.len();
            stats.used += keys
                .iter()
                .filter(|key| attributed_keys.contains(key.as_str()))
                .count();
            stats.missing += attributed
                .iter()
                .filter(|(_, reference)| file.tree.resolve(&reference.key).is_none())
                .count();
            union.extend(keys);
        }

        let total = union.len();
        let used = union
            .iter()
            .filter(|key| attributed_keys.contains(key.as_str()))
            .count();
        let missing = attributed
            .iter()
            .filter(|(_, reference)| {
                catalog
                    .languages()
                    .iter()
                    .filter_map(|language| catalog.tree(language, namespace))
                    .all(|tree| tree.resolve(&reference.key).is_none())
            })
            .count();

        by_namespace.push(NamespaceStats {
            namespace: namespace.clone(),
            total,
            used,
            unused: total - used,
            missing,
            coverage: coverage_percent(used, total),
        });
    }

    for stats in &mut by_language {
        stats.coverage = coverage_percent(stats.total.saturating_sub(stats.missing), stats.total);
    }

    let total_keys = by_namespace.iter().map(|ns| ns.total).sum();
    let used_keys = by_namespace.iter().map(|ns| ns.used).sum();
    CoverageStats {
        total_keys,
        used_keys,
        unused_keys: by_namespace.iter().map(|ns| ns.unused).sum(),
        missing_keys: by_namespace.iter().map(|ns| ns.missing).sum(),
        references: references.len(),
        coverage: coverage_percent(used_keys, total_keys),
        by_namespace,
        by_language,
    }
}
