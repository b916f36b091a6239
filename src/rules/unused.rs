//! Unused translation key detection.
//!
//! Detects catalog keys, in every language, that no source reference uses.

use crate::{
    core::Catalog,
    issues::UnusedKeyIssue,
    rules::helpers::{References, is_key_used},
};

/// Findings come out per language, per namespace, in document order.
pub fn check_unused_keys(catalog: &Catalog, references: &References) -> Vec<UnusedKeyIssue> {
    catalog
        .files()
        .flat_map(|file| {
            file.messages()
                .into_iter()
                .filter(move |message| !is_key_used(references, &file.namespace, &message.key))
                .map(move |message| UnusedKeyIssue {
                    language: file.language.clone(),
                    namespace: file.namespace.clone(),
                    context: message,
                })
        })
        .collect()
}
