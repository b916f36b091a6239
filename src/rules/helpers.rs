use std::collections::BTreeSet;

use crate::core::{KeyReference, qualify};

/// Distinct key references found in source, as written (`save`, `modal:title`).
pub type References = BTreeSet<String>;

/// References attributed to `namespace`, paired with their parsed form.
///
/// A bare reference belongs to `default_namespace`.
pub fn references_in_namespace<'a>(
    references: &'a References,
    namespace: &str,
    default_namespace: &str,
) -> Vec<(&'a str, KeyReference)> {
    references
        .iter()
        .map(|raw| (raw.as_str(), KeyReference::parse(raw, default_namespace)))
        .filter(|(_, reference)| reference.namespace == namespace)
        .collect()
}

/// A catalog key counts as used when the bare key or `namespace:key` is referenced.
pub fn is_key_used(references: &References, namespace: &str, key: &str) -> bool {
    references.contains(key) || references.contains(&qualify(namespace, key))
}
