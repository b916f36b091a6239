use std::fmt;

/// Separator between namespace and key body in a reference.
pub const NAMESPACE_SEPARATOR: char = ':';

/// A translation-key reference found in source, split into namespace and key.
///
/// `common:errors.title` → (`common`, `errors.title`).
/// A bare `errors.title` is attributed to the default namespace.
/// Only the first colon separates; later colons belong to the key body.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KeyReference {
    pub namespace: String,
    pub key: String,
}

impl KeyReference {
    pub fn new(namespace: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            key: key.into(),
        }
    }

    pub fn parse(raw: &str, default_namespace: &str) -> Self {
        match raw.split_once(NAMESPACE_SEPARATOR) {
            Some((namespace, key)) => Self::new(namespace, key),
            None => Self::new(default_namespace, raw),
        }
    }

    /// `namespace:key` form.
    pub fn qualified(&self) -> String {
        qualify(&self.namespace, &self.key)
    }
}

impl fmt::Display for KeyReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.namespace, NAMESPACE_SEPARATOR, self.key)
    }
}

pub fn qualify(namespace: &str, key: &str) -> String {
    format!("{}{}{}", namespace, NAMESPACE_SEPARATOR, key)
}

/// Namespace part of a qualified key, or the whole string if unqualified.
pub fn namespace_of(qualified: &str) -> &str {
    qualified
        .split_once(NAMESPACE_SEPARATOR)
        .map(|(ns, _)| ns)
        .unwrap_or(qualified)
}
