/// Position of a key inside a catalog file.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MessageLocation {
    /// Path to the catalog file (e.g., "src/locales/en/common.json").
    pub file_path: String,
    /// Line number (1-indexed).
    pub line: usize,
}

impl MessageLocation {
    pub fn new(file_path: impl Into<String>, line: usize) -> Self {
        Self {
            file_path: file_path.into(),
            line,
        }
    }
}

/// A catalog key with its location and a display form of its value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageContext {
    pub location: MessageLocation,
    /// Dotted key path inside the namespace (e.g., "errors.crash.title").
    pub key: String,
    /// Key segments, exact even when a key name itself contains `.`.
    pub segments: Vec<String>,
    pub value: String,
}

impl MessageContext {
    pub fn new(
        location: MessageLocation,
        key: impl Into<String>,
        segments: Vec<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            location,
            key: key.into(),
            segments,
            value: value.into(),
        }
    }

    pub fn file_path(&self) -> &str {
        &self.location.file_path
    }

    pub fn line(&self) -> usize {
        self.location.line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_location_new() {
        let loc = MessageLocation::new("src/locales/en/common.json", 5);
        assert_eq!(loc.file_path, "src/locales/en/common.json");
        assert_eq!(loc.line, 5);
    }

    #[test]
    fn test_message_context_accessors() {
        let loc = MessageLocation::new("src/locales/en/common.json", 3);
        let ctx = MessageContext::new(
            loc,
            "errors.title",
            vec!["errors".to_string(), "title".to_string()],
            "Error",
        );
        assert_eq!(ctx.file_path(), "src/locales/en/common.json");
        assert_eq!(ctx.line(), 3);
        assert_eq!(ctx.key, "errors.title");
        assert_eq!(ctx.value, "Error");
    }
}
