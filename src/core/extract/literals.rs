use std::sync::LazyLock;

use rayon::prelude::*;
use regex::Regex;

use crate::{
    core::{SourceContext, SourceLocation, extract::SourceFile},
    issues::{HardcodedTextIssue, TextKind},
};

/// Quoted literal, escape-aware. One alternative per quote character.
static QUOTED_LITERAL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"'((?:[^'\\]|\\.)*)'|"((?:[^"\\]|\\.)*)"|`((?:[^`\\]|\\.)*)`"#).unwrap()
});

/// Text between a `>` and the next `<`, excluding braces.
static MARKUP_TEXT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r">([^<>{}\n]+)<").unwrap());

static DIGITS_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]+$").unwrap());
static URL_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^https?://").unwrap());
static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s]+@[^\s]+\.[^\s]+$").unwrap());
/// Case-sensitive: capitalized hyphenated words (`Sign-in`) are kept as text.
static CSS_TOKEN_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-z-]+$").unwrap());
static IDENTIFIER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z_$][a-zA-Z0-9_$]*$").unwrap());

/// Hyphenated lowercase tokens at or above this length are kept.
const CSS_TOKEN_MAX_LEN: usize = 20;
const CONTEXT_BEFORE: usize = 20;
const CONTEXT_AFTER: usize = 50;

/// Line-based heuristic scanner for human-readable literals.
pub struct LiteralScanner {
    min_length: usize,
    /// Substrings marking text that is already translated (`t(`, `useTranslation`).
    translated_markers: Vec<String>,
}

impl LiteralScanner {
    pub fn new(min_length: usize, functions: &[String], hooks: &[String]) -> Self {
        let translated_markers = functions
            .iter()
            .map(|f| format!("{}(", f))
            .chain(hooks.iter().cloned())
            .collect();
        Self {
            min_length,
            translated_markers,
        }
    }

    /// Whether a candidate text looks like something a user would read.
    pub fn is_valid_text(&self, text: &str) -> bool {
        let len = text.chars().count();
        if len < self.min_length {
            return false;
        }
        if DIGITS_REGEX.is_match(text) {
            return false;
        }
        if URL_REGEX.is_match(text) || EMAIL_REGEX.is_match(text) {
            return false;
        }
        if CSS_TOKEN_REGEX.is_match(text) && len < CSS_TOKEN_MAX_LEN {
            return false;
        }
        if IDENTIFIER_REGEX.is_match(text) {
            return false;
        }
        !self
            .translated_markers
            .iter()
            .any(|marker| text.contains(marker.as_str()))
    }

    /// Scan one file, line by line.
    pub fn scan_source(&self, source: &SourceFile) -> Vec<HardcodedTextIssue> {
        let mut issues = Vec::new();
        for (index, line) in source.content.lines().enumerate() {
            if should_skip_line(line) {
                continue;
            }
            self.scan_line(&source.path, index + 1, line, &mut issues);
        }
        issues
    }

    /// Scan all files in parallel; result order follows `sources`.
    pub fn scan_sources(&self, sources: &[SourceFile]) -> Vec<HardcodedTextIssue> {
        sources
            .par_iter()
            .map(|source| self.scan_source(source))
            .collect::<Vec<_>>()
            .into_iter()
            .flatten()
            .collect()
    }

    fn scan_line(
        &self,
        file_path: &str,
        line_number: usize,
        line: &str,
        issues: &mut Vec<HardcodedTextIssue>,
    ) {
        for caps in QUOTED_LITERAL_REGEX.captures_iter(line) {
            let Some(whole) = caps.get(0) else { continue };
            let (text, kind) = match (caps.get(1), caps.get(2), caps.get(3)) {
                (Some(m), _, _) | (_, Some(m), _) => (m.as_str(), TextKind::String),
                (_, _, Some(m)) => (m.as_str(), TextKind::Template),
                _ => continue,
            };
            if self.is_valid_text(text) {
                issues.push(make_issue(file_path, line_number, line, whole.start(), text, kind));
            }
        }

        for caps in MARKUP_TEXT_REGEX.captures_iter(line) {
            let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            let text = inner.as_str().trim();
            if self.is_valid_text(text) {
                issues.push(make_issue(
                    file_path,
                    line_number,
                    line,
                    whole.start(),
                    text,
                    TextKind::Markup,
                ));
            }
        }
    }
}

/// Comment, import/export and debugging lines are never scanned.
pub fn should_skip_line(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.starts_with("//")
        || trimmed.starts_with("/*")
        || trimmed.starts_with('*')
        || trimmed.starts_with("import ")
        || trimmed.starts_with("export ")
        || trimmed.contains("console.")
        || trimmed.contains("debugger")
}

fn make_issue(
    file_path: &str,
    line_number: usize,
    line: &str,
    byte_start: usize,
    text: &str,
    kind: TextKind,
) -> HardcodedTextIssue {
    let char_start = line[..byte_start].chars().count();
    HardcodedTextIssue {
        context: SourceContext::new(
            SourceLocation::new(file_path, line_number, char_start + 1),
            context_window(line, char_start),
        ),
        text: text.to_string(),
        kind,
    }
}

/// Up to 20 characters before and 50 after the match start, trimmed.
fn context_window(line: &str, char_start: usize) -> String {
    let from = char_start.saturating_sub(CONTEXT_BEFORE);
    let to = char_start + CONTEXT_AFTER;
    line.chars()
        .skip(from)
        .take(to - from)
        .collect::<String>()
        .trim()
        .to_string()
}
