use std::{collections::HashMap, fs, path::Path};

use anyhow::{Context, Result, bail};
use serde_json::Value;

use crate::core::data::{KeyPath, MessageValue};

/// A parsed catalog file: the tree plus the line each leaf key is defined on.
#[derive(Debug, Clone, Default)]
pub struct ParsedCatalog {
    pub tree: MessageValue,
    /// Dotted key → 1-based line number.
    pub key_lines: HashMap<String, usize>,
}

/// Parse catalog text into a tree. The root must be a JSON object.
pub fn parse_catalog(content: &str) -> Result<MessageValue> {
    let json: Value = serde_json::from_str(content).context("Failed to parse JSON")?;
    if !json.is_object() {
        bail!("Catalog root must be a JSON object");
    }
    Ok(MessageValue::from(json))
}

pub fn parse_catalog_str(content: &str) -> Result<ParsedCatalog> {
    let tree = parse_catalog(content)?;
    // Pre-compute line index for O(log n) line lookups
    let line_index = build_line_index(content);
    let key_lines = tree
        .leaf_paths()
        .into_iter()
        .map(|path| {
            let line = find_key_line(content, &path, &line_index);
            (path.dotted, line)
        })
        .collect();
    Ok(ParsedCatalog { tree, key_lines })
}

pub fn parse_catalog_file(path: &Path) -> Result<ParsedCatalog> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;
    parse_catalog_str(&content)
        .with_context(|| format!("Failed to parse catalog file: {}", path.display()))
}

/// Serialize a tree with 2-space indentation and a trailing newline.
pub fn to_pretty_json(tree: &MessageValue) -> Result<String> {
    let value = Value::from(tree);
    let mut content = serde_json::to_string_pretty(&value).context("Failed to serialize JSON")?;
    content.push('\n');
    Ok(content)
}

/// Build an index of line start byte offsets for O(log n) line lookups.
///
/// Line 1 starts at offset 0, line 2 starts after the first '\n', etc.
fn build_line_index(content: &str) -> Vec<usize> {
    let mut offsets = vec![0];
    for (i, c) in content.char_indices() {
        if c == '\n' {
            offsets.push(i + 1);
        }
    }
    offsets
}

/// Find line number for a byte offset using binary search. Returns 1-based line.
fn offset_to_line(line_index: &[usize], offset: usize) -> usize {
    match line_index.binary_search(&offset) {
        Ok(line) => line + 1,
        Err(line) => line,
    }
}

/// Find the line where a key path is defined.
///
/// Searches for each segment in sequence so that `auth.title` finds the
/// `"title"` after `"auth"` rather than an earlier `"title"` elsewhere.
/// A match only counts when followed by `:`, so values that happen to
/// contain the same text are skipped.
fn find_key_line(content: &str, path: &KeyPath, line_index: &[usize]) -> usize {
    let mut search_start = 0;
    for segment in &path.segments {
        let pattern = format!("\"{}\"", segment);
        let remaining = &content[search_start..];

        let mut pos = 0;
        let mut found = false;
        while let Some(rel_pos) = remaining[pos..].find(&pattern) {
            let abs_pos = pos + rel_pos;
            let after_pattern = abs_pos + pattern.len();

            if remaining[after_pattern..].trim_start().starts_with(':') {
                search_start += after_pattern;
                found = true;
                break;
            }
            pos = abs_pos + 1;
        }

        if !found {
            break;
        }
    }

    if search_start > 0 {
        offset_to_line(line_index, search_start)
    } else {
        1
    }
}
