//! Lexical extraction from source text.
//!
//! Both scanners work on raw text with regular expressions rather than a
//! parsed syntax tree. Keys built at runtime (`t(prefix + name)`, template
//! interpolation) are never seen; that blind spot is permanent.
//!
//! - `keys`: translation-key references passed to the translation function
//! - `literals`: candidate hardcoded text that may need translating

pub mod keys;
pub mod literals;

use std::collections::BTreeSet;

use anyhow::{Context, Result};
use rayon::prelude::*;

pub use keys::KeyScanner;
pub use literals::LiteralScanner;

/// A source file read into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: String,
    pub content: String,
}

impl SourceFile {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}

/// A source file that could not be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnreadableFile {
    pub path: String,
    pub error: String,
}

pub struct ReadSourcesResult {
    /// In the same (sorted) order as the input set.
    pub sources: Vec<SourceFile>,
    pub unreadable: Vec<UnreadableFile>,
}

/// Read all files in parallel. Failures are returned, not raised.
pub fn read_source_files(files: &BTreeSet<String>) -> ReadSourcesResult {
    let results: Vec<(String, Result<String>)> = files
        .par_iter()
        .map(|path| {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read source file: {}", path));
            (path.clone(), content)
        })
        .collect();

    let mut sources = Vec::with_capacity(results.len());
    let mut unreadable = Vec::new();
    for (path, result) in results {
        match result {
            Ok(content) => sources.push(SourceFile { path, content }),
            Err(e) => unreadable.push(UnreadableFile {
                path,
                error: e.root_cause().to_string(),
            }),
        }
    }

    ReadSourcesResult {
        sources,
        unreadable,
    }
}
