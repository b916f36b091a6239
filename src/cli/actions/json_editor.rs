use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use crate::core::{
    MessageValue,
    parsers::json::{parse_catalog, to_pretty_json},
};

/// Read-modify-write editor for one catalog file.
///
/// Keys are addressed by their exact segments, so a key whose own name
/// contains `.` is never confused with a nested path. Output is pretty
/// printed with 2-space indentation and key order preserved.
pub struct CatalogEditor {
    file_path: PathBuf,
    tree: MessageValue,
    removed: usize,
}

impl CatalogEditor {
    /// Open and parse a catalog file for editing.
    pub fn open(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;
        let tree = parse_catalog(&content)
            .with_context(|| format!("Failed to parse file: {}", path.display()))?;
        Ok(Self {
            file_path: path.to_path_buf(),
            tree,
            removed: 0,
        })
    }

    /// Delete the key at `segments`. Returns whether it existed.
    pub fn delete_key<S: AsRef<str>>(&mut self, segments: &[S]) -> bool {
        let removed = self.tree.remove_segments(segments);
        if removed {
            self.removed += 1;
        }
        removed
    }

    /// Number of keys deleted so far.
    pub fn removed(&self) -> usize {
        self.removed
    }

    /// Write the edited catalog back. A no-op when nothing was deleted.
    pub fn save(&self) -> Result<bool> {
        if self.removed == 0 {
            return Ok(false);
        }
        let content = to_pretty_json(&self.tree)?;
        fs::write(&self.file_path, content)
            .with_context(|| format!("Failed to write file: {}", self.file_path.display()))?;
        Ok(true)
    }

    #[cfg(test)]
    pub fn content(&self) -> Result<String> {
        to_pretty_json(&self.tree)
    }
}
