//! Action trait definition.
//!
//! Actions convert Issues into Operations. Each Action can be implemented
//! for multiple Issue types, providing type-safe handling.

use std::path::Path;

use anyhow::Result;
use colored::Colorize;
use indexmap::IndexMap;

use super::{json_editor::CatalogEditor, operation::Operation};

/// Statistics from running an action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionStats {
    /// Number of operations processed.
    pub processed: usize,
    /// Number of operations whose target no longer existed.
    pub skipped: usize,
    /// Number of changes actually applied to files.
    pub changes_applied: usize,
    /// Number of files modified.
    pub files_modified: usize,
    /// Number of files that could not be read, parsed or written.
    pub files_failed: usize,
}

/// Action trait - converts Issues into Operations and executes them.
///
/// Dry runs call [`Action::to_operations`] and render each operation with
/// [`Operation::preview_to`]; `--execute` calls [`Action::run`].
pub trait Action<I> {
    /// Convert issues to low-level operations.
    ///
    /// This is the only method that must be implemented.
    fn to_operations(issues: &[I]) -> Vec<Operation>;

    /// Execute the action (modify files).
    fn run(issues: &[I]) -> Result<ActionStats> {
        let ops = Self::to_operations(issues);
        execute_operations(&ops)
    }
}

/// Apply operations file by file, in first-seen file order.
///
/// Each file is fully read, edited and written before the next one is
/// opened. A failure on one file is reported as a warning and counted in
/// `files_failed`; the remaining files are still processed.
fn execute_operations(ops: &[Operation]) -> Result<ActionStats> {
    let mut by_file: IndexMap<&str, Vec<&Operation>> = IndexMap::new();
    for op in ops {
        by_file.entry(op.file_path()).or_default().push(op);
    }

    let mut stats = ActionStats {
        processed: ops.len(),
        ..ActionStats::default()
    };

    for (file_path, file_ops) in by_file {
        match apply_to_file(file_path, &file_ops) {
            Ok(removed) => {
                stats.changes_applied += removed;
                stats.skipped += file_ops.len() - removed;
                if removed > 0 {
                    stats.files_modified += 1;
                }
            }
            Err(err) => {
                eprintln!("{} {:#}", "warning:".bold().yellow(), err);
                stats.files_failed += 1;
                stats.skipped += file_ops.len();
            }
        }
    }

    Ok(stats)
}

fn apply_to_file(file_path: &str, ops: &[&Operation]) -> Result<usize> {
    let mut editor = CatalogEditor::open(Path::new(file_path))?;
    for op in ops {
        match op {
            Operation::DeleteCatalogKey { context } => {
                editor.delete_key(&context.segments);
            }
        }
    }
    editor.save()?;
    Ok(editor.removed())
}
