use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use colored::Colorize;
use glob::{Pattern, glob};
use walkdir::WalkDir;

use crate::config::TEST_FILE_PATTERNS;

/// Patterns without `*` or `?` are treated as literal directory paths.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Result of scanning the source tree.
pub struct ScanResult {
    /// Sorted, so downstream output does not depend on walk order.
    pub files: BTreeSet<String>,
    pub skipped_count: usize,
}

/// Options controlling which files are picked up.
pub struct ScanOptions<'a> {
    pub includes: &'a [String],
    pub ignores: &'a [String],
    pub extensions: &'a [String],
    pub ignore_test_files: bool,
    pub verbose: bool,
}

fn warn_verbose(verbose: bool, message: std::fmt::Arguments<'_>) {
    if verbose {
        eprintln!("{} {}", "warning:".bold().yellow(), message);
    }
}

/// Compiled `ignores` plus the test-file patterns.
struct IgnoreSet {
    /// Prefix-matched against walked paths.
    prefixes: Vec<PathBuf>,
    globs: Vec<Pattern>,
}

impl IgnoreSet {
    fn new(base_dir: &Path, options: &ScanOptions<'_>) -> Self {
        let (glob_entries, literal_entries): (Vec<&String>, Vec<&String>) =
            options.ignores.iter().partition(|p| is_glob_pattern(p));

        let prefixes = literal_entries.into_iter().map(|p| base_dir.join(p)).collect();

        let mut globs: Vec<Pattern> = glob_entries
            .into_iter()
            .filter_map(|p| match Pattern::new(p) {
                Ok(pattern) => Some(pattern),
                Err(e) => {
                    warn_verbose(
                        options.verbose,
                        format_args!("Invalid ignore pattern '{}': {}", p, e),
                    );
                    None
                }
            })
            .collect();

        // Built-in patterns, known to compile.
        if options.ignore_test_files {
            globs.extend(TEST_FILE_PATTERNS.iter().filter_map(|p| Pattern::new(p).ok()));
        }

        Self { prefixes, globs }
    }

    fn matches(&self, path: &Path) -> bool {
        if self.prefixes.iter().any(|prefix| path.starts_with(prefix)) {
            return true;
        }
        let path_str = path.to_string_lossy();
        self.globs.iter().any(|p| p.matches(&path_str))
    }
}

/// Directories to walk: the base dir, or each `includes` entry under it.
fn scan_roots(base_dir: &Path, options: &ScanOptions<'_>) -> Vec<PathBuf> {
    if options.includes.is_empty() {
        return vec![base_dir.to_path_buf()];
    }

    let mut roots = Vec::new();
    for include in options.includes {
        let full = base_dir.join(include);
        if !is_glob_pattern(include) {
            if full.exists() {
                roots.push(full);
            } else {
                warn_verbose(
                    options.verbose,
                    format_args!("Include path does not exist: {}", full.display()),
                );
            }
            continue;
        }

        // Glob includes expand to the directories they match.
        match glob(&full.to_string_lossy()) {
            Ok(entries) => roots.extend(entries.flatten().filter(|entry| entry.is_dir())),
            Err(e) => warn_verbose(
                options.verbose,
                format_args!("Invalid glob pattern '{}': {}", include, e),
            ),
        }
    }
    roots
}

pub fn scan_files(base_dir: &Path, options: &ScanOptions<'_>) -> ScanResult {
    let ignore_set = IgnoreSet::new(base_dir, options);
    let mut files = BTreeSet::new();
    let mut skipped_count = 0;

    // Overlapping roots revisit the same files; the set absorbs duplicates.
    for root in scan_roots(base_dir, options) {
        for entry in WalkDir::new(root) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    skipped_count += 1;
                    warn_verbose(options.verbose, format_args!("Cannot access path: {}", e));
                    continue;
                }
            };
            let path = entry.path();
            if ignore_set.matches(path) {
                continue;
            }
            if path.is_file() && has_extension(path, options.extensions) {
                files.insert(path.to_string_lossy().into_owned());
            }
        }
    }

    ScanResult {
        files,
        skipped_count,
    }
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| extensions.iter().any(|allowed| allowed == ext))
}
