//! Catalog loading: one JSON tree per (language, namespace).
//!
//! Files live at `<base_dir>/<language>/<namespace>.<ext>`. A missing file is
//! an empty tree, not an error. A file that exists but cannot be read or
//! parsed is also an empty tree, and produces a [`LoadErrorIssue`].

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use rayon::prelude::*;

use crate::{
    core::{
        MessageContext, MessageLocation,
        data::MessageValue,
        parsers::json::{ParsedCatalog, parse_catalog_file},
    },
    issues::LoadErrorIssue,
};

/// Extension of catalog files.
pub const CATALOG_EXTENSION: &str = "json";

/// How a catalog file ended up in memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Loaded,
    Missing,
    Malformed,
}

/// One (language, namespace) catalog file.
#[derive(Debug, Clone)]
pub struct CatalogFile {
    pub language: String,
    pub namespace: String,
    pub path: PathBuf,
    pub tree: MessageValue,
    /// Dotted key → 1-based line number in the file.
    pub key_lines: HashMap<String, usize>,
    pub state: LoadState,
}

impl CatalogFile {
    /// A loaded file with no recorded key lines.
    pub fn new(
        language: impl Into<String>,
        namespace: impl Into<String>,
        path: impl Into<PathBuf>,
        tree: MessageValue,
    ) -> Self {
        Self {
            language: language.into(),
            namespace: namespace.into(),
            path: path.into(),
            tree,
            key_lines: HashMap::new(),
            state: LoadState::Loaded,
        }
    }

    pub fn file_path(&self) -> String {
        self.path.to_string_lossy().into_owned()
    }

    /// All leaf keys as message contexts, in document order.
    pub fn messages(&self) -> Vec<MessageContext> {
        let file_path = self.file_path();
        self.tree
            .leaf_paths()
            .into_iter()
            .map(|path| {
                let line = self.key_lines.get(&path.dotted).copied().unwrap_or(1);
                let value = self
                    .tree
                    .resolve_segments(&path.segments)
                    .map(MessageValue::preview)
                    .unwrap_or_default();
                MessageContext::new(
                    MessageLocation::new(file_path.clone(), line),
                    path.dotted,
                    path.segments,
                    value,
                )
            })
            .collect()
    }
}

/// All catalog files of a run, addressable by (language, namespace).
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    languages: Vec<String>,
    namespaces: Vec<String>,
    files: HashMap<(String, String), CatalogFile>,
}

impl Catalog {
    pub fn new(languages: Vec<String>, namespaces: Vec<String>) -> Self {
        Self {
            languages,
            namespaces,
            files: HashMap::new(),
        }
    }

    /// Add or replace the file for its (language, namespace).
    pub fn insert(&mut self, file: CatalogFile) {
        self.files
            .insert((file.language.clone(), file.namespace.clone()), file);
    }

    pub fn languages(&self) -> &[String] {
        &self.languages
    }

    pub fn namespaces(&self) -> &[String] {
        &self.namespaces
    }

    /// First configured language, used as the reference for consistency.
    pub fn reference_language(&self) -> Option<&str> {
        self.languages.first().map(String::as_str)
    }

    pub fn get(&self, language: &str, namespace: &str) -> Option<&CatalogFile> {
        self.files
            .get(&(language.to_string(), namespace.to_string()))
    }

    pub fn tree(&self, language: &str, namespace: &str) -> Option<&MessageValue> {
        self.get(language, namespace).map(|file| &file.tree)
    }

    /// Files in configured order: languages outer, namespaces inner.
    pub fn files(&self) -> impl Iterator<Item = &CatalogFile> {
        self.languages.iter().flat_map(move |language| {
            self.namespaces
                .iter()
                .filter_map(move |namespace| self.get(language, namespace))
        })
    }
}

/// Result of loading every configured catalog file.
pub struct LoadCatalogResult {
    pub catalog: Catalog,
    pub load_errors: Vec<LoadErrorIssue>,
}

pub fn catalog_path(base_dir: &Path, language: &str, namespace: &str, extension: &str) -> PathBuf {
    base_dir
        .join(language)
        .join(format!("{}.{}", namespace, extension))
}

/// Load all (language, namespace) catalog files under `base_dir`.
///
/// Never fails as a whole: per-file problems become load errors.
pub fn load_catalog(
    base_dir: &Path,
    languages: &[String],
    namespaces: &[String],
    extension: &str,
) -> LoadCatalogResult {
    let pairs: Vec<(&String, &String)> = languages
        .iter()
        .flat_map(|language| namespaces.iter().map(move |namespace| (language, namespace)))
        .collect();

    let loaded: Vec<(CatalogFile, Option<LoadErrorIssue>)> = pairs
        .par_iter()
        .map(|(language, namespace)| {
            load_catalog_file(
                catalog_path(base_dir, language, namespace, extension),
                language,
                namespace,
            )
        })
        .collect();

    let mut catalog = Catalog::new(languages.to_vec(), namespaces.to_vec());
    let mut load_errors = Vec::new();
    for (file, error) in loaded {
        if let Some(error) = error {
            load_errors.push(error);
        }
        catalog.insert(file);
    }

    LoadCatalogResult {
        catalog,
        load_errors,
    }
}

fn load_catalog_file(
    path: PathBuf,
    language: &str,
    namespace: &str,
) -> (CatalogFile, Option<LoadErrorIssue>) {
    let file = |parsed: ParsedCatalog, path: PathBuf, state: LoadState| CatalogFile {
        language: language.to_string(),
        namespace: namespace.to_string(),
        path,
        tree: parsed.tree,
        key_lines: parsed.key_lines,
        state,
    };

    if !path.exists() {
        return (file(ParsedCatalog::default(), path, LoadState::Missing), None);
    }

    match parse_catalog_file(&path) {
        Ok(parsed) => (file(parsed, path, LoadState::Loaded), None),
        Err(err) => {
            let issue = LoadErrorIssue {
                language: language.to_string(),
                namespace: namespace.to_string(),
                file_path: path.to_string_lossy().into_owned(),
                error: err.root_cause().to_string(),
            };
            (
                file(ParsedCatalog::default(), path, LoadState::Malformed),
                Some(issue),
            )
        }
    }
}
