use std::{
    cell::OnceCell,
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use anyhow::{Context as _, Result, bail};
use colored::Colorize;

use crate::{
    cli::args::CommonArgs,
    config::{CONFIG_FILE_NAME, Config, load_config},
    core::{
        Catalog, LoadState,
        catalog::{CATALOG_EXTENSION, load_catalog},
        extract::{KeyScanner, LiteralScanner, SourceFile, read_source_files},
        file_scanner::{ScanOptions, scan_files},
    },
    issues::LoadErrorIssue,
    rules::References,
};

/// Per-run analysis context.
///
/// Built once per invocation and passed to every command. Holds the merged
/// configuration, the discovered source files and the loaded catalog. Source
/// text and key references are read lazily on first use.
///
/// # Configuration Priority
///
/// 1. CLI arguments (e.g., `--locales-dir`)
/// 2. `.i18nrc.json` config file
/// 3. Built-in defaults
pub struct AuditContext {
    /// Merged configuration (CLI args > config file > defaults).
    pub config: Config,

    pub locales_dir: PathBuf,

    pub src_dir: PathBuf,

    /// All source files to analyze, sorted.
    pub files: BTreeSet<String>,

    /// Whether to print verbose diagnostic messages.
    pub verbose: bool,

    catalog: Catalog,

    /// Catalog files that exist but could not be loaded.
    load_errors: Vec<LoadErrorIssue>,

    key_scanner: KeyScanner,

    sources: OnceCell<Vec<SourceFile>>,

    references: OnceCell<References>,
}

impl AuditContext {
    /// Create a context from command line arguments.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Config file is invalid
    /// - CLI overrides produce an invalid configuration
    /// - The source directory does not exist
    pub fn new(common_args: &CommonArgs) -> Result<Self> {
        let verbose = common_args.verbose;

        let cwd = std::env::current_dir().context("Failed to determine current directory")?;
        let config_result = load_config(&cwd)?;
        if verbose && !config_result.from_file {
            eprintln!(
                "note: no {} found, using default configuration",
                CONFIG_FILE_NAME
            );
        }

        let mut config = config_result.config;
        apply_overrides(&mut config, common_args);
        config.normalize();
        config.validate()?;

        let locales_dir = PathBuf::from(&config.locales_dir);
        let src_dir = PathBuf::from(&config.src_dir);
        if !src_dir.is_dir() {
            bail!("Source directory does not exist: {}", src_dir.display());
        }

        let key_scanner = KeyScanner::new(&config.translation_functions)?;

        let (scan_result, catalog_result) = rayon::join(
            || {
                scan_files(
                    &src_dir,
                    &ScanOptions {
                        includes: &config.includes,
                        ignores: &config.ignores,
                        extensions: &config.extensions,
                        ignore_test_files: config.ignore_test_files,
                        verbose,
                    },
                )
            },
            || {
                load_catalog(
                    &locales_dir,
                    &config.languages,
                    &config.namespaces,
                    CATALOG_EXTENSION,
                )
            },
        );

        if scan_result.skipped_count > 0 {
            eprintln!(
                "{} {} path(s) skipped due to access errors{}",
                "warning:".bold().yellow(),
                scan_result.skipped_count,
                if verbose { "" } else { " (use -v for details)" }
            );
        }

        for error in &catalog_result.load_errors {
            eprintln!(
                "{} Cannot load catalog {}: {}",
                "warning:".bold().yellow(),
                error.file_path,
                error.error
            );
        }

        if verbose {
            eprintln!(
                "note: {} source file(s) under {}, {} language(s) x {} namespace(s) under {}",
                scan_result.files.len(),
                src_dir.display(),
                config.languages.len(),
                config.namespaces.len(),
                locales_dir.display()
            );
        }

        Ok(Self {
            config,
            locales_dir,
            src_dir,
            files: scan_result.files,
            verbose,
            catalog: catalog_result.catalog,
            load_errors: catalog_result.load_errors,
            key_scanner,
            sources: OnceCell::new(),
            references: OnceCell::new(),
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn load_errors(&self) -> &[LoadErrorIssue] {
        &self.load_errors
    }

    /// Number of catalog files that exist on disk (loaded or malformed).
    pub fn catalog_files_checked(&self) -> usize {
        self.catalog
            .files()
            .filter(|file| file.state != LoadState::Missing)
            .count()
    }

    /// Source file contents (lazy). Unreadable files are skipped with a warning.
    pub fn sources(&self) -> &[SourceFile] {
        self.sources.get_or_init(|| {
            let result = read_source_files(&self.files);
            for file in &result.unreadable {
                eprintln!(
                    "{} Cannot read source file {}: {}",
                    "warning:".bold().yellow(),
                    file.path,
                    file.error
                );
            }
            result.sources
        })
    }

    /// Distinct translation-key references in source (lazy).
    pub fn references(&self) -> &References {
        self.references
            .get_or_init(|| self.key_scanner.scan_sources(self.sources()))
    }

    pub fn literal_scanner(&self) -> LiteralScanner {
        LiteralScanner::new(
            self.config.min_length,
            &self.config.translation_functions,
            &self.config.translation_hooks,
        )
    }

    pub fn default_namespace(&self) -> &str {
        &self.config.default_namespace
    }
}

fn apply_overrides(config: &mut Config, args: &CommonArgs) {
    if let Some(ref locales_dir) = args.locales_dir {
        config.locales_dir = path_string(locales_dir);
    }
    if let Some(ref src_dir) = args.src_dir {
        config.src_dir = path_string(src_dir);
    }
    if !args.languages.is_empty() {
        config.languages = args.languages.clone();
    }
    if !args.namespaces.is_empty() {
        config.namespaces = args.namespaces.clone();
    }
}

fn path_string(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn args() -> CommonArgs {
        CommonArgs {
            locales_dir: None,
            src_dir: None,
            output: None,
            languages: Vec::new(),
            namespaces: Vec::new(),
            verbose: false,
        }
    }

    #[test]
    fn test_overrides_take_priority() {
        let mut config = Config::default();
        let args = CommonArgs {
            locales_dir: Some(PathBuf::from("public/locales")),
            src_dir: Some(PathBuf::from("app")),
            languages: vec!["en".to_string(), "ja".to_string()],
            namespaces: vec!["common".to_string()],
            ..args()
        };

        apply_overrides(&mut config, &args);

        assert_eq!(config.locales_dir, "public/locales");
        assert_eq!(config.src_dir, "app");
        assert_eq!(config.languages, vec!["en", "ja"]);
        assert_eq!(config.namespaces, vec!["common"]);
    }

    #[test]
    fn test_no_overrides_keep_config() {
        let mut config = Config::default();
        apply_overrides(&mut config, &args());
        assert_eq!(config, Config::default());
    }
}
