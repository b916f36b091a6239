use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
    sync::LazyLock,
};

use anyhow::{Context, Result, bail};
use glob::Pattern;
use regex::Regex;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".i18nrc.json";

pub const TEST_FILE_PATTERNS: &[&str] = &[
    "**/*.test.tsx",
    "**/*.test.ts",
    "**/*.test.jsx",
    "**/*.test.js",
    "**/*.spec.tsx",
    "**/*.spec.ts",
    "**/*.spec.jsx",
    "**/*.spec.js",
    "**/__tests__/**",
];

/// Translation function names: identifiers, optionally dotted (`i18n.t`).
static FUNCTION_NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*(\.[A-Za-z_$][A-Za-z0-9_$]*)*$").unwrap());

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_locales_dir")]
    pub locales_dir: String,
    #[serde(default = "default_src_dir")]
    pub src_dir: String,
    /// The first language is the reference for consistency checks.
    #[serde(default = "default_languages")]
    pub languages: Vec<String>,
    #[serde(default = "default_namespaces")]
    pub namespaces: Vec<String>,
    /// Namespace for references written without a `ns:` prefix.
    #[serde(default = "default_namespace")]
    pub default_namespace: String,
    #[serde(default = "default_translation_functions")]
    pub translation_functions: Vec<String>,
    #[serde(default = "default_translation_hooks")]
    pub translation_hooks: Vec<String>,
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    #[serde(default)]
    pub includes: Vec<String>,
    #[serde(default = "default_ignores")]
    pub ignores: Vec<String>,
    #[serde(default = "default_ignore_test_files")]
    pub ignore_test_files: bool,
    #[serde(default = "default_min_length")]
    pub min_length: usize,
}

fn default_locales_dir() -> String {
    "src/locales".to_string()
}

fn default_src_dir() -> String {
    "src".to_string()
}

fn default_languages() -> Vec<String> {
    ["zh", "en"].map(String::from).to_vec()
}

fn default_namespaces() -> Vec<String> {
    [
        "common",
        "auth",
        "flow",
        "modal",
        "message",
        "navigation",
        "ui",
        "validation",
        "store",
        "component",
        "page",
    ]
    .map(String::from)
    .to_vec()
}

fn default_namespace() -> String {
    "common".to_string()
}

fn default_translation_functions() -> Vec<String> {
    vec!["t".to_string()]
}

fn default_translation_hooks() -> Vec<String> {
    vec!["useTranslation".to_string()]
}

fn default_extensions() -> Vec<String> {
    ["ts", "tsx", "js", "jsx"].map(String::from).to_vec()
}

fn default_ignores() -> Vec<String> {
    ["**/node_modules/**", "**/dist/**", "**/build/**"]
        .map(String::from)
        .to_vec()
}

fn default_ignore_test_files() -> bool {
    true
}

fn default_min_length() -> usize {
    3
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locales_dir: default_locales_dir(),
            src_dir: default_src_dir(),
            languages: default_languages(),
            namespaces: default_namespaces(),
            default_namespace: default_namespace(),
            translation_functions: default_translation_functions(),
            translation_hooks: default_translation_hooks(),
            extensions: default_extensions(),
            includes: Vec::new(),
            ignores: default_ignores(),
            ignore_test_files: default_ignore_test_files(),
            min_length: default_min_length(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        // Patterns without wildcards are literal directory paths.
        for pattern in &self.includes {
            if pattern.contains('*') || pattern.contains('?') {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in 'includes': \"{}\"", pattern)
                })?;
            }
        }

        if self.languages.is_empty() {
            bail!("'languages' must contain at least one language");
        }
        if self.translation_functions.is_empty() {
            bail!("'translationFunctions' must contain at least one function name");
        }
        for name in &self.translation_functions {
            if !FUNCTION_NAME_REGEX.is_match(name) {
                bail!("Invalid function name in 'translationFunctions': \"{}\"", name);
            }
        }
        if self.min_length == 0 {
            bail!("'minLength' must be at least 1");
        }

        Ok(())
    }

    /// Drop duplicate list entries, keeping the first occurrence.
    pub fn normalize(&mut self) {
        dedup_in_order(&mut self.languages);
        dedup_in_order(&mut self.namespaces);
        dedup_in_order(&mut self.translation_functions);
        dedup_in_order(&mut self.translation_hooks);
        dedup_in_order(&mut self.extensions);
    }
}

fn dedup_in_order(items: &mut Vec<String>) {
    let mut seen = HashSet::new();
    items.retain(|item| seen.insert(item.clone()));
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let mut config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.normalize();
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
