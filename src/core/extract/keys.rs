use std::collections::BTreeSet;

use anyhow::{Context, Result};
use regex::Regex;

use crate::core::extract::SourceFile;

/// Finds the first string argument of translation calls such as `t("save")`.
///
/// The call must be a whole identifier (`i18n.t("x")` matches, `split(",")`
/// does not), written with no space before the parenthesis, and the argument
/// must be a single quoted literal with no quote characters inside it.
///
/// `$` counts as an identifier character, so Vue-style `$t("x")` is only
/// found when `$t` itself is configured.
pub struct KeyScanner {
    pattern: Regex,
}

impl KeyScanner {
    pub fn new(functions: &[String]) -> Result<Self> {
        let alternatives = functions
            .iter()
            .map(|f| regex::escape(f))
            .collect::<Vec<_>>()
            .join("|");
        // The call name must not continue an identifier: `[^\w$]` or start of text.
        let pattern = format!(r#"(?:^|[^\w$])(?:{})\(['"`]([^'"`]+)['"`]"#, alternatives);
        let pattern = Regex::new(&pattern)
            .with_context(|| format!("Invalid translation function list: {:?}", functions))?;
        Ok(Self { pattern })
    }

    /// References in one text, in order of appearance (duplicates kept).
    pub fn scan_text<'a>(&'a self, content: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.pattern
            .captures_iter(content)
            .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
    }

    /// Distinct references across all sources.
    pub fn scan_sources(&self, sources: &[SourceFile]) -> BTreeSet<String> {
        sources
            .iter()
            .flat_map(|source| self.scan_text(&source.content))
            .map(String::from)
            .collect()
    }
}
