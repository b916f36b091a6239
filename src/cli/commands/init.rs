use std::{fs, path::Path};

use anyhow::{Context, Result, bail};

use super::{CommandResult, CommandSummary, InitSummary};
use crate::config::{CONFIG_FILE_NAME, default_config_json};

/// Write a default `.i18nrc.json` into `dir`. Refuses to overwrite.
pub fn init_in(dir: &Path) -> Result<CommandResult> {
    let config_path = dir.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        bail!("{} already exists", CONFIG_FILE_NAME);
    }

    fs::write(&config_path, default_config_json()?)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    Ok(CommandResult {
        summary: CommandSummary::Init(InitSummary {
            path: CONFIG_FILE_NAME.to_string(),
        }),
        error_count: 0,
        warning_count: 0,
        exit_on_errors: true,
        issues: Vec::new(),
        source_files_checked: 0,
        catalog_files_checked: 0,
        report_path: None,
    })
}

pub fn init() -> Result<CommandResult> {
    init_in(Path::new("."))
}
