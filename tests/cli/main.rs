use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output},
};

use anyhow::{Context, Ok, Result};
use insta_cmd::get_cargo_bin;
use tempfile::TempDir;

mod init;
mod scan;
mod stats;
mod unused_keys;
mod validate;

const BIN_NAME: &str = "i18n-audit";

pub struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    /// A project with a config for `languages` and the `common` namespace.
    pub fn with_languages(languages: &[&str]) -> Result<Self> {
        let test = Self::new()?;
        let languages = languages
            .iter()
            .map(|l| format!("\"{}\"", l))
            .collect::<Vec<_>>()
            .join(", ");
        test.write_file(
            ".i18nrc.json",
            &format!(
                r#"{{
                    "localesDir": "src/locales",
                    "srcDir": "src",
                    "languages": [{}],
                    "namespaces": ["common"]
                }}"#,
                languages
            ),
        )?;
        Ok(test)
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.project_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory:{}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.project_dir
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin(BIN_NAME));
        cmd.current_dir(&self.project_dir);
        cmd.env_clear();
        cmd.env("NO_COLOR", "1"); // Disable colors for consistent test output
        cmd
    }

    pub fn run(&self, args: &[&str]) -> Result<CliOutput> {
        let output = self
            .command()
            .args(args)
            .output()
            .context("Failed to run i18n-audit")?;
        Ok(CliOutput::from(output))
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.project_dir.join(path);
        fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))
    }

    /// Reports written with the default `<prefix>-<millis>.md` name.
    pub fn reports(&self, prefix: &str) -> Result<Vec<PathBuf>> {
        let mut reports = Vec::new();
        for entry in fs::read_dir(&self.project_dir)? {
            let path = entry?.path();
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            if name.starts_with(&format!("{}-", prefix)) && name.ends_with(".md") {
                reports.push(path);
            }
        }
        Ok(reports)
    }
}

pub struct CliOutput {
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl From<Output> for CliOutput {
    fn from(output: Output) -> Self {
        Self {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&[])?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("Usage:"));
    assert!(output.stdout.contains("unused-keys"));
    Ok(())
}

#[test]
fn test_missing_source_dir_is_an_error() -> Result<()> {
    let test = CliTest::with_languages(&["en"])?;

    let output = test.run(&["stats"])?;

    assert_eq!(output.code, Some(1));
    assert!(output.stderr.contains("Error: Source directory does not exist: src"));
    assert!(test.reports("i18n-stats-report")?.is_empty());
    Ok(())
}

#[test]
fn test_invalid_config_is_an_error() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".i18nrc.json", r#"{ "languages": [] }"#)?;
    test.write_file("src/App.tsx", "")?;

    let output = test.run(&["validate"])?;

    assert_eq!(output.code, Some(1));
    assert!(output.stderr.starts_with("Error:"));
    Ok(())
}
