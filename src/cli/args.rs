//! CLI argument definitions using clap.
//!
//! This module defines the command-line interface for all i18n-audit commands.
//! It uses clap's derive API for declarative argument parsing.
//!
//! ## Commands
//!
//! - `scan`: Find hardcoded user-facing text in source files
//! - `stats`: Translation coverage statistics
//! - `unused-keys`: Find (and optionally delete) unused catalog keys
//! - `validate`: Missing translations, load errors, cross-language consistency
//! - `init`: Write a default `.i18nrc.json`

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

/// Common arguments shared by all analysis commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Catalog root directory (overrides config file)
    #[arg(long)]
    pub locales_dir: Option<PathBuf>,

    /// Source root directory (overrides config file)
    #[arg(long)]
    pub src_dir: Option<PathBuf>,

    /// Report file path (default: <report-prefix>-<millis>.md)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Languages to check, first is the reference (overrides config file)
    #[arg(long, value_delimiter = ',')]
    pub languages: Vec<String>,

    /// Namespaces to check (overrides config file)
    #[arg(long, value_delimiter = ',')]
    pub namespaces: Vec<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct ScanCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Minimum literal length to report (overrides config file)
    #[arg(long)]
    pub min_length: Option<usize>,
}

#[derive(Debug, Args)]
pub struct StatsCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct UnusedKeysCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Actually delete keys (default is dry-run)
    #[arg(long)]
    pub execute: bool,
}

#[derive(Debug, Args)]
pub struct ValidateCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Scan source files for hardcoded text that may need translation
    Scan(ScanCommand),
    /// Show translation coverage statistics
    Stats(StatsCommand),
    /// Find catalog keys that no source file references
    UnusedKeys(UnusedKeysCommand),
    /// Check catalogs for missing translations and cross-language consistency
    Validate(ValidateCommand),
    /// Initialize a new .i18nrc.json configuration file
    Init,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn parse(args: &[&str]) -> Arguments {
        Arguments::try_parse_from(std::iter::once("i18n-audit").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_parse_scan_with_overrides() {
        let args = parse(&[
            "scan",
            "--src-dir",
            "app",
            "--min-length",
            "5",
            "--languages",
            "en,ja",
            "-v",
        ]);

        let Some(Command::Scan(cmd)) = args.command else {
            panic!("expected scan command");
        };
        assert!(cmd.common.verbose);
        assert_eq!(cmd.min_length, Some(5));
        assert_eq!(cmd.common.src_dir, Some(PathBuf::from("app")));
        assert_eq!(cmd.common.languages, vec!["en", "ja"]);
    }

    #[test]
    fn test_unused_keys_defaults_to_dry_run() {
        let args = parse(&["unused-keys"]);
        let Some(Command::UnusedKeys(cmd)) = args.command else {
            panic!("expected unused-keys command");
        };
        assert!(!cmd.execute);
        assert!(!cmd.common.verbose);
    }

    #[test]
    fn test_init_takes_no_arguments() {
        assert!(matches!(parse(&["init"]).command, Some(Command::Init)));
        assert!(Arguments::try_parse_from(["i18n-audit", "init", "--verbose"]).is_err());
    }

    #[test]
    fn test_min_length_is_scan_only() {
        let result = Arguments::try_parse_from(["i18n-audit", "stats", "--min-length", "3"]);
        assert!(result.is_err());
    }
}
