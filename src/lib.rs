//! i18n-audit - translation catalog auditor for JavaScript/TypeScript projects
//!
//! i18n-audit is a CLI tool and library that cross-checks source code against
//! per-language, per-namespace JSON translation catalogs. It finds hardcoded
//! user-facing text, missing translations, unused keys and keys that differ
//! between languages, and writes a Markdown report for each run.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (commands, actions, console output)
//! - `config`: Configuration file loading and validation
//! - `core`: Analysis engine (catalog loading, source scanning, extraction)
//! - `issues`: Finding types shared by rules, console output and reports
//! - `report`: Markdown report rendering and saving
//! - `rules`: Reconciliation of source references against catalogs

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod report;
pub mod rules;
