//! Issue types produced by the scanners and the reconciliation rules.
//!
//! Each issue is self-contained with everything needed by:
//! - Reporters: console output and Markdown reports
//! - Actions: cleanup of unused catalog keys

use std::fmt;

use enum_dispatch::enum_dispatch;

use crate::core::{MessageContext, SourceContext, qualify};

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
///
/// Declaration order is the order findings are grouped in reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rule {
    MissingTranslation,
    LoadError,
    InconsistentKey,
    UnusedKey,
    HardcodedText,
}

impl Rule {
    /// Heading used for the rule's section in Markdown reports.
    pub fn title(&self) -> &'static str {
        match self {
            Rule::MissingTranslation => "Missing translations",
            Rule::LoadError => "Load errors",
            Rule::InconsistentKey => "Inconsistent keys",
            Rule::UnusedKey => "Unused keys",
            Rule::HardcodedText => "Hardcoded text",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::MissingTranslation => write!(f, "missing-translation"),
            Rule::LoadError => write!(f, "load-error"),
            Rule::InconsistentKey => write!(f, "inconsistent-key"),
            Rule::UnusedKey => write!(f, "unused-key"),
            Rule::HardcodedText => write!(f, "hardcoded"),
        }
    }
}

// ============================================================
// Issue Types - Source Code (SourceContext)
// ============================================================

/// How a candidate literal was written in source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TextKind {
    /// Single- or double-quoted string literal.
    String,
    /// Backtick template literal.
    Template,
    /// Text between a `>` and the next `<`.
    Markup,
}

impl fmt::Display for TextKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextKind::String => write!(f, "string"),
            TextKind::Template => write!(f, "template"),
            TextKind::Markup => write!(f, "markup"),
        }
    }
}

/// Literal text in source that may need to be internationalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HardcodedTextIssue {
    pub context: SourceContext,
    pub text: String,
    pub kind: TextKind,
}

impl HardcodedTextIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::HardcodedText
    }
}

// ============================================================
// Issue Types - Catalogs
// ============================================================

/// A key referenced in source but absent from one language's catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingTranslationIssue {
    pub language: String,
    pub namespace: String,
    /// The reference as written in source (`save` or `modal:title`).
    pub reference: String,
    /// Catalog file expected to hold the key.
    pub file_path: String,
}

impl MissingTranslationIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::MissingTranslation
    }
}

/// A catalog key that no source reference uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnusedKeyIssue {
    pub language: String,
    pub namespace: String,
    pub context: MessageContext,
}

impl UnusedKeyIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::UnusedKey
    }

    /// `namespace:key` form.
    pub fn qualified_key(&self) -> String {
        qualify(&self.namespace, &self.context.key)
    }
}

/// Which side of the reference-language comparison a key is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsistencySide {
    /// Present in the reference language only.
    Missing,
    /// Present in the compared language only.
    Extra,
}

impl fmt::Display for ConsistencySide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConsistencySide::Missing => write!(f, "missing"),
            ConsistencySide::Extra => write!(f, "extra"),
        }
    }
}

/// A key present in only one of the reference language and another language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InconsistentKeyIssue {
    pub language: String,
    pub reference_language: String,
    pub namespace: String,
    /// Qualified `namespace:key`.
    pub key: String,
    pub side: ConsistencySide,
    /// Catalog file of `language` for `namespace`.
    pub file_path: String,
}

impl InconsistentKeyIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::InconsistentKey
    }
}

/// A catalog file that exists but could not be read or parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadErrorIssue {
    pub language: String,
    pub namespace: String,
    pub file_path: String,
    pub error: String,
}

impl LoadErrorIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::LoadError
    }
}

// ============================================================
// Issue Enum
// ============================================================

/// Any issue found during a run.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    MissingTranslation(MissingTranslationIssue),
    LoadError(LoadErrorIssue),
    InconsistentKey(InconsistentKeyIssue),
    UnusedKey(UnusedKeyIssue),
    HardcodedText(HardcodedTextIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        match self {
            Issue::MissingTranslation(_) => MissingTranslationIssue::severity(),
            Issue::LoadError(_) => LoadErrorIssue::severity(),
            Issue::InconsistentKey(_) => InconsistentKeyIssue::severity(),
            Issue::UnusedKey(_) => UnusedKeyIssue::severity(),
            Issue::HardcodedText(_) => HardcodedTextIssue::severity(),
        }
    }

    pub fn rule(&self) -> Rule {
        match self {
            Issue::MissingTranslation(_) => MissingTranslationIssue::rule(),
            Issue::LoadError(_) => LoadErrorIssue::rule(),
            Issue::InconsistentKey(_) => InconsistentKeyIssue::rule(),
            Issue::UnusedKey(_) => UnusedKeyIssue::rule(),
            Issue::HardcodedText(_) => HardcodedTextIssue::rule(),
        }
    }
}

// ============================================================
// Report Trait
// ============================================================

/// Location information for report output.
pub enum ReportLocation<'a> {
    /// Source code position with an excerpt.
    Source(&'a SourceContext),
    /// Key definition inside a catalog file.
    Message(&'a MessageContext),
    /// File-level only (no line).
    File { path: &'a str },
}

impl ReportLocation<'_> {
    pub fn file_path(&self) -> &str {
        match self {
            ReportLocation::Source(ctx) => ctx.file_path(),
            ReportLocation::Message(ctx) => ctx.file_path(),
            ReportLocation::File { path } => path,
        }
    }

    /// 1-based line, or 0 for file-level locations.
    pub fn line(&self) -> usize {
        match self {
            ReportLocation::Source(ctx) => ctx.line(),
            ReportLocation::Message(ctx) => ctx.line(),
            ReportLocation::File { .. } => 0,
        }
    }
}

/// Common interface for reporting any issue type.
#[enum_dispatch]
pub trait Report {
    fn location(&self) -> ReportLocation<'_>;

    /// Human-readable one-line message.
    fn message(&self) -> String;

    fn report_severity(&self) -> Severity;

    fn report_rule(&self) -> Rule;

    /// Namespace the issue belongs to, when it has one.
    fn namespace(&self) -> Option<&str> {
        None
    }

    /// Optional details for the "= note:" line.
    fn details(&self) -> Option<String> {
        None
    }
}

impl Report for HardcodedTextIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Source(&self.context)
    }

    fn message(&self) -> String {
        self.text.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!("{} literal", self.kind))
    }
}

impl Report for MissingTranslationIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
        }
    }

    fn message(&self) -> String {
        format!("missing {} translation: {}", self.language, self.reference)
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn namespace(&self) -> Option<&str> {
        Some(&self.namespace)
    }
}

impl Report for UnusedKeyIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        format!("unused translation key: {}", self.qualified_key())
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn namespace(&self) -> Option<&str> {
        Some(&self.namespace)
    }

    fn details(&self) -> Option<String> {
        Some(format!("(\"{}\") in {}", self.context.value, self.language))
    }
}

impl Report for InconsistentKeyIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
        }
    }

    fn message(&self) -> String {
        match self.side {
            ConsistencySide::Missing => format!("{} is missing key: {}", self.language, self.key),
            ConsistencySide::Extra => format!("{} has extra key: {}", self.language, self.key),
        }
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn namespace(&self) -> Option<&str> {
        Some(&self.namespace)
    }

    fn details(&self) -> Option<String> {
        Some(format!("compared against {}", self.reference_language))
    }
}

impl Report for LoadErrorIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
        }
    }

    fn message(&self) -> String {
        format!("failed to load {}: {}", self.file_path, self.error)
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn namespace(&self) -> Option<&str> {
        Some(&self.namespace)
    }
}

// ============================================================
// Ordering for Issue (for grouping in reports)
// ============================================================

impl Ord for Issue {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        let (a, b) = (self.location(), other.location());
        self.rule()
            .cmp(&other.rule())
            .then_with(|| a.file_path().cmp(b.file_path()))
            .then_with(|| a.line().cmp(&b.line()))
            .then_with(|| self.message().cmp(&other.message()))
    }
}

impl PartialOrd for Issue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
