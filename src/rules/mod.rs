//! Reconciliation rules.
//!
//! Pure functions over a loaded catalog and the set of source references.
//! Each takes only the inputs it needs (not the full run context) and
//! returns its own issue or statistics type.
//!
//! ## Module Structure
//!
//! - `helpers`: Reference attribution and the "is used" test
//! - `completeness`: References missing from a language's catalog
//! - `consistency`: Keys present in only one of two languages
//! - `unused`: Catalog keys no reference uses
//! - `coverage`: Usage statistics per namespace, per language and overall

pub mod completeness;
pub mod consistency;
pub mod coverage;
pub mod helpers;
pub mod unused;

pub use completeness::check_missing_translations;
pub use consistency::check_consistency;
pub use coverage::{CoverageStats, LanguageStats, NamespaceStats, compute_coverage};
pub use helpers::References;
pub use unused::check_unused_keys;
