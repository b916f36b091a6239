//! Core analysis engine.
//!
//! ## Module Structure
//!
//! - `catalog`: Loads the (language, namespace) catalog files
//! - `context`: Per-run context holding config, sources and catalogs
//! - `data`: Shared data types (catalog tree, key references, locations)
//! - `extract`: Lexical scanners for key references and literal text
//! - `file_scanner`: Source file discovery
//! - `parsers`: Catalog file parsing

pub mod catalog;
pub mod context;
pub mod data;
pub mod extract;
pub mod file_scanner;
pub mod parsers;

pub use catalog::{Catalog, CatalogFile, LoadCatalogResult, LoadState, load_catalog};
pub use context::AuditContext;
pub use data::{
    KeyPath, KeyReference, MessageContext, MessageLocation, MessageValue, SourceContext,
    SourceLocation, namespace_of, qualify,
};
