//! Actions for processing i18n issues.
//!
//! Actions convert Issues into Operations and execute them.
//!
//! ## Architecture
//!
//! ```text
//! Issue (problem detected)
//!     ↓
//! Action (Issue → Operation conversion)
//!     ↓
//! Operation (low-level catalog edit)
//!     ↓
//! execute (one catalog file at a time)
//! ```
//!
//! ## Actions
//!
//! - [`DeleteKey`]: Delete unused keys from catalog files (`unused-keys --execute`)

mod delete_key;
mod json_editor;
mod operation;
mod traits;

pub use delete_key::DeleteKey;
pub use json_editor::CatalogEditor;
pub use operation::Operation;
pub use traits::{Action, ActionStats};
