//! Core data types shared by the loaders, scanners and rules.
//!
//! ## Module Structure
//!
//! - `key`: Namespaced key references parsed from source (`ns:key`)
//! - `message`: Catalog key locations and contexts
//! - `source`: Source code locations and excerpts
//! - `value`: The nested catalog tree and its dotted-path operations

pub mod key;
pub mod message;
pub mod source;
pub mod value;

pub use key::{KeyReference, namespace_of, qualify};
pub use message::{MessageContext, MessageLocation};
pub use source::{SourceContext, SourceLocation};
pub use value::{Branch, KeyPath, Leaf, MessageValue};
