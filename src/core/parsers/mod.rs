//! File parsers for catalog files.
//!
//! - `json`: JSON catalog parser (tree, key line lookup, pretty serialization)

pub mod json;
