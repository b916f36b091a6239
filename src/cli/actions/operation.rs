use std::io::Write;

use colored::Colorize;

use crate::core::MessageContext;

/// A single low-level edit produced by an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Remove the key at `context.segments` from `context.file_path()`.
    DeleteCatalogKey { context: MessageContext },
}

impl Operation {
    /// Catalog file this operation touches.
    pub fn file_path(&self) -> &str {
        match self {
            Operation::DeleteCatalogKey { context } => context.file_path(),
        }
    }

    pub fn preview_to<W: Write>(&self, writer: &mut W) {
        match self {
            Operation::DeleteCatalogKey { context } => {
                let _ = writeln!(
                    writer,
                    "  {} {}:{}  {}",
                    "-".red(),
                    context.file_path(),
                    context.line(),
                    context.key.bold()
                );
            }
        }
    }
}
