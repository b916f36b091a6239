//! DeleteKey action.
//!
//! Deletes unused translation keys from catalog files.
//! Used by `i18n-audit unused-keys --execute`.

use crate::issues::UnusedKeyIssue;

use super::operation::Operation;
use super::traits::Action;

/// Action to delete translation keys from catalog files.
pub struct DeleteKey;

impl Action<UnusedKeyIssue> for DeleteKey {
    fn to_operations(issues: &[UnusedKeyIssue]) -> Vec<Operation> {
        issues
            .iter()
            .map(|issue| Operation::DeleteCatalogKey {
                context: issue.context.clone(),
            })
            .collect()
    }
}
