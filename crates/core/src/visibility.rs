//! Soft-delete visibility predicate.
//!
//! Records are never physically removed; a boolean flag marks them inactive.
//! Every query path shares this one predicate instead of re-spelling the
//! flag filter per call site.

use serde::{Deserialize, Serialize};

/// Which soft-delete states a read or write may touch.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    /// Only live records (`is_deleted = false`). The default for all callers.
    #[default]
    Active,
    /// Only soft-deleted records. Used by the restore path.
    Deleted,
    /// Both. Privileged "show deleted" mode.
    Any,
}

impl Visibility {
    /// Whether a record with the given flag is admitted under this mode.
    pub fn admits(self, is_deleted: bool) -> bool {
        match self {
            Visibility::Active => !is_deleted,
            Visibility::Deleted => is_deleted,
            Visibility::Any => true,
        }
    }
}
