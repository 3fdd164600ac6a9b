//! Item query filter.
//!
//! One predicate shared by every read and write path, so the soft-delete
//! rule cannot drift between near-duplicate queries.

use serde::{Deserialize, Serialize};

use rentory_core::{ItemId, Visibility};

use crate::item::{ItemRecord, ItemStatus, LOW_STOCK_THRESHOLD};

/// Field-level filter over the item collection.
///
/// All set fields must match (conjunction). `visibility` always applies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemFilter {
    pub id: Option<ItemId>,
    pub visibility: Visibility,
    pub status: Option<ItemStatus>,
    /// Strict upper bound on `quantity`.
    pub quantity_below: Option<u32>,
}

impl ItemFilter {
    /// Match every record admitted under `visibility`.
    pub fn all(visibility: Visibility) -> Self {
        Self {
            visibility,
            ..Self::default()
        }
    }

    /// Match a single record by id under `visibility`.
    pub fn by_id(id: ItemId, visibility: Visibility) -> Self {
        Self {
            id: Some(id),
            visibility,
            ..Self::default()
        }
    }

    pub fn with_status(mut self, status: ItemStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Restrict to the low-stock view (`quantity < LOW_STOCK_THRESHOLD`).
    pub fn low_stock(mut self) -> Self {
        self.quantity_below = Some(LOW_STOCK_THRESHOLD);
        self
    }

    pub fn matches(&self, record: &ItemRecord) -> bool {
        if let Some(id) = self.id {
            if record.id != id {
                return false;
            }
        }
        if !self.visibility.admits(record.is_deleted) {
            return false;
        }
        if let Some(status) = self.status {
            if record.status != status {
                return false;
            }
        }
        if let Some(bound) = self.quantity_below {
            if record.quantity >= bound {
                return false;
            }
        }
        true
    }
}
