use std::sync::Arc;

use thiserror::Error;

use rentory_core::FacilityId;
use rentory_facilities::FacilityRecord;
use rentory_inventory::{ItemFilter, ItemRecord, ItemUpdate};

/// Record store operation error.
///
/// These are **infrastructure errors** (backend, locking) as opposed to
/// domain errors (validation, scoped misses). The originating message is
/// passed through; no retries happen at this layer.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store backend failure: {0}")]
    Backend(String),
}

/// Document store over the item and facility collections.
///
/// ## Design principles
///
/// - **No storage assumptions**: works with the in-memory implementation
///   (tests/dev) and future document-database backends (production).
/// - **Filter-scoped writes**: updates and reads take an [`ItemFilter`], so
///   the soft-delete visibility rule is enforced by the same predicate on
///   every path.
/// - **Per-document atomicity**: `update_item` applies the whole
///   [`ItemUpdate`] (field patch, image pull/push/set, maintenance append,
///   flag flip) as one atomic write against the matched document.
///   Implementations must not let concurrent updates to the same document
///   interleave inside an update.
/// - **Soft delete only**: nothing here removes a document.
pub trait RecordStore: Send + Sync {
    /// Persist a new item record. The caller supplies the id; no uniqueness
    /// constraint beyond it.
    fn insert_item(&self, record: ItemRecord) -> Result<ItemRecord, StoreError>;

    /// All item records matching the filter.
    fn find_items(&self, filter: &ItemFilter) -> Result<Vec<ItemRecord>, StoreError>;

    /// First item record matching the filter, if any.
    fn find_item(&self, filter: &ItemFilter) -> Result<Option<ItemRecord>, StoreError>;

    /// Atomically apply `update` to the single record matching `filter`.
    ///
    /// Returns the updated record, or `None` when nothing matched (in which
    /// case nothing was written). Implementations bump `updated_at`.
    fn update_item(
        &self,
        filter: &ItemFilter,
        update: ItemUpdate,
    ) -> Result<Option<ItemRecord>, StoreError>;

    /// Persist a facility record (seeding and the facility collaborator).
    fn insert_facility(&self, record: FacilityRecord) -> Result<FacilityRecord, StoreError>;

    /// Look up a facility by id (the populate read).
    fn facility(&self, id: FacilityId) -> Result<Option<FacilityRecord>, StoreError>;
}

impl<S> RecordStore for Arc<S>
where
    S: RecordStore + ?Sized,
{
    fn insert_item(&self, record: ItemRecord) -> Result<ItemRecord, StoreError> {
        (**self).insert_item(record)
    }

    fn find_items(&self, filter: &ItemFilter) -> Result<Vec<ItemRecord>, StoreError> {
        (**self).find_items(filter)
    }

    fn find_item(&self, filter: &ItemFilter) -> Result<Option<ItemRecord>, StoreError> {
        (**self).find_item(filter)
    }

    fn update_item(
        &self,
        filter: &ItemFilter,
        update: ItemUpdate,
    ) -> Result<Option<ItemRecord>, StoreError> {
        (**self).update_item(filter, update)
    }

    fn insert_facility(&self, record: FacilityRecord) -> Result<FacilityRecord, StoreError> {
        (**self).insert_facility(record)
    }

    fn facility(&self, id: FacilityId) -> Result<Option<FacilityRecord>, StoreError> {
        (**self).facility(id)
    }
}
