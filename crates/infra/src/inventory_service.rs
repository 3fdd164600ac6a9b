//! Inventory lifecycle service (application-level orchestration).
//!
//! Single point of truth for reading and mutating inventory item records.
//! Every operation follows the same pipeline:
//!
//! ```text
//! raw id string
//!   ↓
//! 1. Parse the identifier (fail fast, before any store call)
//!   ↓
//! 2. Build the scoped filter (soft-delete visibility + any field predicates)
//!   ↓
//! 3. One store call (reads) or one atomic store write (mutations)
//!   ↓
//! 4. Resolve the facility reference where the operation returns a view
//! ```
//!
//! The service holds no locks and starts no transactions; it relies on the
//! store's per-document atomicity. Image operations are translated into a
//! single pull/push/set update rather than read-modify-written here, so
//! concurrent updates to the same record cannot lose writes. Store failures
//! surface with their originating message; no retries happen here, callers
//! own retry policy.

use core::str::FromStr;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use rentory_core::{DomainError, ItemId, Visibility};
use rentory_facilities::FacilityRecord;
use rentory_inventory::{
    ImageOps, ItemFilter, ItemPatch, ItemRecord, ItemStatus, ItemUpdate, MaintenanceEntry, NewItem,
};

use crate::record_store::{RecordStore, StoreError};

/// Error surface of the inventory service.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The supplied id is not a well-formed identifier string. Checked
    /// before any store access.
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// Caller-supplied data failed validation.
    #[error("validation failed: {0}")]
    Validation(String),

    /// No record matched the scoped filter (including "exists but wrong
    /// soft-delete state").
    #[error("not found")]
    NotFound,

    /// Store-level failure, message passed through.
    #[error("operation failed: {0}")]
    Store(#[from] StoreError),
}

impl From<DomainError> for ServiceError {
    fn from(value: DomainError) -> Self {
        match value {
            DomainError::InvalidId(msg) => ServiceError::InvalidId(msg),
            DomainError::Validation(msg) => ServiceError::Validation(msg),
            DomainError::NotFound => ServiceError::NotFound,
        }
    }
}

/// An item record with its facility reference resolved.
///
/// The facility is attached after the primary fetch, never owned; a dangling
/// reference resolves to `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemWithFacility {
    pub item: ItemRecord,
    pub facility: Option<FacilityRecord>,
}

/// The inventory lifecycle service.
pub struct InventoryService<S: RecordStore> {
    store: S,
}

impl<S: RecordStore> InventoryService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    fn parse_id(id: &str) -> Result<ItemId, ServiceError> {
        Ok(ItemId::from_str(id)?)
    }

    fn resolve(&self, item: ItemRecord) -> Result<ItemWithFacility, ServiceError> {
        let facility = match item.associated_facility {
            Some(facility_id) => self.store.facility(facility_id)?,
            None => None,
        };
        Ok(ItemWithFacility { item, facility })
    }

    fn resolve_all(&self, items: Vec<ItemRecord>) -> Result<Vec<ItemWithFacility>, ServiceError> {
        items.into_iter().map(|item| self.resolve(item)).collect()
    }

    /// Construct and persist a new item record.
    pub fn create(&self, new_item: NewItem) -> Result<ItemRecord, ServiceError> {
        new_item.validate()?;
        let record = new_item.into_record(Utc::now());
        let stored = self.store.insert_item(record)?;
        info!(item_id = %stored.id, name = %stored.name, "inventory item created");
        Ok(stored)
    }

    /// All records admitted under `visibility`, facility-resolved.
    pub fn list(&self, visibility: Visibility) -> Result<Vec<ItemWithFacility>, ServiceError> {
        let items = self.store.find_items(&ItemFilter::all(visibility))?;
        self.resolve_all(items)
    }

    /// One record by id under `visibility`, facility-resolved.
    pub fn get(&self, id: &str, visibility: Visibility) -> Result<ItemWithFacility, ServiceError> {
        let item_id = Self::parse_id(id)?;
        let item = self
            .store
            .find_item(&ItemFilter::by_id(item_id, visibility))?
            .ok_or(ServiceError::NotFound)?;
        self.resolve(item)
    }

    /// Apply a field patch plus any image operations as one atomic write.
    ///
    /// When image operations are present the merged collection overrides any
    /// `images` value supplied in the patch.
    pub fn update(
        &self,
        id: &str,
        mut patch: ItemPatch,
        image_ops: ImageOps,
        visibility: Visibility,
    ) -> Result<ItemWithFacility, ServiceError> {
        let item_id = Self::parse_id(id)?;

        let update = if image_ops.is_noop() {
            ItemUpdate::from_patch(patch)
        } else {
            // Merged images win over a caller-supplied collection.
            patch.images = None;
            let mut update = ItemUpdate::from_patch(patch);
            if image_ops.replace_all && !image_ops.add.is_empty() {
                update.set_images = Some(image_ops.add);
            } else {
                update.pull_images = image_ops.remove;
                update.push_images = image_ops.add;
            }
            update
        };

        let updated = self
            .store
            .update_item(&ItemFilter::by_id(item_id, visibility), update)?
            .ok_or(ServiceError::NotFound)?;
        debug!(item_id = %updated.id, "inventory item updated");
        self.resolve(updated)
    }

    /// Mark a currently-visible record deleted. `NotFound` if absent or
    /// already deleted.
    pub fn soft_delete(&self, id: &str) -> Result<ItemRecord, ServiceError> {
        let item_id = Self::parse_id(id)?;
        let deleted = self
            .store
            .update_item(
                &ItemFilter::by_id(item_id, Visibility::Active),
                ItemUpdate::set_deleted(true),
            )?
            .ok_or(ServiceError::NotFound)?;
        info!(item_id = %deleted.id, "inventory item soft-deleted");
        Ok(deleted)
    }

    /// Flip a soft-deleted record back to visible. `NotFound` unless the
    /// record is currently deleted.
    pub fn restore(&self, id: &str) -> Result<ItemRecord, ServiceError> {
        let item_id = Self::parse_id(id)?;
        let restored = self
            .store
            .update_item(
                &ItemFilter::by_id(item_id, Visibility::Deleted),
                ItemUpdate::set_deleted(false),
            )?
            .ok_or(ServiceError::NotFound)?;
        info!(item_id = %restored.id, "inventory item restored");
        Ok(restored)
    }

    /// Records with an exact status match, facility-resolved.
    pub fn list_by_status(
        &self,
        status: ItemStatus,
        visibility: Visibility,
    ) -> Result<Vec<ItemWithFacility>, ServiceError> {
        let items = self
            .store
            .find_items(&ItemFilter::all(visibility).with_status(status))?;
        self.resolve_all(items)
    }

    /// Append one maintenance schedule entry. No dedup, no date-order
    /// validation.
    pub fn append_maintenance(
        &self,
        id: &str,
        entry: MaintenanceEntry,
        visibility: Visibility,
    ) -> Result<ItemRecord, ServiceError> {
        let item_id = Self::parse_id(id)?;
        let updated = self
            .store
            .update_item(
                &ItemFilter::by_id(item_id, visibility),
                ItemUpdate::push_maintenance(entry),
            )?
            .ok_or(ServiceError::NotFound)?;
        debug!(item_id = %updated.id, "maintenance entry appended");
        Ok(updated)
    }

    /// Records below the low-stock threshold, facility-resolved.
    pub fn list_low_stock(
        &self,
        visibility: Visibility,
    ) -> Result<Vec<ItemWithFacility>, ServiceError> {
        let items = self
            .store
            .find_items(&ItemFilter::all(visibility).low_stock())?;
        self.resolve_all(items)
    }
}
