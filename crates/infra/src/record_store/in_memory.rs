use std::collections::HashMap;
use std::sync::RwLock;

use chrono::Utc;

use rentory_core::{FacilityId, ItemId};
use rentory_facilities::FacilityRecord;
use rentory_inventory::{ItemFilter, ItemRecord, ItemUpdate};

use super::r#trait::{RecordStore, StoreError};

/// In-memory record store.
///
/// Intended for tests/dev. Updates take the collection write lock for the
/// whole read-apply-write of one document, which gives the per-document
/// atomicity the trait requires. Not optimized for performance.
#[derive(Debug, Default)]
pub struct InMemoryRecordStore {
    items: RwLock<HashMap<ItemId, ItemRecord>>,
    facilities: RwLock<HashMap<FacilityId, FacilityRecord>>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn poisoned() -> StoreError {
        StoreError::Backend("lock poisoned".to_string())
    }
}

impl RecordStore for InMemoryRecordStore {
    fn insert_item(&self, record: ItemRecord) -> Result<ItemRecord, StoreError> {
        let mut items = self.items.write().map_err(|_| Self::poisoned())?;
        items.insert(record.id, record.clone());
        Ok(record)
    }

    fn find_items(&self, filter: &ItemFilter) -> Result<Vec<ItemRecord>, StoreError> {
        let items = self.items.read().map_err(|_| Self::poisoned())?;
        let mut matched: Vec<ItemRecord> =
            items.values().filter(|r| filter.matches(r)).cloned().collect();
        // HashMap iteration order is arbitrary; present insertion-time order.
        matched.sort_by_key(|r| (r.created_at, *r.id.as_uuid()));
        Ok(matched)
    }

    fn find_item(&self, filter: &ItemFilter) -> Result<Option<ItemRecord>, StoreError> {
        let items = self.items.read().map_err(|_| Self::poisoned())?;
        Ok(items.values().find(|r| filter.matches(r)).cloned())
    }

    fn update_item(
        &self,
        filter: &ItemFilter,
        update: ItemUpdate,
    ) -> Result<Option<ItemRecord>, StoreError> {
        let mut items = self.items.write().map_err(|_| Self::poisoned())?;

        let Some(record) = items.values_mut().find(|r| filter.matches(r)) else {
            return Ok(None);
        };

        update.apply(record, Utc::now());
        Ok(Some(record.clone()))
    }

    fn insert_facility(&self, record: FacilityRecord) -> Result<FacilityRecord, StoreError> {
        let mut facilities = self.facilities.write().map_err(|_| Self::poisoned())?;
        facilities.insert(record.id, record.clone());
        Ok(record)
    }

    fn facility(&self, id: FacilityId) -> Result<Option<FacilityRecord>, StoreError> {
        let facilities = self.facilities.read().map_err(|_| Self::poisoned())?;
        Ok(facilities.get(&id).cloned())
    }
}
