//! Integration tests for the inventory lifecycle over the in-memory store.
//!
//! Covers: identifier fast-fail, soft-delete visibility across every query,
//! delete/restore flips, image merge through the atomic update path,
//! low-stock boundary, maintenance append, and facility resolution.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::Utc;

    use rentory_core::{FacilityId, ImageDescriptor, ItemId, Visibility};
    use rentory_facilities::{Capacity, FacilityRecord};
    use rentory_inventory::{
        ImageOps, ItemFilter, ItemPatch, ItemRecord, ItemStatus, ItemUpdate, MaintenanceEntry,
        MaintenanceKind, NewItem,
    };

    use crate::inventory_service::{InventoryService, ServiceError};
    use crate::record_store::{InMemoryRecordStore, RecordStore, StoreError};

    fn service() -> InventoryService<Arc<InMemoryRecordStore>> {
        rentory_observability::init();
        InventoryService::new(Arc::new(InMemoryRecordStore::new()))
    }

    fn service_with_store() -> (InventoryService<Arc<InMemoryRecordStore>>, Arc<InMemoryRecordStore>) {
        let store = Arc::new(InMemoryRecordStore::new());
        (InventoryService::new(store.clone()), store)
    }

    fn img(name: &str) -> ImageDescriptor {
        ImageDescriptor::new(format!("/uploads/{name}"), name, "image/png", 512)
    }

    fn maintenance_entry() -> MaintenanceEntry {
        MaintenanceEntry {
            scheduled_date: Utc::now(),
            kind: MaintenanceKind::Cleaning,
            completed: false,
            completed_date: None,
            cost: None,
            notes: None,
            performed_by: None,
        }
    }

    /// Store double that panics on any call; proves an operation failed
    /// before reaching the store.
    struct UnreachableStore;

    impl RecordStore for UnreachableStore {
        fn insert_item(&self, _: ItemRecord) -> Result<ItemRecord, StoreError> {
            panic!("store must not be called");
        }
        fn find_items(&self, _: &ItemFilter) -> Result<Vec<ItemRecord>, StoreError> {
            panic!("store must not be called");
        }
        fn find_item(&self, _: &ItemFilter) -> Result<Option<ItemRecord>, StoreError> {
            panic!("store must not be called");
        }
        fn update_item(
            &self,
            _: &ItemFilter,
            _: ItemUpdate,
        ) -> Result<Option<ItemRecord>, StoreError> {
            panic!("store must not be called");
        }
        fn insert_facility(&self, _: FacilityRecord) -> Result<FacilityRecord, StoreError> {
            panic!("store must not be called");
        }
        fn facility(&self, _: FacilityId) -> Result<Option<FacilityRecord>, StoreError> {
            panic!("store must not be called");
        }
    }

    #[test]
    fn malformed_id_fails_before_any_store_call() {
        let service = InventoryService::new(UnreachableStore);
        let bad = "definitely-not-an-id";

        assert!(matches!(
            service.get(bad, Visibility::Active),
            Err(ServiceError::InvalidId(_))
        ));
        assert!(matches!(
            service.update(bad, ItemPatch::default(), ImageOps::default(), Visibility::Active),
            Err(ServiceError::InvalidId(_))
        ));
        assert!(matches!(
            service.soft_delete(bad),
            Err(ServiceError::InvalidId(_))
        ));
        assert!(matches!(service.restore(bad), Err(ServiceError::InvalidId(_))));
        assert!(matches!(
            service.append_maintenance(bad, maintenance_entry(), Visibility::Active),
            Err(ServiceError::InvalidId(_))
        ));
    }

    #[test]
    fn create_rejects_blank_name() {
        let service = service();
        let result = service.create(NewItem::new("  ", 1, ItemStatus::InStock, "misc"));
        assert!(matches!(result, Err(ServiceError::Validation(_))));
    }

    #[test]
    fn soft_deleted_record_is_hidden_from_default_reads() {
        let service = service();
        let record = service
            .create(NewItem::new("Canopy", 2, ItemStatus::InStock, "outdoor"))
            .unwrap();
        let id = record.id.to_string();

        service.soft_delete(&id).unwrap();

        assert!(matches!(
            service.get(&id, Visibility::Active),
            Err(ServiceError::NotFound)
        ));
        assert!(service.list(Visibility::Active).unwrap().is_empty());
        assert!(service
            .list_by_status(ItemStatus::InStock, Visibility::Active)
            .unwrap()
            .is_empty());
        assert!(service.list_low_stock(Visibility::Active).unwrap().is_empty());

        // Privileged mode still reaches it.
        let hidden = service.get(&id, Visibility::Any).unwrap();
        assert!(hidden.item.is_deleted);
        assert_eq!(service.list(Visibility::Any).unwrap().len(), 1);
        assert_eq!(
            service
                .list_by_status(ItemStatus::InStock, Visibility::Any)
                .unwrap()
                .len(),
            1
        );
        assert_eq!(service.list_low_stock(Visibility::Any).unwrap().len(), 1);
    }

    #[test]
    fn delete_then_restore_preserves_non_flag_fields() {
        let service = service();
        let record = service
            .create(NewItem::new("Drill", 6, ItemStatus::Maintenance, "tools"))
            .unwrap();
        let id = record.id.to_string();

        service
            .append_maintenance(&id, maintenance_entry(), Visibility::Active)
            .unwrap();
        let before = service.get(&id, Visibility::Active).unwrap().item;

        service.soft_delete(&id).unwrap();
        let restored = service.restore(&id).unwrap();

        assert!(!restored.is_deleted);
        assert_eq!(restored.name, before.name);
        assert_eq!(restored.quantity, before.quantity);
        assert_eq!(restored.status, before.status);
        assert_eq!(restored.images, before.images);
        assert_eq!(restored.history, before.history);
        assert_eq!(restored.maintenance_schedule, before.maintenance_schedule);
    }

    #[test]
    fn double_delete_and_premature_restore_are_not_found() {
        let service = service();
        let record = service
            .create(NewItem::new("Rope", 9, ItemStatus::InStock, "climbing"))
            .unwrap();
        let id = record.id.to_string();

        // Restore before delete: wrong soft-delete state.
        assert!(matches!(service.restore(&id), Err(ServiceError::NotFound)));

        service.soft_delete(&id).unwrap();
        assert!(matches!(service.soft_delete(&id), Err(ServiceError::NotFound)));

        service.restore(&id).unwrap();
        assert!(matches!(service.restore(&id), Err(ServiceError::NotFound)));
    }

    #[test]
    fn unknown_id_is_not_found() {
        let service = service();
        let id = ItemId::new().to_string();
        assert!(matches!(
            service.get(&id, Visibility::Any),
            Err(ServiceError::NotFound)
        ));
    }

    #[test]
    fn update_merges_images_remove_before_append() {
        let service = service();
        let a = img("a.png");
        let b = img("b.png");
        let c = img("c.png");

        let mut new_item = NewItem::new("Camera", 1, ItemStatus::InStock, "av");
        new_item.images = vec![a.clone(), b.clone()];
        let record = service.create(new_item).unwrap();

        let updated = service
            .update(
                &record.id.to_string(),
                ItemPatch::default(),
                ImageOps {
                    add: vec![c.clone()],
                    remove: vec![a.id],
                    replace_all: false,
                },
                Visibility::Active,
            )
            .unwrap();

        assert_eq!(updated.item.images, vec![b, c]);
    }

    #[test]
    fn update_replace_all_supersedes_remove() {
        let service = service();
        let a = img("a.png");
        let d = img("d.png");

        let mut new_item = NewItem::new("Lens", 1, ItemStatus::InStock, "av");
        new_item.images = vec![a.clone()];
        let record = service.create(new_item).unwrap();

        let updated = service
            .update(
                &record.id.to_string(),
                ItemPatch::default(),
                ImageOps {
                    add: vec![d.clone()],
                    remove: vec![a.id],
                    replace_all: true,
                },
                Visibility::Active,
            )
            .unwrap();

        assert_eq!(updated.item.images, vec![d]);
    }

    #[test]
    fn update_without_image_ops_leaves_images_untouched() {
        let service = service();
        let a = img("a.png");

        let mut new_item = NewItem::new("Tripod", 3, ItemStatus::InStock, "av");
        new_item.images = vec![a.clone()];
        let record = service.create(new_item).unwrap();

        let updated = service
            .update(
                &record.id.to_string(),
                ItemPatch {
                    quantity: Some(8),
                    ..ItemPatch::default()
                },
                ImageOps::default(),
                Visibility::Active,
            )
            .unwrap();

        assert_eq!(updated.item.quantity, 8);
        assert_eq!(updated.item.images, vec![a]);
    }

    #[test]
    fn merged_images_override_patch_supplied_collection() {
        let service = service();
        let a = img("a.png");
        let c = img("c.png");

        let mut new_item = NewItem::new("Mixer", 1, ItemStatus::InStock, "av");
        new_item.images = vec![a.clone()];
        let record = service.create(new_item).unwrap();

        // Patch tries to smuggle in its own collection alongside image ops.
        let updated = service
            .update(
                &record.id.to_string(),
                ItemPatch {
                    images: Some(vec![img("rogue.png")]),
                    ..ItemPatch::default()
                },
                ImageOps {
                    add: vec![c.clone()],
                    remove: vec![],
                    replace_all: false,
                },
                Visibility::Active,
            )
            .unwrap();

        assert_eq!(updated.item.images, vec![a, c]);
    }

    #[test]
    fn low_stock_boundary_excludes_threshold() {
        let service = service();
        let low = service
            .create(NewItem::new("Stakes", 4, ItemStatus::InStock, "camping"))
            .unwrap();
        service
            .create(NewItem::new("Mallets", 5, ItemStatus::InStock, "camping"))
            .unwrap();

        let listed = service.list_low_stock(Visibility::Active).unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].item.id, low.id);
    }

    #[test]
    fn maintenance_append_grows_schedule_by_one() {
        let service = service();
        let record = service
            .create(NewItem::new("Generator", 2, ItemStatus::InStock, "power"))
            .unwrap();
        let id = record.id.to_string();

        let first = maintenance_entry();
        let after_first = service
            .append_maintenance(&id, first.clone(), Visibility::Active)
            .unwrap();
        assert_eq!(after_first.maintenance_schedule.len(), 1);

        let second = maintenance_entry();
        let after_second = service
            .append_maintenance(&id, second.clone(), Visibility::Active)
            .unwrap();
        assert_eq!(after_second.maintenance_schedule.len(), 2);
        assert_eq!(after_second.maintenance_schedule[0], first);
        assert_eq!(after_second.maintenance_schedule[1], second);
    }

    #[test]
    fn reads_resolve_associated_facility() {
        let (service, store) = service_with_store();
        let facility = store
            .insert_facility(FacilityRecord::new(
                "Court A",
                Capacity {
                    maximum: 12,
                    recommended: 10,
                },
                Utc::now(),
            ))
            .unwrap();

        let mut new_item = NewItem::new("Net", 1, ItemStatus::InStock, "sports");
        new_item.associated_facility = Some(facility.id);
        let record = service.create(new_item).unwrap();

        let fetched = service.get(&record.id.to_string(), Visibility::Active).unwrap();
        assert_eq!(fetched.facility.as_ref().map(|f| f.id), Some(facility.id));
        assert_eq!(fetched.facility.unwrap().name, "Court A");
    }

    #[test]
    fn dangling_facility_reference_resolves_to_none() {
        let service = service();
        let mut new_item = NewItem::new("Ball", 7, ItemStatus::InStock, "sports");
        new_item.associated_facility = Some(FacilityId::new());
        let record = service.create(new_item).unwrap();

        let fetched = service.get(&record.id.to_string(), Visibility::Active).unwrap();
        assert!(fetched.facility.is_none());
    }

    #[test]
    fn list_by_status_matches_exactly() {
        let service = service();
        let rented = service
            .create(NewItem::new("Kayak", 3, ItemStatus::Rented, "water"))
            .unwrap();
        service
            .create(NewItem::new("Paddle", 3, ItemStatus::InStock, "water"))
            .unwrap();

        let listed = service
            .list_by_status(ItemStatus::Rented, Visibility::Active)
            .unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].item.id, rented.id);
    }

    /// End-to-end scenario: create a low-stock item, attach an image, delete,
    /// then reach it through privileged mode.
    #[test]
    fn lifecycle_scenario() {
        let service = service();
        let record = service
            .create(NewItem::new("Tent", 3, ItemStatus::InStock, "camping"))
            .unwrap();
        let id = record.id.to_string();

        let low = service.list_low_stock(Visibility::Active).unwrap();
        assert!(low.iter().any(|entry| entry.item.id == record.id));

        let img1 = img("img1.png");
        let updated = service
            .update(
                &id,
                ItemPatch::default(),
                ImageOps {
                    add: vec![img1.clone()],
                    remove: vec![],
                    replace_all: false,
                },
                Visibility::Active,
            )
            .unwrap();
        assert_eq!(updated.item.images, vec![img1]);

        service.soft_delete(&id).unwrap();
        assert!(matches!(
            service.get(&id, Visibility::Active),
            Err(ServiceError::NotFound)
        ));

        let via_privileged = service.get(&id, Visibility::Any).unwrap();
        assert!(via_privileged.item.is_deleted);
        assert_eq!(via_privileged.item.images.len(), 1);
    }
}
