//! Atomic item update.
//!
//! An [`ItemUpdate`] is the single write unit the store applies per document:
//! field-replace patch, image pull/push/set, maintenance append, and the
//! soft-delete flag flip all land in one write. There is no partial-write
//! state: either the whole update persists or nothing does.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use rentory_core::{FacilityId, ImageDescriptor, ImageId, PricingTier};

use crate::item::{
    ItemAlerts, ItemRecord, ItemStatus, MaintenanceEntry, PurchaseInfo, SpecValue, StockChange,
};

/// Field-replace patch: each `Some` field overwrites the stored value.
///
/// `images` set here is overridden by the merged collection whenever the
/// update carries image operations. The soft-delete flag is deliberately not
/// patchable; it flips only through the delete/restore paths.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub sku: Option<String>,
    pub quantity: Option<u32>,
    pub status: Option<ItemStatus>,
    pub images: Option<Vec<ImageDescriptor>>,
    pub associated_facility: Option<FacilityId>,
    pub category: Option<String>,
    pub purchase_info: Option<PurchaseInfo>,
    pub pricing: Option<Vec<PricingTier>>,
    pub history: Option<Vec<StockChange>>,
    pub specifications: Option<BTreeMap<String, SpecValue>>,
    pub alerts: Option<ItemAlerts>,
    pub is_taxable: Option<bool>,
}

impl ItemPatch {
    fn apply(self, record: &mut ItemRecord) {
        if let Some(name) = self.name {
            record.name = name;
        }
        if let Some(description) = self.description {
            record.description = Some(description);
        }
        if let Some(sku) = self.sku {
            record.sku = Some(sku);
        }
        if let Some(quantity) = self.quantity {
            record.quantity = quantity;
        }
        if let Some(status) = self.status {
            record.status = status;
        }
        if let Some(images) = self.images {
            record.images = images;
        }
        if let Some(facility) = self.associated_facility {
            record.associated_facility = Some(facility);
        }
        if let Some(category) = self.category {
            record.category = category;
        }
        if let Some(purchase_info) = self.purchase_info {
            record.purchase_info = purchase_info;
        }
        if let Some(pricing) = self.pricing {
            record.pricing = pricing;
        }
        if let Some(history) = self.history {
            record.history = history;
        }
        if let Some(specifications) = self.specifications {
            record.specifications = specifications;
        }
        if let Some(alerts) = self.alerts {
            record.alerts = alerts;
        }
        if let Some(is_taxable) = self.is_taxable {
            record.is_taxable = is_taxable;
        }
    }
}

/// One store-level write against a single item document.
///
/// Image operations run against the stored collection in this order: pull
/// matching ids, then either set the whole collection (`set_images`) or push
/// `push_images` to the end. A set makes the pull moot, matching the merge
/// policy where full replacement supersedes removal. The application is
/// atomic per document; concurrent writers cannot interleave inside it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemUpdate {
    pub patch: ItemPatch,
    pub pull_images: Vec<ImageId>,
    pub push_images: Vec<ImageDescriptor>,
    pub set_images: Option<Vec<ImageDescriptor>>,
    pub push_maintenance: Option<MaintenanceEntry>,
    pub set_deleted: Option<bool>,
}

impl ItemUpdate {
    pub fn from_patch(patch: ItemPatch) -> Self {
        Self {
            patch,
            ..Self::default()
        }
    }

    /// Flip the soft-delete flag, touching nothing else.
    pub fn set_deleted(deleted: bool) -> Self {
        Self {
            set_deleted: Some(deleted),
            ..Self::default()
        }
    }

    /// Append one maintenance schedule entry, touching nothing else.
    pub fn push_maintenance(entry: MaintenanceEntry) -> Self {
        Self {
            push_maintenance: Some(entry),
            ..Self::default()
        }
    }

    /// Apply the update in place. `now` becomes the record's `updated_at`.
    pub fn apply(self, record: &mut ItemRecord, now: DateTime<Utc>) {
        self.patch.apply(record);

        if !self.pull_images.is_empty() {
            record
                .images
                .retain(|img| !self.pull_images.contains(&img.id));
        }
        if let Some(images) = self.set_images {
            record.images = images;
        } else if !self.push_images.is_empty() {
            record.images.extend(self.push_images);
        }

        if let Some(entry) = self.push_maintenance {
            record.maintenance_schedule.push(entry);
        }

        if let Some(deleted) = self.set_deleted {
            record.is_deleted = deleted;
        }

        record.updated_at = now;
    }
}
