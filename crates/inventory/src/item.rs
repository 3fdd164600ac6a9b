use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use rentory_core::{
    BookingId, DomainError, DomainResult, Entity, FacilityId, ImageDescriptor, ItemId,
    PricingTier, UserId,
};

/// Items with `quantity` below this count appear in the low-stock view.
pub const LOW_STOCK_THRESHOLD: u32 = 5;

/// Item availability status.
///
/// A closed enumeration, not a state machine: any value may overwrite any
/// other via update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemStatus {
    InStock,
    Rented,
    Unavailable,
    Maintenance,
    Retired,
}

/// Acquisition details, descriptive only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PurchaseInfo {
    pub purchase_date: Option<DateTime<Utc>>,
    /// Smallest currency unit (e.g. cents).
    pub purchase_price: Option<u64>,
    pub supplier: Option<String>,
    pub warranty_expiry: Option<DateTime<Utc>>,
}

/// One quantity adjustment in the item's audit trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockChange {
    pub date: DateTime<Utc>,
    pub change: i64,
    pub reason: String,
    pub user: UserId,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaintenanceKind {
    Cleaning,
    Repair,
    Inspection,
    Calibration,
}

/// One entry in the append-only maintenance schedule.
///
/// Entries are appended as-is: no deduplication, no date-order validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceEntry {
    pub scheduled_date: DateTime<Utc>,
    pub kind: MaintenanceKind,
    pub completed: bool,
    pub completed_date: Option<DateTime<Utc>>,
    /// Smallest currency unit.
    pub cost: Option<u64>,
    pub notes: Option<String>,
    pub performed_by: Option<UserId>,
}

/// A free-form specification value (dimensions, wattage, colour, ...).
///
/// Replaces the original loose string-to-anything map: values are one of
/// three explicit shapes, validated at the boundary by serde.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SpecValue {
    Flag(bool),
    Number(f64),
    Text(String),
}

/// Derived alert flags, stored denormalized on the record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemAlerts {
    pub low_stock: bool,
    pub maintenance_due: bool,
    pub warranty_expiring: bool,
}

/// An inventory item record as persisted in the item collection.
///
/// Soft-delete lifecycle: created → mutated any number of times →
/// `is_deleted` flipped on → optionally flipped back off. Never physically
/// removed; deleting drops no history, images, or schedule entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemRecord {
    pub id: ItemId,
    pub name: String,
    pub description: Option<String>,
    pub sku: Option<String>,
    pub quantity: u32,
    pub status: ItemStatus,
    /// Ordered; each descriptor's id is unique within the item.
    pub images: Vec<ImageDescriptor>,
    /// Weak reference, resolved (never owned) on read.
    pub associated_facility: Option<FacilityId>,
    pub category: String,
    pub purchase_info: PurchaseInfo,
    pub pricing: Vec<PricingTier>,
    pub history: Vec<StockChange>,
    /// Append-only; see [`MaintenanceEntry`].
    pub maintenance_schedule: Vec<MaintenanceEntry>,
    pub current_bookings: Vec<BookingId>,
    pub specifications: BTreeMap<String, SpecValue>,
    pub alerts: ItemAlerts,
    pub is_taxable: bool,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ItemRecord {
    pub fn is_low_stock(&self) -> bool {
        self.quantity < LOW_STOCK_THRESHOLD
    }
}

impl Entity for ItemRecord {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Caller-supplied fields for creating an item.
///
/// Identity, timestamps, and the runtime collections (history, schedule,
/// bookings) are owned by the service and the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewItem {
    pub name: String,
    pub description: Option<String>,
    pub sku: Option<String>,
    pub quantity: u32,
    pub status: ItemStatus,
    pub images: Vec<ImageDescriptor>,
    pub associated_facility: Option<FacilityId>,
    pub category: String,
    pub purchase_info: PurchaseInfo,
    pub pricing: Vec<PricingTier>,
    pub specifications: BTreeMap<String, SpecValue>,
    pub is_taxable: bool,
}

impl NewItem {
    pub fn new(
        name: impl Into<String>,
        quantity: u32,
        status: ItemStatus,
        category: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: None,
            sku: None,
            quantity,
            status,
            images: Vec::new(),
            associated_facility: None,
            category: category.into(),
            purchase_info: PurchaseInfo::default(),
            pricing: Vec::new(),
            specifications: BTreeMap::new(),
            is_taxable: false,
        }
    }

    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        Ok(())
    }

    /// Materialize the record to persist. No uniqueness constraint beyond
    /// the freshly generated id.
    pub fn into_record(self, now: DateTime<Utc>) -> ItemRecord {
        ItemRecord {
            id: ItemId::new(),
            name: self.name,
            description: self.description,
            sku: self.sku,
            quantity: self.quantity,
            status: self.status,
            images: self.images,
            associated_facility: self.associated_facility,
            category: self.category,
            purchase_info: self.purchase_info,
            pricing: self.pricing,
            history: Vec::new(),
            maintenance_schedule: Vec::new(),
            current_bookings: Vec::new(),
            specifications: self.specifications,
            alerts: ItemAlerts::default(),
            is_taxable: self.is_taxable,
            is_deleted: false,
            created_at: now,
            updated_at: now,
        }
    }
}
