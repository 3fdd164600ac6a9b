//! Inventory domain module.
//!
//! This crate contains the business rules for rentable inventory items,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no
//! storage): the record shape, the soft-delete-aware query filter, the
//! field-replace patch, and the image-collection merge policy.

pub mod filter;
pub mod images;
pub mod item;
pub mod update;

pub use filter::ItemFilter;
pub use images::{merge_images, ImageOps};
pub use item::{
    ItemAlerts, ItemRecord, ItemStatus, MaintenanceEntry, MaintenanceKind, NewItem, PurchaseInfo,
    SpecValue, StockChange, LOW_STOCK_THRESHOLD,
};
pub use update::{ItemPatch, ItemUpdate};
