//! Infrastructure layer: record store boundary and the inventory lifecycle
//! service that orchestrates over it.

pub mod inventory_service;
pub mod record_store;

pub use inventory_service::{InventoryService, ItemWithFacility, ServiceError};
pub use record_store::{InMemoryRecordStore, RecordStore, StoreError};

#[cfg(test)]
mod integration_tests;
