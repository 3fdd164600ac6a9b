//! Record store boundary.
//!
//! This module defines an infrastructure-facing abstraction over the document
//! collections the business layer reads and writes, without making storage
//! assumptions. The in-memory implementation backs tests and development.

pub mod in_memory;
pub mod r#trait;

pub use in_memory::InMemoryRecordStore;
pub use r#trait::{RecordStore, StoreError};
