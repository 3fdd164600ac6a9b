//! Facilities domain module.
//!
//! Facility records are the populate target for inventory items'
//! `associated_facility` weak reference. This crate carries the record shape
//! only; booking and availability rules live with their own collaborators.

pub mod facility;

pub use facility::{Capacity, Coordinates, FacilityRecord, Location, OperationalHours};
