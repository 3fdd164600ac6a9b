//! `rentory-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod entity;
pub mod error;
pub mod id;
pub mod image;
pub mod pricing;
pub mod visibility;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{BookingId, FacilityId, ImageId, ItemId, UserId};
pub use image::ImageDescriptor;
pub use pricing::{PriceUnit, PricingTier};
pub use visibility::Visibility;
