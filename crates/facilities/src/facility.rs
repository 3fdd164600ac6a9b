use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use rentory_core::{Entity, FacilityId, ImageDescriptor, PricingTier};

/// Headcount limits for a facility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capacity {
    pub maximum: u32,
    pub recommended: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub address: Option<String>,
    pub coordinates: Option<Coordinates>,
}

/// Daily opening window, local wall-clock times ("HH:MM").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationalHours {
    pub opening: String,
    pub closing: String,
}

/// A bookable facility (room, court, hall).
///
/// Read by the inventory service when resolving an item's
/// `associated_facility` reference; never mutated through that path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacilityRecord {
    pub id: FacilityId,
    pub name: String,
    pub description: Option<String>,
    pub images: Vec<ImageDescriptor>,
    pub pricing: Vec<PricingTier>,
    pub capacity: Capacity,
    pub amenities: Vec<String>,
    pub location: Location,
    pub operational_hours: OperationalHours,
    pub is_active: bool,
    pub is_taxable: bool,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl FacilityRecord {
    /// Minimal record with sensible defaults; used by tests and seeding.
    pub fn new(name: impl Into<String>, capacity: Capacity, now: DateTime<Utc>) -> Self {
        Self {
            id: FacilityId::new(),
            name: name.into(),
            description: None,
            images: Vec::new(),
            pricing: Vec::new(),
            capacity,
            amenities: Vec::new(),
            location: Location::default(),
            operational_hours: OperationalHours {
                opening: "08:00".to_string(),
                closing: "18:00".to_string(),
            },
            is_active: true,
            is_taxable: false,
            is_deleted: false,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Entity for FacilityRecord {
    type Id = FacilityId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
