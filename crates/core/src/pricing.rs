//! Rental pricing value objects shared by facilities and inventory items.

use serde::{Deserialize, Serialize};

/// Billing unit for a rental price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceUnit {
    Hour,
    Day,
    Week,
    Month,
}

/// One rate in a record's pricing table.
///
/// Amount is in the smallest currency unit (e.g. cents). At most one tier
/// should be marked default; the service does not enforce this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingTier {
    pub unit: PriceUnit,
    pub amount: u64,
    pub is_default: bool,
}
