//! Vehicle listings
//!
//! Vehicles come entirely from the inventory partner and are never
//! persisted locally. The VIN is the identity. Field names follow the
//! partner's camelCase JSON contract.

use serde::{Deserialize, Serialize};

/// A vehicle listing sourced from the inventory partner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub vin: String,
    pub image_url: String,
    pub name: String,
    pub engine_type: String,
    pub configuration: String,
    /// Listed price in minor units
    pub price: i64,
    pub currency_code: String,
}
