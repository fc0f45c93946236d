//! Vehicle DTOs

use serde::Serialize;

use core_kernel::ServiceError;
use domain_lending::Vehicle;

use crate::envelope::StatusEnvelope;

/// Wire representation of a partner vehicle listing
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleDto {
    pub vin: String,
    pub image_url: String,
    pub name: String,
    pub engine_type: String,
    pub configuration: String,
    pub price: i64,
    pub currency_code: String,
}

impl From<&Vehicle> for VehicleDto {
    fn from(vehicle: &Vehicle) -> Self {
        Self {
            vin: vehicle.vin.clone(),
            image_url: vehicle.image_url.clone(),
            name: vehicle.name.clone(),
            engine_type: vehicle.engine_type.clone(),
            configuration: vehicle.configuration.clone(),
            price: vehicle.price,
            currency_code: vehicle.currency_code.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListVehiclesResponse {
    pub vehicles: Vec<VehicleDto>,
    pub status: StatusEnvelope,
}

impl ListVehiclesResponse {
    pub fn ok(items: &[Vehicle]) -> Self {
        Self {
            vehicles: items.iter().map(VehicleDto::from).collect(),
            status: StatusEnvelope::ok(),
        }
    }

    pub fn failed(err: &ServiceError) -> Self {
        Self {
            vehicles: Vec::new(),
            status: err.into(),
        }
    }
}
