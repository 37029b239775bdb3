//! Raw vehicle rows as stored in the JSON data file.

use serde::Deserialize;

use crate::domain::types::{
    Manufacturer, ModelName, Price, TypeConstraintError, VehicleId, VehicleType,
};
use crate::domain::vehicle::Vehicle;

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleRecord {
    pub id: String,
    pub manufacturer: String,
    pub model: String,
    #[serde(rename = "type")]
    pub vehicle_type: String,
    pub year: i32,
    pub price: f64,
    #[serde(default)]
    pub fuel_type: String,
    #[serde(default)]
    pub transmission: String,
    #[serde(default)]
    pub mileage: u32,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
    pub description: Option<String>,
}

impl TryFrom<VehicleRecord> for Vehicle {
    type Error = TypeConstraintError;

    fn try_from(record: VehicleRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            id: VehicleId::new(record.id)?,
            manufacturer: Manufacturer::new(record.manufacturer)?,
            model: ModelName::new(record.model)?,
            vehicle_type: VehicleType::new(record.vehicle_type)?,
            year: record.year,
            price: Price::new(record.price)?,
            fuel_type: record.fuel_type.trim().to_string(),
            transmission: record.transmission.trim().to_string(),
            mileage: record.mileage,
            features: record.features,
            images: record.images,
            description: record
                .description
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        })
    }
}
