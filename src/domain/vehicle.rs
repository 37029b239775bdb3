use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::types::{
    Manufacturer, ModelName, Price, TypeConstraintError, VehicleId, VehicleType,
};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: VehicleId,
    pub manufacturer: Manufacturer,
    pub model: ModelName,
    #[serde(rename = "type")]
    pub vehicle_type: VehicleType,
    pub year: i32,
    pub price: Price,
    pub fuel_type: String,
    pub transmission: String,
    pub mileage: u32,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
    pub description: Option<String>,
}

/// Field a listing can be ordered by. Ordering is always ascending.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Manufacturer,
    Model,
    Type,
    Year,
    Price,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::Manufacturer,
        SortKey::Model,
        SortKey::Type,
        SortKey::Year,
        SortKey::Price,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            SortKey::Manufacturer => "manufacturer",
            SortKey::Model => "model",
            SortKey::Type => "type",
            SortKey::Year => "year",
            SortKey::Price => "price",
        }
    }

    pub fn compare(self, a: &Vehicle, b: &Vehicle) -> Ordering {
        match self {
            SortKey::Manufacturer => a.manufacturer.cmp(&b.manufacturer),
            SortKey::Model => a.model.cmp(&b.model),
            SortKey::Type => a.vehicle_type.cmp(&b.vehicle_type),
            SortKey::Year => a.year.cmp(&b.year),
            SortKey::Price => a.price.cmp_total(&b.price),
        }
    }
}

impl Display for SortKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| TypeConstraintError::InvalidValue(s.to_string()))
    }
}

/// Distinct filter values present in the collection, sorted ascending.
#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct VehicleFacets {
    pub manufacturers: Vec<String>,
    pub vehicle_types: Vec<String>,
}
