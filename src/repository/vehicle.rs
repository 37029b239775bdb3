use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::domain::types::VehicleId;
use crate::domain::vehicle::{Vehicle, VehicleFacets};
use crate::models::vehicle::VehicleRecord;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{VehicleListQuery, VehicleReader};

const BUNDLED_VEHICLES: &str = include_str!("../../data/vehicles.json");

/// Read-only vehicle collection held in memory and shared between workers.
#[derive(Clone, Debug)]
pub struct InMemoryRepository {
    vehicles: Arc<Vec<Vehicle>>,
}

impl InMemoryRepository {
    /// Wraps `vehicles`, rejecting collections with duplicate ids.
    pub fn new(vehicles: Vec<Vehicle>) -> RepositoryResult<Self> {
        {
            let mut seen = HashSet::new();
            if let Some(duplicate) = vehicles.iter().find(|v| !seen.insert(v.id.as_str())) {
                return Err(RepositoryError::ConstraintViolation(format!(
                    "duplicate vehicle id: {}",
                    duplicate.id
                )));
            }
        }

        Ok(Self {
            vehicles: Arc::new(vehicles),
        })
    }

    /// Parses a JSON array of vehicle records.
    pub fn from_json(json: &str) -> RepositoryResult<Self> {
        let records: Vec<VehicleRecord> = serde_json::from_str(json)?;
        let vehicles = records
            .into_iter()
            .map(Vehicle::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(vehicles)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> RepositoryResult<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// The dataset compiled into the binary.
    pub fn bundled() -> RepositoryResult<Self> {
        Self::from_json(BUNDLED_VEHICLES)
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }
}

impl VehicleReader for InMemoryRepository {
    fn get_vehicle_by_id(&self, id: &VehicleId) -> RepositoryResult<Option<Vehicle>> {
        Ok(self.vehicles.iter().find(|v| &v.id == id).cloned())
    }

    fn list_vehicles(&self, query: &VehicleListQuery) -> RepositoryResult<(usize, Vec<Vehicle>)> {
        let mut matches = self
            .vehicles
            .iter()
            .filter(|v| query.matches(v))
            .collect::<Vec<_>>();

        if let Some(key) = query.sort {
            // `sort_by` is stable, ties keep source order.
            matches.sort_by(|a, b| key.compare(a, b));
        }

        let total = matches.len();
        let items = matches
            .into_iter()
            .skip(query.pagination.offset())
            .take(query.pagination.per_page)
            .cloned()
            .collect();

        Ok((total, items))
    }

    fn list_facets(&self) -> RepositoryResult<VehicleFacets> {
        let manufacturers: BTreeSet<&str> =
            self.vehicles.iter().map(|v| v.manufacturer.as_str()).collect();
        let vehicle_types: BTreeSet<&str> =
            self.vehicles.iter().map(|v| v.vehicle_type.as_str()).collect();

        Ok(VehicleFacets {
            manufacturers: manufacturers.into_iter().map(str::to_string).collect(),
            vehicle_types: vehicle_types.into_iter().map(str::to_string).collect(),
        })
    }
}
