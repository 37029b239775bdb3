//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::types::VehicleId;
use crate::domain::vehicle::{Vehicle, VehicleFacets};
use crate::repository::errors::RepositoryResult;
use crate::repository::{VehicleListQuery, VehicleReader};

mock! {
    pub Repository {}

    impl VehicleReader for Repository {
        fn get_vehicle_by_id(&self, id: &VehicleId) -> RepositoryResult<Option<Vehicle>>;
        fn list_vehicles(
            &self,
            query: &VehicleListQuery,
        ) -> RepositoryResult<(usize, Vec<Vehicle>)>;
        fn list_facets(&self) -> RepositoryResult<VehicleFacets>;
    }
}
