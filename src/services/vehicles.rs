use crate::domain::types::VehicleId;
use crate::domain::vehicle::Vehicle;
use crate::forms::vehicles::VehiclesQueryForm;
use crate::pagination::Page;
use crate::repository::{VehicleListQuery, VehicleReader};
use crate::services::{ServiceError, ServiceResult};

/// Validates the raw query and returns the requested page of vehicles.
pub fn list_vehicles<R>(repo: &R, form: &VehiclesQueryForm) -> ServiceResult<Page<Vehicle>>
where
    R: VehicleReader + ?Sized,
{
    let query = form.to_query().map_err(ServiceError::from)?;
    resolve_page(repo, &query)
}

/// Applies an already validated query to the collection.
pub fn resolve_page<R>(repo: &R, query: &VehicleListQuery) -> ServiceResult<Page<Vehicle>>
where
    R: VehicleReader + ?Sized,
{
    let (total, vehicles) = repo.list_vehicles(query).map_err(|err| {
        log::error!("Failed to list vehicles: {err}");
        err
    })?;

    Ok(Page::new(
        vehicles,
        total,
        query.pagination.page,
        query.pagination.per_page,
    ))
}

/// Looks a vehicle up by its exact id. `None` when no vehicle matches; turning
/// that into a "not found" response is up to the caller.
pub fn get_vehicle_by_id<R>(repo: &R, id: &str) -> ServiceResult<Option<Vehicle>>
where
    R: VehicleReader + ?Sized,
{
    // Stored ids are trimmed, so blank or padded input can never match.
    let Some(id) = VehicleId::new(id)
        .ok()
        .filter(|vehicle_id| vehicle_id.as_str() == id)
    else {
        return Ok(None);
    };

    repo.get_vehicle_by_id(&id)
        .map_err(|err| {
            log::error!("Failed to get vehicle {id}: {err}");
            err
        })
        .map_err(ServiceError::from)
}
