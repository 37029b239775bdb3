use crate::domain::vehicle::SortKey;
use crate::dto::main::{IndexPageData, PageLink, VehiclePageData};
use crate::forms::vehicles::VehiclesQueryForm;
use crate::repository::VehicleReader;
use crate::services::vehicles as vehicles_service;
use crate::services::ServiceResult;

/// Builds the link to `page` keeping the submitted filters.
fn page_href(form: &VehiclesQueryForm, page: usize) -> Option<String> {
    let filters = [
        ("limit", &form.limit),
        ("manufacturer", &form.manufacturer),
        ("type", &form.vehicle_type),
        ("year", &form.year),
        ("priceMin", &form.price_min),
        ("priceMax", &form.price_max),
        ("sort", &form.sort),
    ];

    let mut pairs = vec![("page", page.to_string())];
    pairs.extend(filters.into_iter().filter_map(|(key, value)| {
        value
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(|v| (key, v.to_string()))
    }));

    match serde_html_form::to_string(&pairs) {
        Ok(query) => Some(format!("/?{query}")),
        Err(err) => {
            log::warn!("Failed to encode page link: {err}");
            None
        }
    }
}

/// Loads the vehicle grid, filter options and pagination for the index page.
pub fn load_index_page<R>(repo: &R, form: VehiclesQueryForm) -> ServiceResult<IndexPageData>
where
    R: VehicleReader + ?Sized,
{
    let vehicles = vehicles_service::list_vehicles(repo, &form)?;

    let facets = repo.list_facets().map_err(|err| {
        log::error!("Failed to load filter options: {err}");
        err
    })?;

    let links = vehicles
        .links()
        .into_iter()
        .map(|number| PageLink {
            number,
            href: number.and_then(|n| page_href(&form, n)),
            current: number == Some(vehicles.page),
        })
        .collect();

    Ok(IndexPageData {
        vehicles,
        links,
        facets,
        filters: form,
        sort_keys: SortKey::ALL.iter().map(|key| key.as_str()).collect(),
    })
}

/// Loads a single vehicle for the detail page. `None` when it does not exist.
pub fn load_vehicle_page<R>(repo: &R, id: &str) -> ServiceResult<Option<VehiclePageData>>
where
    R: VehicleReader + ?Sized,
{
    let vehicle = vehicles_service::get_vehicle_by_id(repo, id)?;
    Ok(vehicle.map(|vehicle| VehiclePageData { vehicle }))
}
