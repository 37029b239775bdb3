//! DTOs shaped for the HTML templates.

use serde::Serialize;

use crate::domain::vehicle::{Vehicle, VehicleFacets};
use crate::forms::vehicles::VehiclesQueryForm;
use crate::pagination::Page;

/// One pagination control. `number` is `None` for a gap.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PageLink {
    pub number: Option<usize>,
    pub href: Option<String>,
    pub current: bool,
}

/// Data required to render the vehicle listing page.
#[derive(Debug, Serialize)]
pub struct IndexPageData {
    pub vehicles: Page<Vehicle>,
    pub links: Vec<PageLink>,
    pub facets: VehicleFacets,
    /// Submitted filters, echoed back into the form.
    pub filters: VehiclesQueryForm,
    pub sort_keys: Vec<&'static str>,
}

/// Data required to render a single vehicle.
#[derive(Debug, Serialize)]
pub struct VehiclePageData {
    pub vehicle: Vehicle,
}
