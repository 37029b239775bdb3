use crate::{
    domain::{
        types::VehicleId,
        vehicle::{SortKey, Vehicle, VehicleFacets},
    },
    pagination::DEFAULT_ITEMS_PER_PAGE,
    repository::errors::RepositoryResult,
};

pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod vehicle;

pub use vehicle::InMemoryRepository;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

impl Pagination {
    /// Zero-based index of the first item on the page.
    pub fn offset(&self) -> usize {
        self.page.saturating_sub(1).saturating_mul(self.per_page)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_ITEMS_PER_PAGE,
        }
    }
}

/// Normalized listing request. Absent filters impose no constraint.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VehicleListQuery {
    pub manufacturer: Option<String>,
    pub vehicle_type: Option<String>,
    pub year: Option<i64>,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
    pub sort: Option<SortKey>,
    pub pagination: Pagination,
}

impl VehicleListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn manufacturer(mut self, manufacturer: impl Into<String>) -> Self {
        self.manufacturer = Some(manufacturer.into());
        self
    }

    pub fn vehicle_type(mut self, vehicle_type: impl Into<String>) -> Self {
        self.vehicle_type = Some(vehicle_type.into());
        self
    }

    pub fn year(mut self, year: i64) -> Self {
        self.year = Some(year);
        self
    }

    pub fn price_min(mut self, price: f64) -> Self {
        self.price_min = Some(price);
        self
    }

    pub fn price_max(mut self, price: f64) -> Self {
        self.price_max = Some(price);
        self
    }

    pub fn sort_by(mut self, key: SortKey) -> Self {
        self.sort = Some(key);
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Pagination { page, per_page };
        self
    }

    /// Whether `vehicle` satisfies every filter present in the query.
    pub fn matches(&self, vehicle: &Vehicle) -> bool {
        let price = vehicle.price.get();

        self.manufacturer
            .as_deref()
            .is_none_or(|m| vehicle.manufacturer.as_str() == m)
            && self
                .vehicle_type
                .as_deref()
                .is_none_or(|t| vehicle.vehicle_type.as_str() == t)
            && self.year.is_none_or(|year| i64::from(vehicle.year) == year)
            && self.price_min.is_none_or(|min| price >= min)
            && self.price_max.is_none_or(|max| price <= max)
    }
}

pub trait VehicleReader: Send + Sync {
    fn get_vehicle_by_id(&self, id: &VehicleId) -> RepositoryResult<Option<Vehicle>>;
    /// Returns the number of matching vehicles and the requested page of them.
    fn list_vehicles(&self, query: &VehicleListQuery) -> RepositoryResult<(usize, Vec<Vehicle>)>;
    fn list_facets(&self) -> RepositoryResult<VehicleFacets>;
}
