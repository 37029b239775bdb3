use std::sync::Arc;

use actix_web::web;
use vehicle_showcase::repository::{InMemoryRepository, VehicleReader};

/// Five vehicles, in source order v0..v4 (ids "1".."5").
pub const VEHICLES_JSON: &str = r#"[
    {"id": "1", "manufacturer": "Toyota", "model": "Camry", "type": "sedan", "year": 2020, "price": 24000, "fuelType": "petrol", "transmission": "automatic", "mileage": 30000},
    {"id": "2", "manufacturer": "Ford", "model": "F-150", "type": "truck", "year": 2021, "price": 41000, "fuelType": "petrol", "transmission": "automatic", "mileage": 12000},
    {"id": "3", "manufacturer": "Toyota", "model": "RAV4", "type": "suv", "year": 2021, "price": 28000, "fuelType": "hybrid", "transmission": "automatic", "mileage": 8000},
    {"id": "4", "manufacturer": "Honda", "model": "Civic", "type": "sedan", "year": 2019, "price": 21000, "fuelType": "petrol", "transmission": "manual", "mileage": 52000},
    {"id": "5", "manufacturer": "Tesla", "model": "Model Y", "type": "suv", "year": 2023, "price": 47000, "fuelType": "electric", "transmission": "automatic", "mileage": 1500, "features": ["Autopilot"], "description": "Electric crossover."}
]"#;

pub fn repository() -> InMemoryRepository {
    InMemoryRepository::from_json(VEHICLES_JSON).unwrap()
}

pub fn repository_data() -> web::Data<dyn VehicleReader> {
    let repo: Arc<dyn VehicleReader> = Arc::new(repository());
    web::Data::from(repo)
}
