#[cfg(feature = "server")]
use std::sync::Arc;

#[cfg(feature = "server")]
use actix_cors::Cors;
#[cfg(feature = "server")]
use actix_files::Files;
#[cfg(feature = "server")]
use actix_web::{App, HttpServer, middleware, web};
#[cfg(feature = "server")]
use tera::Tera;

#[cfg(feature = "server")]
use crate::models::config::ServerConfig;
#[cfg(feature = "server")]
use crate::repository::{InMemoryRepository, VehicleReader};
#[cfg(feature = "server")]
use crate::routes::api::{list_vehicles, show_vehicle};
#[cfg(feature = "server")]
use crate::routes::main::{show_index, show_vehicle_page};

pub mod domain;
pub mod dto;
mod error_conversions;
pub mod forms;
pub mod models;
pub mod pagination;
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
pub mod services;

/// Loads the configured vehicle collection, falling back to the bundled dataset.
#[cfg(feature = "server")]
pub fn load_repository(server_config: &ServerConfig) -> std::io::Result<InMemoryRepository> {
    let repo = match &server_config.vehicles_file {
        Some(path) => InMemoryRepository::from_json_file(path),
        None => InMemoryRepository::bundled(),
    }
    .map_err(|e| std::io::Error::other(format!("Failed to load vehicles: {e}")))?;

    log::info!("Loaded {} vehicles", repo.len());
    Ok(repo)
}

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
#[cfg(feature = "server")]
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    let repo: Arc<dyn VehicleReader> = Arc::new(load_repository(&server_config)?);
    let repo = web::Data::from(repo);

    let tera = Tera::new(&server_config.templates_dir)
        .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;
    let tera = web::Data::new(tera);

    let assets_dir = server_config.assets_dir.clone();
    let bind_address = (server_config.address.clone(), server_config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(Files::new("/assets", &assets_dir))
            .service(
                web::scope("/api")
                    .service(list_vehicles)
                    .service(show_vehicle),
            )
            .service(show_index)
            .service(show_vehicle_page)
            .app_data(repo.clone())
            .app_data(tera.clone())
    })
    .bind(bind_address)?
    .run()
    .await
}
