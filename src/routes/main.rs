use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, Responder, get, web};
use tera::Tera;

use crate::forms::vehicles::VehiclesQueryForm;
use crate::repository::VehicleReader;
use crate::routes::{base_context, render_template};
use crate::services::{ServiceError, main as main_service};

#[get("/")]
pub async fn show_index(
    req: HttpRequest,
    repo: web::Data<dyn VehicleReader>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let mut context = base_context("index");

    let result = VehiclesQueryForm::from_query_string(req.query_string())
        .map_err(ServiceError::from)
        .and_then(|form| main_service::load_index_page(repo.get_ref(), form));

    match result {
        Ok(data) => {
            context.insert("vehicles", &data.vehicles);
            context.insert("links", &data.links);
            context.insert("facets", &data.facets);
            context.insert("filters", &data.filters);
            context.insert("sort_keys", &data.sort_keys);
            render_template(&tera, "main/index.html", &context, StatusCode::OK)
        }
        Err(ServiceError::Validation(messages)) => {
            context.insert("alerts", &messages);
            render_template(&tera, "main/index.html", &context, StatusCode::BAD_REQUEST)
        }
        Err(err) => {
            log::error!("Failed to load index page: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/vehicles/{id}")]
pub async fn show_vehicle_page(
    id: web::Path<String>,
    repo: web::Data<dyn VehicleReader>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let id = id.into_inner();
    let mut context = base_context("vehicle");

    match main_service::load_vehicle_page(repo.get_ref(), &id) {
        Ok(Some(data)) => {
            context.insert("vehicle", &data.vehicle);
            render_template(&tera, "vehicle/show.html", &context, StatusCode::OK)
        }
        Ok(None) => {
            context.insert("missing_id", &id);
            render_template(&tera, "errors/not_found.html", &context, StatusCode::NOT_FOUND)
        }
        Err(err) => {
            log::error!("Failed to load vehicle {id}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
