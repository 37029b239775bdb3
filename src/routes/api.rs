use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, Responder, get, web};

use crate::dto::api::ErrorResponse;
use crate::forms::vehicles::VehiclesQueryForm;
use crate::repository::VehicleReader;
use crate::services::{ServiceError, vehicles as vehicles_service};

fn error_response(body: ErrorResponse) -> HttpResponse {
    let status =
        StatusCode::from_u16(body.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    HttpResponse::build(status).json(body)
}

fn service_error_response(err: ServiceError) -> HttpResponse {
    match err {
        ServiceError::Validation(messages) => {
            error_response(ErrorResponse::bad_request(messages))
        }
        ServiceError::Repository(err) => {
            log::error!("Vehicle request failed: {err}");
            error_response(ErrorResponse::internal())
        }
    }
}

#[get("/vehicles")]
pub async fn list_vehicles(
    req: HttpRequest,
    repo: web::Data<dyn VehicleReader>,
) -> impl Responder {
    let form = match VehiclesQueryForm::from_query_string(req.query_string()) {
        Ok(form) => form,
        Err(err) => return error_response(ErrorResponse::bad_request(err.messages())),
    };

    match vehicles_service::list_vehicles(repo.get_ref(), &form) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(err) => service_error_response(err),
    }
}

#[get("/vehicles/{id}")]
pub async fn show_vehicle(
    id: web::Path<String>,
    repo: web::Data<dyn VehicleReader>,
) -> impl Responder {
    let id = id.into_inner();

    match vehicles_service::get_vehicle_by_id(repo.get_ref(), &id) {
        Ok(Some(vehicle)) => HttpResponse::Ok().json(vehicle),
        Ok(None) => error_response(ErrorResponse::not_found(format!(
            "Vehicle with ID {id} not found"
        ))),
        Err(err) => service_error_response(err),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{App, test};

    use super::*;
    use crate::domain::vehicle::Vehicle;
    use crate::dto::api::ErrorMessage;
    use crate::models::vehicle::VehicleRecord;
    use crate::pagination::Page;
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::MockRepository;

    fn vehicle(id: &str) -> Vehicle {
        Vehicle::try_from(VehicleRecord {
            id: id.to_string(),
            manufacturer: "Tesla".to_string(),
            model: "Model 3".to_string(),
            vehicle_type: "sedan".to_string(),
            year: 2023,
            price: 39990.0,
            fuel_type: "electric".to_string(),
            transmission: "automatic".to_string(),
            mileage: 12,
            features: vec!["Autopilot".to_string()],
            images: vec![],
            description: None,
        })
        .unwrap()
    }

    fn data(repo: MockRepository) -> web::Data<dyn VehicleReader> {
        let repo: Arc<dyn VehicleReader> = Arc::new(repo);
        web::Data::from(repo)
    }

    #[actix_web::test]
    async fn list_returns_the_service_page() {
        let mut repo = MockRepository::new();
        repo.expect_list_vehicles()
            .times(1)
            .withf(|query| query.pagination.page == 1 && query.pagination.per_page == 2)
            .returning(|_| Ok((5, vec![vehicle("1"), vehicle("2")])));

        let app = test::init_service(App::new().app_data(data(repo)).service(list_vehicles)).await;
        let req = test::TestRequest::get()
            .uri("/vehicles?page=1&limit=2")
            .to_request();
        let page: Page<Vehicle> = test::call_and_read_body_json(&app, req).await;

        assert_eq!(
            page,
            Page {
                data: vec![vehicle("1"), vehicle("2")],
                total: 5,
                page: 1,
                limit: 2,
                total_pages: 3,
                has_next_page: true,
                has_previous_page: false,
            }
        );
    }

    #[actix_web::test]
    async fn list_propagates_service_failure() {
        let mut repo = MockRepository::new();
        repo.expect_list_vehicles()
            .returning(|_| Err(RepositoryError::Unexpected("Service failure".to_string())));

        let app = test::init_service(App::new().app_data(data(repo)).service(list_vehicles)).await;
        let req = test::TestRequest::get().uri("/vehicles").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[actix_web::test]
    async fn invalid_query_is_a_bad_request() {
        let mut repo = MockRepository::new();
        repo.expect_list_vehicles().never();

        let app = test::init_service(App::new().app_data(data(repo)).service(list_vehicles)).await;
        let req = test::TestRequest::get()
            .uri("/vehicles?page=invalid&limit=-10")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(
            body,
            ErrorResponse {
                status_code: 400,
                message: ErrorMessage::Many(vec![
                    "page must not be less than 1".to_string(),
                    "page must be an integer number".to_string(),
                    "limit must not be less than 1".to_string(),
                ]),
                error: "Bad Request".to_string(),
            }
        );
    }

    #[actix_web::test]
    async fn completely_invalid_query_is_rejected() {
        let mut repo = MockRepository::new();
        repo.expect_list_vehicles().never();

        let app = test::init_service(App::new().app_data(data(repo)).service(list_vehicles)).await;
        let req = test::TestRequest::get()
            .uri("/vehicles?page=invalid&limit=invalid")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn show_returns_vehicle_for_known_id() {
        let mut repo = MockRepository::new();
        repo.expect_get_vehicle_by_id()
            .times(1)
            .withf(|id| id.as_str() == "1")
            .returning(|id| Ok(Some(vehicle(id.as_str()))));

        let app = test::init_service(App::new().app_data(data(repo)).service(show_vehicle)).await;
        let req = test::TestRequest::get().uri("/vehicles/1").to_request();
        let found: Vehicle = test::call_and_read_body_json(&app, req).await;

        assert_eq!(found, vehicle("1"));
    }

    #[actix_web::test]
    async fn show_answers_not_found_for_unknown_id() {
        let mut repo = MockRepository::new();
        repo.expect_get_vehicle_by_id()
            .times(1)
            .withf(|id| id.as_str() == "999")
            .returning(|_| Ok(None));

        let app = test::init_service(App::new().app_data(data(repo)).service(show_vehicle)).await;
        let req = test::TestRequest::get().uri("/vehicles/999").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(
            body,
            ErrorResponse::not_found("Vehicle with ID 999 not found")
        );
    }
}
