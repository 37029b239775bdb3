//! HTTP handlers. JSON endpoints live in [`api`], HTML pages in [`main`].

use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use tera::{Context, Tera};

pub mod api;
pub mod main;

pub const SITE_TITLE: &str = "Vehicle Showcase";
pub const SITE_DESCRIPTION: &str = "Browse our collection of vehicles";

/// Context shared by every page rendered from `base.html`.
pub fn base_context(current_page: &str) -> Context {
    let mut context = Context::new();
    context.insert("site_title", SITE_TITLE);
    context.insert("site_description", SITE_DESCRIPTION);
    context.insert("current_page", current_page);
    context
}

/// Renders `template` with `status`, logging and answering 500 on failure.
pub fn render_template(
    tera: &Tera,
    template: &str,
    context: &Context,
    status: StatusCode,
) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::build(status)
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(err) => {
            log::error!("Failed to render template '{template}': {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
