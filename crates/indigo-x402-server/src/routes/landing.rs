use actix_web::{web, HttpResponse};

use crate::metrics::record_request;

const LANDING_PAGE: &str = include_str!("../landing.html");

/// GET / - HTML landing page
pub async fn index() -> HttpResponse {
    record_request("/", 200);
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(LANDING_PAGE)
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index));
}
