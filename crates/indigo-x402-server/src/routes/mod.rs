pub mod health;
pub mod landing;
pub mod tools;

use actix_web::web;

/// Mount every route on the app.
pub fn configure(cfg: &mut web::ServiceConfig) {
    landing::configure(cfg);
    health::configure(cfg);
    tools::configure(cfg);
}
